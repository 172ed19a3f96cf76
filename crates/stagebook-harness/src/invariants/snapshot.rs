//! Observable state extracted from the App for invariant checking.
//!
//! Snapshots copy out only what the invariants look at, so checks never
//! borrow the App and a failing snapshot can be printed or serialized as is.

use serde::Serialize;
use stagebook_app::{App, Loadable, OtpForm, Route};

/// Passcode screen state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtpSnapshot {
    /// Identifier the form was created for.
    pub identifier: String,
    /// Canonical code value.
    pub code: String,
    /// Number of cells.
    pub length: usize,
    /// Focused cell index.
    pub focused_cell: usize,
    /// Number of cell handles reporting focus.
    pub focused_handles: usize,
    /// Total number of cell handles.
    pub handle_count: usize,
    /// Times the code reached full length.
    pub completions: u32,
    /// Seconds left before a resend is allowed.
    pub cooldown_remaining: u32,
    /// Full cooldown period in seconds.
    pub cooldown_period: u32,
}

impl OtpSnapshot {
    /// Extract the passcode form state.
    pub fn from_form(form: &OtpForm) -> Self {
        let input = form.input();
        let handles = input.handles();
        Self {
            identifier: form.identifier().to_owned(),
            code: form.code().to_owned(),
            length: input.length(),
            focused_cell: input.focused_cell(),
            focused_handles: handles.iter().filter(|h| h.is_focused()).count(),
            handle_count: handles.len(),
            completions: form.completions(),
            cooldown_remaining: form.cooldown().remaining(),
            cooldown_period: form.cooldown().period(),
        }
    }
}

/// Comment sheet state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetSnapshot {
    /// Post the sheet belongs to.
    pub post_id: u64,
    /// Whether that post is in the loaded feed.
    pub post_in_feed: bool,
}

/// Snapshot of the whole App.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppSnapshot {
    /// Name of the route on top of the stack.
    pub route: &'static str,
    /// Identifier carried by the top route when it is the passcode screen.
    pub otp_route_identifier: Option<String>,
    /// Navigation stack depth.
    pub depth: usize,
    /// Passcode form, if mounted.
    pub otp: Option<OtpSnapshot>,
    /// Open comment sheet, if any.
    pub sheet: Option<SheetSnapshot>,
    /// Number of loaded feed posts, if the feed is ready.
    pub feed_len: Option<usize>,
    /// Selected feed row.
    pub feed_selected: usize,
}

impl AppSnapshot {
    /// Extract a snapshot from the App.
    pub fn from_app(app: &App) -> Self {
        let otp_route_identifier = match app.route() {
            Route::Otp { identifier } => Some(identifier.clone()),
            _ => None,
        };
        let posts = match app.home().posts() {
            Loadable::Ready(posts) => Some(posts.as_slice()),
            _ => None,
        };
        let sheet = app.sheet().map(|sheet| SheetSnapshot {
            post_id: sheet.post_id().0,
            post_in_feed: posts.is_some_and(|p| p.iter().any(|post| post.id == sheet.post_id())),
        });

        Self {
            route: app.route().name(),
            otp_route_identifier,
            depth: app.navigator().depth(),
            otp: app.otp().map(OtpSnapshot::from_form),
            sheet,
            feed_len: posts.map(<[_]>::len),
            feed_selected: app.home().selected(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use stagebook_app::{AppEvent, KeyInput};

    use super::*;

    #[test]
    fn fresh_app_is_on_login() {
        let snapshot = AppSnapshot::from_app(&App::default());

        assert_eq!(snapshot.route, "login");
        assert_eq!(snapshot.depth, 1);
        assert!(snapshot.otp.is_none());
        assert!(snapshot.sheet.is_none());
        assert_eq!(snapshot.feed_len, None);
    }

    #[test]
    fn otp_snapshot_tracks_entry() {
        let mut app = App::default();
        app.handle(AppEvent::CredentialAccepted { identifier: "9876543210".into() });
        for c in "1234".chars() {
            app.handle(AppEvent::Key(KeyInput::Char(c)));
        }

        let otp = AppSnapshot::from_app(&app).otp.unwrap();

        insta::assert_json_snapshot!(otp, @r#"
        {
          "identifier": "9876543210",
          "code": "1234",
          "length": 6,
          "focused_cell": 4,
          "focused_handles": 1,
          "handle_count": 6,
          "completions": 0,
          "cooldown_remaining": 0,
          "cooldown_period": 30
        }
        "#);
    }
}
