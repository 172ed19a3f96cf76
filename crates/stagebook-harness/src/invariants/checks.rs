//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use super::{AppSnapshot, Invariant, InvariantKind, InvariantResult, Violation};

fn violation(kind: InvariantKind, message: String) -> InvariantResult {
    Err(Violation { invariant: kind, message })
}

/// The code value holds ASCII digits only.
///
/// Every input path sanitizes before the value reaches the host, so a
/// letter in the code means a path skipped sanitization.
pub struct CodeDigitsOnly;

impl Invariant for CodeDigitsOnly {
    fn kind(&self) -> InvariantKind {
        InvariantKind::CodeDigitsOnly
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        match &state.otp {
            Some(otp) if !otp.code.chars().all(|c| c.is_ascii_digit()) => {
                violation(self.kind(), format!("code {:?} has non-digits", otp.code))
            },
            _ => Ok(()),
        }
    }
}

/// The code is never longer than the number of cells.
pub struct CodeWithinLength;

impl Invariant for CodeWithinLength {
    fn kind(&self) -> InvariantKind {
        InvariantKind::CodeWithinLength
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        match &state.otp {
            Some(otp) if otp.code.chars().count() > otp.length => violation(
                self.kind(),
                format!("code {:?} longer than {} cells", otp.code, otp.length),
            ),
            _ => Ok(()),
        }
    }
}

/// One handle per cell, exactly one of them focused, and the focused index
/// names a real cell.
pub struct SingleFocusedCell;

impl Invariant for SingleFocusedCell {
    fn kind(&self) -> InvariantKind {
        InvariantKind::SingleFocusedCell
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        let Some(otp) = &state.otp else {
            return Ok(());
        };
        if otp.handle_count != otp.length {
            return violation(
                self.kind(),
                format!("{} handles for {} cells", otp.handle_count, otp.length),
            );
        }
        if otp.focused_handles != 1 {
            return violation(self.kind(), format!("{} cells focused", otp.focused_handles));
        }
        if otp.focused_cell >= otp.length {
            return violation(
                self.kind(),
                format!("focus on cell {} of {}", otp.focused_cell, otp.length),
            );
        }
        Ok(())
    }
}

/// The resend countdown stays within its period.
pub struct CooldownBounded;

impl Invariant for CooldownBounded {
    fn kind(&self) -> InvariantKind {
        InvariantKind::CooldownBounded
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        match &state.otp {
            Some(otp) if otp.cooldown_remaining > otp.cooldown_period => violation(
                self.kind(),
                format!("{}s left of a {}s period", otp.cooldown_remaining, otp.cooldown_period),
            ),
            _ => Ok(()),
        }
    }
}

/// Showing the passcode screen requires a mounted form for the same
/// identifier.
pub struct OtpFormMatchesRoute;

impl Invariant for OtpFormMatchesRoute {
    fn kind(&self) -> InvariantKind {
        InvariantKind::OtpFormMatchesRoute
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        let Some(identifier) = &state.otp_route_identifier else {
            return Ok(());
        };
        match &state.otp {
            Some(otp) if &otp.identifier == identifier => Ok(()),
            Some(otp) => violation(
                self.kind(),
                format!("route for {identifier:?} but form for {:?}", otp.identifier),
            ),
            None => violation(self.kind(), format!("route for {identifier:?} has no form")),
        }
    }
}

/// The comment sheet sits on the home tab and belongs to a loaded post.
pub struct SheetOverLoadedFeed;

impl Invariant for SheetOverLoadedFeed {
    fn kind(&self) -> InvariantKind {
        InvariantKind::SheetOverLoadedFeed
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        let Some(sheet) = &state.sheet else {
            return Ok(());
        };
        if state.route != "tabs/home" {
            return violation(self.kind(), format!("sheet open on {}", state.route));
        }
        if !sheet.post_in_feed {
            return violation(self.kind(), format!("sheet for unknown post {}", sheet.post_id));
        }
        Ok(())
    }
}

/// The feed selection indexes a loaded post, or is zero when there are none.
pub struct FeedSelectionInRange;

impl Invariant for FeedSelectionInRange {
    fn kind(&self) -> InvariantKind {
        InvariantKind::FeedSelectionInRange
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        let len = state.feed_len.unwrap_or(0);
        if state.feed_selected >= len.max(1) {
            return violation(
                self.kind(),
                format!("selected {} of {len} posts", state.feed_selected),
            );
        }
        Ok(())
    }
}
