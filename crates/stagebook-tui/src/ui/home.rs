//! Home tab
//!
//! Location header, the post feed and the comment sheet.

use std::iter;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, List, ListItem},
};
use stagebook_app::{App, CommentSheet, Loadable};
use stagebook_core::{Comment, Post};

use super::{
    auth::hint_text,
    widgets::{PostCard, TextInput, icon, sheet_area},
};
use crate::theme::{self, spacing};

const LOCATION: &str = "Near Phoenix Market City, Whitefield";
const SUB_LOCATION: &str = "Bengaluru - 560066";

const FEED_HINTS: [(&str, &str); 4] =
    [("↑↓", "select"), ("Enter", "comments"), ("Tab", "next tab"), ("q", "quit")];

const SHEET_HINTS: [(&str, &str); 3] = [("Enter", "send"), ("↑↓", "resize"), ("Esc", "close")];

/// Rows per comment in the sheet: author and body.
const COMMENT_HEIGHT: u16 = 2;

/// Render the home feed.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let [header, _, feed, hints] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(spacing::S),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_location(frame, header);

    let home = app.home();
    match home.posts() {
        Loadable::Idle | Loadable::Loading => {
            frame.render_widget(Line::styled("Loading feed...", theme::muted()), feed);
        },
        Loadable::Failed(message) => {
            frame.render_widget(Line::styled(message.as_str(), theme::error()), feed);
        },
        Loadable::Ready(posts) if posts.is_empty() => {
            frame.render_widget(Line::styled("No posts yet", theme::muted()), feed);
        },
        Loadable::Ready(posts) => render_posts(frame, posts, home.selected(), feed),
    }

    frame.render_widget(Line::styled(hint_text(&FEED_HINTS), theme::muted()), hints);
}

fn render_location(frame: &mut Frame, area: Rect) {
    let [first, second] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Line::from(vec![
            Span::raw(icon("MapPin")),
            Span::raw(" "),
            Span::styled(LOCATION, Style::new().add_modifier(Modifier::BOLD)),
        ]),
        first,
    );
    frame.render_widget(Line::raw(icon("Bell")).alignment(Alignment::Right), first);
    frame.render_widget(Line::styled(format!("  {SUB_LOCATION}"), theme::muted()), second);
}

/// Cards that fit in `area`, scrolled so the selected one is visible.
fn render_posts(frame: &mut Frame, posts: &[Post], selected: usize, area: Rect) {
    let fits = usize::from((area.height / PostCard::HEIGHT).max(1));
    let first = (selected + 1).saturating_sub(fits);
    let shown = posts.iter().enumerate().skip(first).take(fits);

    let slots = Layout::vertical(iter::repeat_n(Constraint::Length(PostCard::HEIGHT), fits))
        .split(area);
    for ((index, post), slot) in shown.zip(slots.iter()) {
        frame.render_widget(PostCard::new(post, index == selected), *slot);
    }
}

/// Render the comment sheet over the bottom of `area`.
pub fn render_sheet(frame: &mut Frame, sheet: &CommentSheet, area: Rect) {
    let area = sheet_area(area, sheet.snap());
    frame.render_widget(Clear, area);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(theme::BRAND_PRIMARY))
        .title(Line::styled(sheet.title(), theme::heading()))
        .style(theme::screen());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [list_area, input_area, footer] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(TextInput::HEIGHT),
        Constraint::Length(1),
    ])
    .areas(inner);

    match sheet.comments() {
        Loadable::Idle | Loadable::Loading => {
            frame.render_widget(Line::styled("Loading comments...", theme::muted()), list_area);
        },
        Loadable::Failed(message) => {
            frame.render_widget(Line::styled(message.as_str(), theme::error()), list_area);
        },
        Loadable::Ready(comments) => render_comments(frame, comments, list_area),
    }

    let input = TextInput::new(sheet.draft(), !sheet.is_posting());
    if let Some(position) = input.cursor_position(input_area) {
        frame.set_cursor_position(position);
    }
    frame.render_widget(input, input_area);

    let send = if sheet.is_posting() {
        Span::styled("Posting...", theme::muted())
    } else if sheet.can_post() {
        Span::styled(format!("{} Send", icon("PaperPlaneTilt")), theme::link())
    } else {
        Span::styled(format!("{} Send", icon("PaperPlaneTilt")), Style::new().fg(theme::GREY))
    };
    frame.render_widget(Line::styled(hint_text(&SHEET_HINTS), theme::muted()), footer);
    frame.render_widget(Line::from(send).alignment(Alignment::Right), footer);
}

/// Newest comments that fit, oldest on top.
fn render_comments(frame: &mut Frame, comments: &[Comment], area: Rect) {
    if comments.is_empty() {
        frame.render_widget(Line::styled("Be the first to comment", theme::muted()), area);
        return;
    }

    let fits = usize::from(area.height / COMMENT_HEIGHT);
    let skip = comments.len().saturating_sub(fits);
    let items: Vec<ListItem> = comments
        .iter()
        .skip(skip)
        .map(|comment| {
            ListItem::new(vec![
                Line::styled(comment.author.as_str(), Style::new().add_modifier(Modifier::BOLD)),
                Line::raw(comment.body.as_str()),
            ])
        })
        .collect();

    frame.render_widget(List::new(items), area);
}
