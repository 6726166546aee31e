//! Filter bar — free-text filter over the job list, with a match counter.
//!
//! Matching is case-insensitive over title, company, location and type.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use crate::widgets::command_bar::{next_boundary, prev_boundary};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct FilterBarState {
    pub query: String,
    /// Byte offset of the cursor within `query`.
    pub cursor: usize,
}

impl FilterBarState {
    /// Apply an editing event. Returns `true` when the query text changed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                self.query.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(query = %self.query, "filter: char inserted");
                true
            }
            AppEvent::Backspace if self.cursor > 0 => {
                let prev = prev_boundary(&self.query, self.cursor);
                self.query.remove(prev);
                self.cursor = prev;
                tracing::debug!(query = %self.query, "filter: backspace");
                true
            }
            AppEvent::Nav(Direction::Left) => {
                self.cursor = prev_boundary(&self.query, self.cursor);
                false
            }
            AppEvent::Nav(Direction::Right) => {
                self.cursor = next_boundary(&self.query, self.cursor);
                false
            }
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct FilterBar<'a> {
    state: &'a FilterBarState,
    focused: bool,
    /// `(shown, total)` once the catalog has loaded.
    counts: Option<(usize, usize)>,
    theme: &'a Theme,
}

impl<'a> FilterBar<'a> {
    pub fn new(state: &'a FilterBarState, focused: bool, counts: Option<(usize, usize)>, theme: &'a Theme) -> Self {
        Self { state, focused, counts, theme }
    }

    /// Absolute terminal position of the text cursor inside the bordered block.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let col = self.state.query[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(1));
        (x, area.y + 1)
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let block = Block::bordered().title("Filter").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let [text_area, count_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(16)]).areas(inner);

        let query_line = if self.state.query.is_empty() && !self.focused {
            Line::from(Span::styled("press / to filter", self.theme.muted))
        } else {
            Line::from(self.state.query.as_str())
        };
        Paragraph::new(query_line).render(text_area, buf);

        if let Some((shown, total)) = self.counts {
            Paragraph::new(Line::from(Span::styled(format!("{shown}/{total} jobs"), self.theme.muted)))
                .alignment(Alignment::Right)
                .render(count_area, buf);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
