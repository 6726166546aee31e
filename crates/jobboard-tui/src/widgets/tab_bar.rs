//! Tab bar — the strip of open tabs at the top of the screen.

use crate::app::TabState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Tabs, Widget},
};

/// Tabs are numbered from 1; the main list is always first. Keybinding
/// hints are right-aligned in the same row.
pub struct TabBar<'a> {
    tabs: &'a [TabState],
    active: usize,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(tabs: &'a [TabState], active: usize, theme: &'a Theme) -> Self {
        Self { tabs, active, theme }
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels: Vec<Line> = self
            .tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| Line::from(format!(" {}:{} ", i + 1, tab.label)))
            .collect();

        Tabs::new(labels)
            .select(self.active)
            .highlight_style(self.theme.selected)
            .divider("")
            .render(area, buf);

        let hint = " q:quit  ?:help ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(hint_x, area.y, hint, self.theme.muted);
    }
}
