//! Help popup — centred floating overlay listing all keybindings.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("q  /  Ctrl+c", "Quit / close detail tab"),
    ("Tab", "Cycle focus: list → preview → filter"),
    ("/", "Focus filter bar"),
    ("Escape", "Return focus from filter bar"),
    ("↑ k  /  ↓ j", "Move selection or scroll details"),
    ("g  /  G", "First / last job"),
    ("PageUp  /  Ctrl+u", "Page up"),
    ("PageDown / Ctrl+d", "Page down"),
    ("Enter", "Open selected job in a tab"),
    ("[  /  ]", "Previous / next tab"),
    (":", "Command line (:help for commands)"),
    (":open <id>", "Open a job by id"),
    (":template [path]", "Write the sample workbook"),
    (":upload <path>", "Parse a workbook (not saved)"),
    (":schema", "Toggle JSON-LD view"),
    (":theme <name>", "default | gruvbox"),
    ("?", "Toggle this help popup"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(76, BINDINGS.len() as u16 + 2, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" jobboard — keybindings (? to close) ")
            .border_style(self.theme.border_focused);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("  {key:<22}"), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(*desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect { x, y, width: width.min(area.width), height: height.min(area.height) }
}
