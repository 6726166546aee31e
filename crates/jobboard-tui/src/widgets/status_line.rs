//! Status line — one row at the bottom for command results.

use crate::app::StatusMessage;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusLine<'a> {
    message: Option<&'a StatusMessage>,
    theme: &'a Theme,
}

impl<'a> StatusLine<'a> {
    pub fn new(message: Option<&'a StatusMessage>, theme: &'a Theme) -> Self {
        Self { message, theme }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.message {
            Some(msg) if msg.is_error => Line::from(Span::styled(msg.text.as_str(), self.theme.error)),
            Some(msg) => Line::from(Span::styled(msg.text.as_str(), self.theme.info)),
            None => Line::from(Span::styled(": command   / filter   ? help", self.theme.muted)),
        };
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::buffer_text;

    #[test]
    fn shows_message_text() {
        let theme = Theme::load_default();
        let area = Rect::new(0, 0, 40, 1);
        let msg = StatusMessage::error("Error reading file");
        let mut buf = Buffer::empty(area);
        StatusLine::new(Some(&msg), &theme).render(area, &mut buf);
        assert!(buffer_text(&buf).starts_with("Error reading file"));
    }
}
