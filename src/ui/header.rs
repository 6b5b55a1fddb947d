use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::todo::TodoState;
use crate::ui::theme::{ACCENT, HEADER_SEPARATOR, HEADER_TEXT};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &TodoState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let accent_style = Style::default().fg(ACCENT);

        let active = state.active_count();
        let total = state.todos.len();
        let line = Line::from(vec![
            Span::styled(" tuido", accent_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} active", active), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} total", total), text_style),
        ]);

        Paragraph::new(line)
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
