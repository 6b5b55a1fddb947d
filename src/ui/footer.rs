use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::todo::VisibilityFilter;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Footer with the three filter links (the active one emphasized) and
/// key hints, version right-aligned.
pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, current: VisibilityFilter, area_width: u16) -> Paragraph<'static> {
        let dim_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let active_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::styled(" Show: ", dim_style)];
        for (i, filter) in [
            VisibilityFilter::All,
            VisibilityFilter::Active,
            VisibilityFilter::Completed,
        ]
        .into_iter()
        .enumerate()
        {
            if i > 0 {
                spans.push(Span::styled(" │ ", dim_style));
            }
            let style = if filter == current {
                active_style
            } else {
                dim_style
            };
            spans.push(Span::styled(filter.label(), style));
        }

        let hints = "   Enter: Add │ Ctrl+T: Toggle │ Tab: Filter │ Ctrl+Q: Quit";
        spans.push(Span::styled(hints, dim_style));

        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let content_width = area_width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::styled(" ".repeat(padding), dim_style));
        spans.push(Span::styled(version, dim_style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
