use ratatui::layout::Position;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, COMPLETED_TEXT, GLOBAL_BORDER, HEADER_TEXT};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, input, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.snapshot()), header);

    let input_block = Block::default()
        .title(" New todo ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let draft = Paragraph::new(app.input().to_string())
        .style(Style::default().fg(HEADER_TEXT))
        .block(input_block);
    frame.render_widget(draft, input);
    if input.width > 2 && input.height > 1 {
        let cursor_x = input.x + 1 + (app.input().chars().count() as u16)
            .min(input.width.saturating_sub(2));
        frame.set_cursor_position(Position::new(cursor_x, input.y + 1));
    }

    let items: Vec<ListItem<'_>> = app
        .visible()
        .into_iter()
        .map(|todo| {
            let (marker, style) = if todo.completed {
                (
                    "[x] ",
                    Style::default()
                        .fg(COMPLETED_TEXT)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                ("[ ] ", Style::default().fg(HEADER_TEXT))
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(ACCENT)),
                Span::styled(todo.text.clone(), style),
            ]))
        })
        .collect();
    let has_items = !items.is_empty();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let mut list_state = ListState::default();
    if has_items {
        list_state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, body, &mut list_state);

    frame.render_widget(
        Footer::new().widget(app.snapshot().filter, footer.width),
        footer,
    );
}
