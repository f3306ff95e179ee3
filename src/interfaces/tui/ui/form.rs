//! Schema-driven form rendering inside a centered popup.

use ratatui::Frame;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::common::centered_rect;
use crate::interfaces::tui::app::forms::{FieldKind, FormState};

pub fn render(frame: &mut Frame, form: &FormState) {
    let area = centered_rect(50, 60, frame.area());
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, field) in form.schema.fields.iter().enumerate() {
        let focused = i == form.focus;
        let marker = if focused { "> " } else { "  " };
        let value = display_value(form, i);
        let value_style = if focused {
            Style::new().fg(Color::Yellow)
        } else {
            Style::new()
        };
        let mut spans = vec![
            Span::raw(marker.to_string()),
            Span::styled(
                format!("{:<14}", field.label),
                Style::new().add_modifier(Modifier::BOLD),
            ),
            Span::styled(value, value_style),
        ];
        if matches!(field.kind, FieldKind::Select(_)) {
            spans.push(Span::styled("  ◂ ▸", Style::new().fg(Color::DarkGray)));
        }
        lines.push(Line::from(spans));
        if let Some(error) = form.error(field.key) {
            lines.push(Line::from(Span::styled(
                format!("    {}", error),
                Style::new().fg(Color::Red),
            )));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  Enter submit · Tab next · Esc cancel",
        Style::new().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", form.schema.title));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn display_value(form: &FormState, index: usize) -> String {
    let value = form.field_value(index);
    if form.mask_input && form.schema.fields[index].key == "password" {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    }
}
