//! Dialog UI rendering.

use super::{CustomDataDialog, CustomField, PathPrompt, TextField};
use crate::shared::{centered_fixed, ThemeColors};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw the custom data dialog.
pub fn draw_custom_dialog(
    f: &mut Frame<'_>,
    dialog: &CustomDataDialog,
    width: u16,
    colors: &ThemeColors,
) {
    if !dialog.visible {
        return;
    }

    let area = centered_fixed(width, 13, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Input data for graph ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // X label
            Constraint::Length(3), // X field
            Constraint::Length(1), // Y label
            Constraint::Length(3), // Y field
            Constraint::Length(1), // Error
            Constraint::Length(1), // Button
            Constraint::Min(0),
        ])
        .split(inner);

    let label_style = Style::default().fg(colors.label);
    f.render_widget(
        Paragraph::new("Enter data for the X axis (separated by comma):").style(label_style),
        chunks[0],
    );
    draw_field(f, chunks[1], &dialog.x, dialog.focus == CustomField::X, colors);

    f.render_widget(
        Paragraph::new("Enter data for the Y axis (separated by comma):").style(label_style),
        chunks[2],
    );
    draw_field(f, chunks[3], &dialog.y, dialog.focus == CustomField::Y, colors);

    if let Some(ref error) = dialog.error {
        f.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(colors.error)),
            chunks[4],
        );
    }

    let button = Paragraph::new(Line::from(Span::styled(
        " Plot graph (Enter) ",
        Style::default()
            .fg(colors.cursor_fg)
            .bg(colors.cursor_bg)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(button, chunks[5]);
}

/// Draw the save/export path prompt.
pub fn draw_path_prompt(f: &mut Frame<'_>, prompt: &PathPrompt, width: u16, colors: &ThemeColors) {
    let Some(purpose) = prompt.purpose else {
        return;
    };

    let area = centered_fixed(width, 6, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", purpose.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    draw_field(f, chunks[0], &prompt.field, true, colors);
    f.render_widget(
        Paragraph::new(purpose.hint()).style(Style::default().fg(colors.label)),
        chunks[1],
    );
}

fn draw_field(f: &mut Frame<'_>, area: Rect, field: &TextField, focused: bool, colors: &ThemeColors) {
    let border = if focused {
        colors.heading
    } else {
        colors.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);

    // Scroll horizontally so the cursor stays inside the field
    let column = field.cursor_column() as u16;
    let scroll = column.saturating_sub(inner.width.saturating_sub(1));

    let paragraph = Paragraph::new(field.text())
        .style(Style::default().fg(colors.text))
        .scroll((0, scroll))
        .block(block);
    f.render_widget(paragraph, area);

    if focused && inner.width > 0 && inner.height > 0 {
        f.set_cursor_position((inner.x + column - scroll, inner.y));
    }
}
