use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::picker::DatePart;
use crate::ui::app::App;
use crate::ui::theme::{
    DATE_INVALID, DATE_OK, FIELD_BORDER, FIELD_BORDER_FOCUS, FIELD_TEXT, FORM_LABEL, HINT_TEXT,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // top spacer
            Constraint::Length(3), // form row
            Constraint::Length(1), // date status
            Constraint::Min(0),    // change log
            Constraint::Length(1), // footer
        ])
        .split(area);

    draw_form(frame, app, rows[1]);
    draw_status(frame, app, rows[2]);
    draw_changes(frame, app, rows[3]);
    draw_footer(frame, rows[4]);
}

fn draw_form(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let label = app.picker().label();
    let label_width = label.chars().count() as u16 + 2;
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(label_width),
            Constraint::Length(6),  // day
            Constraint::Length(7),  // month
            Constraint::Length(8),  // year
            Constraint::Min(0),
        ])
        .split(area);

    let mut label_style = Style::default().fg(FORM_LABEL);
    if app.picker().is_disabled() {
        label_style = label_style.add_modifier(Modifier::DIM);
    }
    frame.render_widget(
        Paragraph::new(format!("{label} "))
            .style(label_style)
            .alignment(Alignment::Right),
        middle_line(cells[0]),
    );

    let fields = [
        (DatePart::Day, cells[1]),
        (DatePart::Month, cells[2]),
        (DatePart::Year, cells[3]),
    ];
    for (part, cell) in fields {
        draw_field(frame, app, part, cell);
    }
}

fn draw_field(frame: &mut Frame<'_>, app: &App, part: DatePart, area: Rect) {
    let focused = app.focus() == part && !app.picker().is_disabled();
    let border = if focused { FIELD_BORDER_FOCUS } else { FIELD_BORDER };

    let mut text_style = Style::default().fg(FIELD_TEXT);
    if app.picker().is_disabled() {
        text_style = text_style.add_modifier(Modifier::DIM);
    }

    frame.render_widget(
        Paragraph::new(app.picker().spinner(part).text().to_string())
            .style(text_style)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .title(part.name()),
            ),
        area,
    );
}

fn draw_status(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let value = match app.picker().date() {
        Some(date) => Span::styled(date.to_string(), Style::default().fg(DATE_OK)),
        None => Span::styled("no valid date", Style::default().fg(DATE_INVALID)),
    };
    let line = Line::from(vec![
        Span::styled("  date: ", Style::default().fg(HINT_TEXT)),
        value,
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_changes(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .recent_changes()
        .map(|change| {
            Line::from(Span::styled(
                format!("  {} = {}", change.part.name(), change.value),
                Style::default().fg(HINT_TEXT),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect) {
    let hints = " ↑/↓: spin │ Tab: next field │ Enter: commit │ t: today │ q: quit";
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(HINT_TEXT).add_modifier(Modifier::DIM)),
        area,
    );
}

/// One-line slice through the vertical middle of a bordered-row cell.
fn middle_line(area: Rect) -> Rect {
    let y = if area.height >= 3 { area.y + 1 } else { area.y };
    Rect {
        x: area.x,
        y,
        width: area.width,
        height: area.height.min(1),
    }
}
