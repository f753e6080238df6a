use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::spinner::SpinDirection;
use crate::ui::app::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // quit always works, even for a disabled form
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return;
    }

    if app.picker().is_disabled() {
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Right => app.focus_next(),
        KeyCode::BackTab | KeyCode::Left => app.focus_prev(),
        KeyCode::Up => app.spin_focused(SpinDirection::Up),
        KeyCode::Down => app.spin_focused(SpinDirection::Down),
        KeyCode::Enter => app.commit_focused(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char('t') => app.jump_to_today(),
        KeyCode::Char(ch) if ch.is_ascii_digit() => app.type_digit(ch),
        _ => {}
    }
}
