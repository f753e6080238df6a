use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver};

use jiff::civil::Date;

use crate::picker::{DatePart, DatePicker, PartChanged};
use crate::spinner::SpinDirection;

/// How many part changes the status area keeps visible.
const CHANGE_LOG_LEN: usize = 6;

/// UI-side state: the picker, which of its fields has focus, and a short
/// log of the change notifications it emitted.
pub struct App {
    picker: DatePicker,
    focus: DatePart,
    today: Date,
    changes: Receiver<PartChanged>,
    recent: VecDeque<PartChanged>,
    should_quit: bool,
}

impl App {
    /// Wires the picker's change listener to an internal channel; the UI
    /// drains it once per frame.
    pub fn new(mut picker: DatePicker, today: Date) -> Self {
        let (tx, rx) = mpsc::channel();
        picker.on_change(move |change| {
            let _ = tx.send(change);
        });
        Self {
            picker,
            focus: DatePart::Day,
            today,
            changes: rx,
            recent: VecDeque::new(),
            should_quit: false,
        }
    }

    pub fn picker(&self) -> &DatePicker {
        &self.picker
    }

    pub fn focus(&self) -> DatePart {
        self.focus
    }

    pub fn recent_changes(&self) -> impl Iterator<Item = &PartChanged> + '_ {
        self.recent.iter()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Move focus forward, committing the field being left.
    pub fn focus_next(&mut self) {
        self.picker.blur(self.focus);
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.picker.blur(self.focus);
        self.focus = self.focus.prev();
    }

    pub fn spin_focused(&mut self, direction: SpinDirection) {
        self.picker.spin(self.focus, direction);
    }

    /// Append a typed digit to the focused field's buffer. Non-digits are
    /// filtered here; the picker core never sees them.
    pub fn type_digit(&mut self, ch: char) {
        if !ch.is_ascii_digit() {
            return;
        }
        let mut text = self.picker.spinner(self.focus).text().to_string();
        text.push(ch);
        self.picker.input(self.focus, &text);
    }

    pub fn backspace(&mut self) {
        let text = self.picker.spinner(self.focus).text();
        if text.is_empty() {
            return;
        }
        let truncated = text[..text.len() - 1].to_string();
        self.picker.input(self.focus, &truncated);
    }

    /// Commit the focused field in place (Enter).
    pub fn commit_focused(&mut self) {
        self.picker.blur(self.focus);
    }

    pub fn jump_to_today(&mut self) {
        self.picker.set_date(self.today);
    }

    /// Pull queued part-change notifications into the visible log.
    pub fn drain_changes(&mut self) {
        while let Ok(change) = self.changes.try_recv() {
            if self.recent.len() == CHANGE_LOG_LEN {
                self.recent.pop_front();
            }
            self.recent.push_back(change);
        }
    }

    pub fn on_tick(&mut self) {
        self.drain_changes();
    }
}
