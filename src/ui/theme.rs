use ratatui::style::Color;

pub const FORM_LABEL: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const FIELD_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const FIELD_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FIELD_BORDER_FOCUS: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const DATE_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const DATE_INVALID: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const HINT_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
