//! File-backed configuration for the demo form.
//!
//! A small TOML file selects the field label, the year floor, the initial
//! date, and whether the control starts disabled. Command-line flags
//! override individual values; see the binary's `--help`.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::Config;
