use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use datespin::clock::{Clock, SystemClock};
use datespin::config::Config;
use datespin::picker::{DatePicker, DatePickerOptions};
use datespin::ui;
use datespin::ui::app::App;

#[derive(Debug, Parser)]
#[command(name = "datespin", about = "Three-field calendar date spinner form")]
struct Cli {
    /// Path to a TOML config file (defaults to the user config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Label shown next to the date field.
    #[arg(long)]
    label: Option<String>,

    /// Lowest selectable year.
    #[arg(long)]
    min_year: Option<i32>,

    /// Initial date as YYYY-MM-DD; defaults to today.
    #[arg(long)]
    date: Option<String>,

    /// Start with editing disabled.
    #[arg(long)]
    disabled: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    if let Some(label) = cli.label {
        config.label = label;
    }
    if let Some(min_year) = cli.min_year {
        config.min_year = min_year;
    }
    if let Some(date) = cli.date {
        config.initial = Some(date);
    }
    if cli.disabled {
        config.disabled = true;
    }

    let clock = SystemClock;
    let today = clock.today();
    config
        .validate(i32::from(today.year()) + 1)
        .context("invalid configuration")?;
    let initial = config.initial_date().context("invalid configuration")?;

    let options = DatePickerOptions {
        label: config.label,
        min_year: config.min_year,
        initial,
        disabled: config.disabled,
    };
    let picker = DatePicker::new(options, &clock);

    ui::run(App::new(picker, today)).context("terminal UI failed")?;
    Ok(())
}

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default so it cannot corrupt the TUI. Set the
/// `DATESPIN_LOG` env var to a file path to enable it; `RUST_LOG` filters
/// apply (default `debug`; the interesting output is rollover decisions).
fn init_tracing() {
    let Ok(log_path) = std::env::var("DATESPIN_LOG") else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("warning: failed to create log file: {log_path}");
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
