//! Terminal output for the `bitredict` command line.
//!
//! Every handler prints through this module so the three modes stay
//! consistent:
//!
//! - text: colored, aligned lines for a person at a terminal
//! - quiet: only warnings, errors and failed status events
//! - JSON: one `{"type": ..., "payload": ...}` object per line on stdout,
//!   errors on stderr
//!
//! The creation outcome itself is printed with [`json_output`] so scripts
//! can pick out the line carrying `success`.

use std::fmt::Display;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use parking_lot::RwLock;
use serde_json::{json, Value};

use crate::domain::status::{StatusEvent, StatusKind};

/// Output settings taken from the global CLI flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
    /// Verbosity level; only logging reacts to it.
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

static MODE: RwLock<OutputConfig> = parking_lot::const_rwlock(OutputConfig::new(false, false, 0));

/// Apply output settings for the rest of the process.
pub fn configure(config: OutputConfig) {
    *MODE.write() = config;
}

fn mode() -> OutputConfig {
    *MODE.read()
}

#[must_use]
pub fn is_json() -> bool {
    mode().json
}

/// One printable line.
enum Line<'a> {
    Section(&'a str),
    Field(&'a str, String),
    Success(&'a str),
    Warning(&'a str),
    Hint(&'a str),
    Error(&'a str),
}

impl Line<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Self::Section(_) => "section",
            Self::Field(..) => "field",
            Self::Success(_) => "success",
            Self::Warning(_) => "warning",
            Self::Hint(_) => "hint",
            Self::Error(_) => "error",
        }
    }

    fn payload(&self) -> Value {
        match self {
            Self::Section(title) => json!({ "title": title }),
            Self::Field(label, value) => json!({ "label": label, "value": value }),
            Self::Success(message)
            | Self::Warning(message)
            | Self::Hint(message)
            | Self::Error(message) => json!({ "message": message }),
        }
    }

    /// Shown even when `--quiet` is set.
    const fn survives_quiet(&self) -> bool {
        matches!(self, Self::Warning(_) | Self::Error(_))
    }

    fn print_text(&self) {
        match self {
            Self::Section(title) => println!("\n{}", title.bold()),
            Self::Field(label, value) => println!("  {:<12} {value}", label.dimmed()),
            Self::Success(message) => println!("  {} {message}", "✓".green()),
            Self::Warning(message) => println!("  {} {message}", "⚠".yellow()),
            Self::Hint(message) => println!("  {}: {}", "hint".cyan().dimmed(), message.dimmed()),
            Self::Error(message) => eprintln!("  {} {message}", "×".red()),
        }
    }
}

fn print_json(kind: &str, payload: Value, to_stderr: bool) {
    let line = json!({ "type": kind, "payload": payload });
    if to_stderr {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

fn emit(line: &Line<'_>) {
    let mode = mode();
    if mode.json {
        print_json(line.kind(), line.payload(), matches!(line, Line::Error(_)));
    } else if !mode.quiet || line.survives_quiet() {
        line.print_text();
    }
}

pub fn section(title: &str) {
    emit(&Line::Section(title));
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    emit(&Line::Field(label, value.to_string()));
}

pub fn success(message: &str) {
    emit(&Line::Success(message));
}

pub fn warning(message: &str) {
    emit(&Line::Warning(message));
}

pub fn hint(message: &str) {
    emit(&Line::Hint(message));
}

/// Print an error to stderr.
pub fn error(message: &str) {
    emit(&Line::Error(message));
}

fn status_marker(kind: StatusKind) -> String {
    match kind {
        StatusKind::Info => "•".cyan().to_string(),
        StatusKind::Pending => "…".yellow().to_string(),
        StatusKind::Confirming => "⧗".cyan().to_string(),
        StatusKind::Success => "✓".green().to_string(),
        StatusKind::Error => "×".red().to_string(),
    }
}

/// Print one creation progress event.
///
/// Error events go to stderr and are shown in quiet mode.
pub fn status(event: &StatusEvent) {
    let mode = mode();
    if mode.json {
        print_json("status", json!(event), false);
        return;
    }
    let failed = event.kind == StatusKind::Error;
    if mode.quiet && !failed {
        return;
    }

    let marker = status_marker(event.kind);
    match event.kind {
        StatusKind::Error => {
            eprintln!("  {marker} {} {}", event.title.bold().red(), event.message);
        }
        StatusKind::Success => {
            println!("  {marker} {} {}", event.title.bold().green(), event.message);
        }
        StatusKind::Info | StatusKind::Pending | StatusKind::Confirming => {
            println!("  {marker} {} {}", event.title.bold(), event.message.dimmed());
        }
    }
    if let Some(hash) = &event.hash {
        println!("    {:<10} {hash}", "tx".dimmed());
    }
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Start a spinner, hidden in JSON and quiet modes.
pub fn spinner(message: &str) -> ProgressBar {
    let mode = mode();
    let bar = if mode.json || mode.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_strings(SPINNER_FRAMES)
            .template("  {spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.enable_steady_tick(Duration::from_millis(80));
        bar
    };
    bar.set_message(message.to_string());
    bar
}

/// Hidden bars keep the final message without drawing it.
fn finish_spinner(bar: &ProgressBar, marker: String, message: &str) {
    bar.finish_with_message(format!("{marker} {message}"));
}

pub fn spinner_success(bar: &ProgressBar, message: &str) {
    finish_spinner(bar, "✓".green().to_string(), message);
}

pub fn spinner_fail(bar: &ProgressBar, message: &str) {
    finish_spinner(bar, "×".red().to_string(), message);
}

/// Cyan in text mode, plain in JSON mode.
pub fn highlight(value: impl Display) -> String {
    if is_json() {
        value.to_string()
    } else {
        value.cyan().to_string()
    }
}

/// Dimmed in text mode, plain in JSON mode.
pub fn muted(value: impl Display) -> String {
    if is_json() {
        value.to_string()
    } else {
        value.dimmed().to_string()
    }
}

/// Print a raw JSON value as a single line.
pub fn json_output(value: &Value) {
    println!("{value}");
}
