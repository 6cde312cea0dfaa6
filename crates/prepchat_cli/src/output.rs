//! Terminal output helpers — styled text for humans, line-JSON for machines.
//!
//! Uses `console` for colors (respects NO_COLOR, auto-disables when piped),
//! `comfy-table` for the topics table, and `indicatif` for the in-flight
//! spinner.

use std::sync::atomic::{AtomicBool, Ordering};

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::cli::OutputFormat;

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
}

fn emit_json(level: &str, message: &str) {
    let msg = Msg { level, message };
    let json = serde_json::to_string(&msg)
        .unwrap_or_else(|_| format!("{{\"level\":\"{level}\"}}"));
    println!("{json}");
}

pub fn header(text: &str) {
    if is_json() {
        emit_json("info", text);
    } else {
        println!("{}", style(text).bold().cyan());
    }
}

pub fn error(text: &str) {
    if is_json() {
        emit_json("error", text);
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

pub fn warning(text: &str) {
    if is_json() {
        emit_json("warning", text);
    } else {
        println!("{} {}", style("!").yellow(), style(text).bright());
    }
}

pub fn success(text: &str) {
    if is_json() {
        emit_json("success", text);
    } else {
        println!("{} {}", style("✓").green(), style(text).bright());
    }
}

pub fn dim(text: &str) {
    if is_json() {
        emit_json("info", text);
    } else {
        println!("{}", style(text).dim());
    }
}

/// Render one assistant reply.
pub fn assistant(text: &str) {
    if is_json() {
        emit_json("assistant", text);
    } else {
        println!("{} {}", style("tutor ❯").magenta().bold(), text);
        println!();
    }
}

/// The prompt shown before reading a user line.
pub fn user_prompt() -> String {
    if is_json() {
        String::new()
    } else {
        format!("{} ", style("you ❯").green().bold())
    }
}

/// Styled table for the quick topics.
pub fn topics_table(rows: &[(usize, &str)]) {
    if is_json() {
        let items: Vec<_> = rows
            .iter()
            .map(|(i, title)| serde_json::json!({ "index": i, "title": title }))
            .collect();
        println!("{}", serde_json::json!({ "level": "list", "items": items }));
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").fg(Color::Cyan),
            Cell::new("Topic").fg(Color::Cyan),
        ]);
    for (i, title) in rows {
        table.add_row(vec![Cell::new(i).fg(Color::Green), Cell::new(title)]);
    }
    println!("{table}");
}

/// Spinner shown while a request is in flight.
pub fn spinner(message: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
