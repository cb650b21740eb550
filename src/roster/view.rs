//! Output surfaces for the page: a status line, a list of rows and a sort hint.

use crate::roster::{status::StatusMessage, user::SortKey};
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use tracing::warn;

/// One rendered line of the user list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Row {
    pub position: usize,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Where the page draws. Drawing never fails from the page's point of view.
pub trait Surface {
    fn set_status(&mut self, status: &StatusMessage);

    /// Replace every row currently shown.
    fn replace_rows(&mut self, rows: &[Row]);

    fn show_sort_control(&mut self, keys: &[SortKey]);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("invalid format '{other}', expected text or json")),
        }
    }
}

/// Writes the page to a terminal (or any writer) as colored text or JSON lines.
pub struct TerminalSurface<W: Write> {
    out: W,
    format: Format,
    color: bool,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, format: Format, color: bool) -> Self {
        Self { out, format, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            warn!("Error writing to output: {e}");
        }
    }

    fn write_json(&mut self, value: &serde_json::Value) {
        match serde_json::to_string(value) {
            Ok(line) => self.write(&line),
            Err(e) => warn!("Error encoding output: {e}"),
        }
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn set_status(&mut self, status: &StatusMessage) {
        match self.format {
            Format::Json => self.write_json(&json!({
                "status": {
                    "text": status.text,
                    "severity": status.severity,
                    "color": status.severity.color(),
                }
            })),
            Format::Text if self.color => {
                let style = status.severity.style();
                let line = format!("{}{}{}", style.render(), status.text, style.render_reset());
                self.write(&line);
            }
            Format::Text => {
                let line = format!("[{}] {}", status.severity.color(), status.text);
                self.write(&line);
            }
        }
    }

    fn replace_rows(&mut self, rows: &[Row]) {
        match self.format {
            Format::Json => self.write_json(&json!({ "rows": rows })),
            Format::Text => {
                if rows.is_empty() {
                    self.write("  (no users)");
                    return;
                }
                let width = rows.len().to_string().len();
                for row in rows {
                    let line = match &row.detail {
                        Some(detail) => format!(
                            "  {:>width$}. {} <{}>",
                            row.position, row.label, detail
                        ),
                        None => format!("  {:>width$}. {}", row.position, row.label),
                    };
                    self.write(&line);
                }
            }
        }
    }

    fn show_sort_control(&mut self, keys: &[SortKey]) {
        let keys: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
        match self.format {
            Format::Json => self.write_json(&json!({ "sort_keys": keys })),
            Format::Text => {
                let line = format!("Sort with :sort <{}>", keys.join("|"));
                self.write(&line);
            }
        }
    }
}

/// Keeps the last drawn state in memory. Used by headless callers and tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub status: Option<StatusMessage>,
    pub statuses: Vec<StatusMessage>,
    pub rows: Vec<Row>,
    pub renders: usize,
    pub sort_keys: Vec<SortKey>,
}

impl RecordingSurface {
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.label.as_str()).collect()
    }
}

impl Surface for RecordingSurface {
    fn set_status(&mut self, status: &StatusMessage) {
        self.status = Some(status.clone());
        self.statuses.push(status.clone());
    }

    fn replace_rows(&mut self, rows: &[Row]) {
        self.rows = rows.to_vec();
        self.renders += 1;
    }

    fn show_sort_control(&mut self, keys: &[SortKey]) {
        self.sort_keys = keys.to_vec();
    }
}
