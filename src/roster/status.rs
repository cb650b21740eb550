use clap::builder::styling::{AnsiColor, Effects, Style};
use serde::Serialize;
use std::fmt;

pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const LOADING: &str = "Loading users...";
pub const LOAD_ERROR: &str = "Error loading data.";

/// Severity of the status line, each one maps to a single color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Info => "blue",
            Self::Success => "green",
            Self::Error => "red",
        }
    }

    #[must_use]
    pub fn style(self) -> Style {
        match self {
            Self::Info => AnsiColor::Blue.on_default(),
            Self::Success => AnsiColor::Green.on_default() | Effects::BOLD,
            Self::Error => AnsiColor::Red.on_default() | Effects::BOLD,
        }
    }
}

/// The single user-visible feedback value. Every update replaces the previous one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    #[must_use]
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    #[must_use]
    pub fn invalid_email() -> Self {
        Self::new(INVALID_EMAIL, Severity::Error)
    }

    #[must_use]
    pub fn loading() -> Self {
        Self::new(LOADING, Severity::Info)
    }

    #[must_use]
    pub fn load_error() -> Self {
        Self::new(LOAD_ERROR, Severity::Error)
    }

    #[must_use]
    pub fn loaded(count: usize) -> Self {
        let noun = if count == 1 { "user" } else { "users" };
        Self::new(format!("Loaded {count} {noun}."), Severity::Success)
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
