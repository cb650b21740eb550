use crate::{
    roster::{Format, HttpSource, Page, SortKey, Surface, TerminalSurface, UserSource},
    APP_USER_AGENT, GIT_COMMIT_HASH,
};
use anyhow::Result;
use std::{
    io::{self, IsTerminal, Write},
    time::Duration,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

const PROMPT: &str = "email> ";

const HELP: &str = "\
Type an email address and press enter to load the users.
  :sort [name|username|email|id]  re-sort the users on screen (default: name)
  :help                           show this help
  :quit                           exit";

#[derive(Debug)]
pub struct Args {
    pub email: Option<String>,
    pub endpoint: String,
    pub timeout: Option<Duration>,
    pub sort: Option<SortKey>,
    pub format: Format,
}

/// A line typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Submit(String),
    Sort(SortKey),
    Help,
    Quit,
    Invalid(String),
}

impl Input {
    /// A line is a command only when the word after `:` is a known command.
    /// Anything else, blank lines included, is an email submission passed
    /// through untouched.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let Some(command) = line.trim_start().strip_prefix(':') else {
            return Self::Submit(line.to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("q" | "quit" | "exit"), None) => Self::Quit,
            (Some("h" | "help"), None) => Self::Help,
            (Some("sort"), None) => Self::Sort(SortKey::default()),
            (Some("sort"), Some(key)) if parts.next().is_none() => match key.parse() {
                Ok(key) => Self::Sort(key),
                Err(e) => Self::Invalid(e),
            },
            (Some("sort"), Some(_)) => {
                Self::Invalid("usage: :sort [name|username|email|id]".to_string())
            }
            (Some("q" | "quit" | "exit" | "h" | "help"), Some(_)) => {
                Self::Invalid(format!("':{}' takes no arguments", command.trim()))
            }
            _ => Self::Submit(line.to_string()),
        }
    }
}

/// Execute the submit action.
/// # Errors
/// Returns an error if the endpoint is invalid, the HTTP client cannot be built,
/// or reading the prompt fails.
pub async fn execute(args: Args) -> Result<()> {
    log_startup_args(&args);

    let source = HttpSource::new(APP_USER_AGENT, &args.endpoint, args.timeout)?;
    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let surface = TerminalSurface::new(stdout, args.format, color);
    let mut page = Page::new(source, surface);

    match args.email {
        Some(email) => {
            page.submit(&email).await;

            if let Some(key) = args.sort {
                page.sort(key);
            }
        }
        None => {
            let stdin = BufReader::new(tokio::io::stdin());
            session(&mut page, stdin, &mut io::stderr()).await?;
        }
    }

    Ok(())
}

/// Read lines from `input` until EOF or `:quit`, feeding each one to the page.
/// The prompt, help and command errors go to `prompt`, the page draws on its own surface.
/// # Errors
/// Returns an error if reading `input` or writing `prompt` fails.
pub async fn session<S, V, R, W>(page: &mut Page<S, V>, input: R, prompt: &mut W) -> Result<()>
where
    S: UserSource,
    V: Surface,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(prompt, "{PROMPT}")?;
        prompt.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(prompt)?;
            break;
        };

        match Input::parse(&line) {
            Input::Submit(email) => {
                page.submit(&email).await;
            }
            Input::Sort(key) => {
                if !page.sort(key) {
                    writeln!(prompt, "Nothing to sort yet, submit an email first.")?;
                }
            }
            Input::Help => writeln!(prompt, "{HELP}")?,
            Input::Invalid(message) => writeln!(prompt, "{message}")?,
            Input::Quit => break,
        }
    }

    debug!("prompt session closed");

    Ok(())
}

fn log_startup_args(args: &Args) {
    let entries = [
        (
            "mode",
            if args.email.is_some() {
                "one-shot".to_string()
            } else {
                "interactive".to_string()
            },
        ),
        ("endpoint", args.endpoint.clone()),
        (
            "timeout",
            args.timeout
                .map_or_else(|| "none".to_string(), |t| format!("{}s", t.as_secs())),
        ),
        (
            "sort",
            args.sort
                .map_or_else(|| "none".to_string(), |k| k.to_string()),
        ),
        ("format", format!("{:?}", args.format).to_lowercase()),
    ];

    let max_key_len = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut message = format!(
        "{} {} ({})\n\nStartup configuration:",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        short_commit(GIT_COMMIT_HASH)
    );
    for (key, value) in &entries {
        let padding = " ".repeat(max_key_len.saturating_sub(key.len()));
        let _ =
            std::fmt::Write::write_fmt(&mut message, format_args!("\n  {key}:{padding} {value}"));
    }
    debug!("{message}");
}

fn short_commit(hash: &str) -> String {
    let trimmed = hash.trim();
    if trimmed.len() > 7 {
        trimmed[..7].to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_parse_submit_keeps_raw_text() {
        assert_eq!(
            Input::parse("a@b.com"),
            Input::Submit("a@b.com".to_string())
        );
        assert_eq!(
            Input::parse(" a@b.com "),
            Input::Submit(" a@b.com ".to_string())
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse(":quit"), Input::Quit);
        assert_eq!(Input::parse(":q"), Input::Quit);
        assert_eq!(Input::parse(":help"), Input::Help);
        assert_eq!(Input::parse(":sort"), Input::Sort(SortKey::Name));
        assert_eq!(Input::parse(":sort email"), Input::Sort(SortKey::Email));
        assert_eq!(Input::parse("  :sort  ID "), Input::Sort(SortKey::Id));
    }

    #[test]
    fn test_parse_blank_lines_are_submitted() {
        assert_eq!(Input::parse(""), Input::Submit(String::new()));
        assert_eq!(Input::parse("   "), Input::Submit("   ".to_string()));
    }

    #[test]
    fn test_parse_unknown_colon_words_are_submitted() {
        assert_eq!(
            Input::parse(":a@b.com"),
            Input::Submit(":a@b.com".to_string())
        );
        assert_eq!(Input::parse(":reload"), Input::Submit(":reload".to_string()));
        assert_eq!(Input::parse(":"), Input::Submit(":".to_string()));
    }

    #[test]
    fn test_parse_invalid_command_arguments() {
        assert!(matches!(Input::parse(":sort age"), Input::Invalid(_)));
        assert!(matches!(Input::parse(":sort name id"), Input::Invalid(_)));
        assert!(matches!(Input::parse(":quit now"), Input::Invalid(_)));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn startup_log(level: tracing::Level) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(move || writer.clone())
            .finish();

        let args = Args {
            email: None,
            endpoint: "http://localhost:8080/users".to_string(),
            timeout: None,
            sort: Some(SortKey::Email),
            format: Format::Text,
        };
        tracing::subscriber::with_default(subscriber, || log_startup_args(&args));

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_startup_args_logged_at_debug() {
        let debug = startup_log(tracing::Level::DEBUG);
        assert!(debug.contains("Startup configuration:"));
        assert!(debug.contains("http://localhost:8080/users"));
        assert!(debug.contains("interactive"));

        assert!(startup_log(tracing::Level::INFO).is_empty());
    }

    #[test]
    fn test_short_commit() {
        assert_eq!(short_commit("0123456789abcdef"), "0123456");
        assert_eq!(short_commit("unknown"), "unknown");
    }
}
