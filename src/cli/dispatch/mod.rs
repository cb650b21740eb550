use crate::cli::actions::{submit::Args, Action};
use crate::roster::{Format, SortKey, DEFAULT_ENDPOINT};
use anyhow::{anyhow, Result};
use std::time::Duration;

/// # Errors
/// Returns an error if an argument holds a value the page cannot use.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let email = matches.get_one::<String>("email").cloned();

    let endpoint = matches
        .get_one::<String>("endpoint")
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let timeout = matches
        .get_one::<u64>("timeout")
        .copied()
        .map(Duration::from_secs);

    let sort = matches
        .get_one::<String>("sort")
        .map(|s| s.parse::<SortKey>())
        .transpose()
        .map_err(|e| anyhow!(e))?;

    let format = matches
        .get_one::<String>("format")
        .map(|s| s.parse::<Format>())
        .transpose()
        .map_err(|e| anyhow!(e))?
        .unwrap_or_default();

    Ok(Action::Submit(Args {
        email,
        endpoint,
        timeout,
        sort,
        format,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::commands;

    #[test]
    fn test_handler() {
        let matches = commands::new().get_matches_from(vec![
            "roster",
            "-e",
            "a@b.com",
            "--endpoint",
            "http://localhost:9000/users",
            "-t",
            "7",
            "-s",
            "id",
            "-f",
            "json",
        ]);

        let Action::Submit(args) = handler(&matches).unwrap();

        assert_eq!(args.email.as_deref(), Some("a@b.com"));
        assert_eq!(args.endpoint, "http://localhost:9000/users");
        assert_eq!(args.timeout, Some(Duration::from_secs(7)));
        assert_eq!(args.sort, Some(SortKey::Id));
        assert_eq!(args.format, Format::Json);
    }

    #[test]
    fn test_handler_defaults() {
        temp_env::with_vars(
            [
                ("ROSTER_EMAIL", None::<&str>),
                ("ROSTER_ENDPOINT", None),
                ("ROSTER_TIMEOUT", None),
                ("ROSTER_SORT", None),
                ("ROSTER_FORMAT", None),
            ],
            || {
                let matches = commands::new().get_matches_from(vec!["roster"]);

                let Action::Submit(args) = handler(&matches).unwrap();

                assert_eq!(args.email, None);
                assert_eq!(args.endpoint, DEFAULT_ENDPOINT);
                assert_eq!(args.timeout, None);
                assert_eq!(args.sort, None);
                assert_eq!(args.format, Format::Text);
            },
        );
    }
}
