use crate::cli::{actions::Action, commands, dispatch::handler, telemetry};
use anyhow::Result;

/// Start the CLI
/// # Errors
/// Returns an error if logging cannot be initialized or the arguments are unusable.
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let verbosity_level = telemetry::level(matches.get_one::<u8>("verbosity").map_or(0, |&v| v));

    let json = matches
        .get_one::<String>("format")
        .is_some_and(|format| format == "json");

    telemetry::init(verbosity_level, json)?;

    let action = handler(&matches)?;

    Ok(action)
}
