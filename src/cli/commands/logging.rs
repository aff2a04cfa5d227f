use clap::{builder::ValueParser, Arg, ArgAction, Command};

pub const ARG_VERBOSITY: &str = "verbosity";

/// Level names indexed by verbosity. Index 0 (`error`) is also what telemetry
/// falls back to when no `-v` is given, so it never widens the filter.
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Accepts `ATLAS_LOG_LEVEL` as a level name (any case) or its index in
/// [`LEVELS`].
#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(|level: &str| -> Result<u8, String> {
        let level = level.trim().to_lowercase();
        let index = match level.parse::<usize>() {
            Ok(index) => Some(index).filter(|index| *index < LEVELS.len()),
            Err(_) => LEVELS.iter().position(|name| *name == level),
        };

        index
            .and_then(|index| u8::try_from(index).ok())
            .ok_or_else(|| format!("invalid log level, expected one of: {}", LEVELS.join(", ")))
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
            .env("ATLAS_LOG_LEVEL")
            .global(true)
            .action(ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(level: &str) -> Result<u8, clap::Error> {
        temp_env::with_var("ATLAS_LOG_LEVEL", Some(level), || {
            with_args(Command::new("atlas"))
                .try_get_matches_from(vec!["atlas"])
                .map(|matches| matches.get_one::<u8>(ARG_VERBOSITY).copied().unwrap_or(0))
        })
    }

    #[test]
    fn names_and_indexes_agree() {
        for (index, name) in LEVELS.iter().enumerate() {
            let expected = u8::try_from(index).unwrap();
            assert_eq!(parse(name).unwrap(), expected);
            assert_eq!(parse(&name.to_uppercase()).unwrap(), expected);
            assert_eq!(parse(&index.to_string()).unwrap(), expected);
        }
    }

    #[test]
    fn out_of_range_levels_are_rejected() {
        assert!(parse("5").is_err());
        assert!(parse("verbose").is_err());
    }
}
