//! Command parsing.
//!
//! ```text
//! [/][dt] help | version
//! [/][dt] wts <item name...>
//! [/][dt] copystore [source][,| ][target]
//! [/][dt] copyexchange [source][,| ][target]
//! ```
//!
//! Sub-command names are case-insensitive. Missing indices mean "show the
//! listing".

use serde::{Deserialize, Serialize};
use tradescout_types::{Result, TradescoutError, constants};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Help,
    Version,
    WantToSell { item: String },
    CopyStore { source: Option<i64>, target: Option<i64> },
    CopyExchange { source: Option<i64>, target: Option<i64> },
}

impl Command {
    /// Whether running this command may change the world.
    #[must_use]
    pub fn mutates(&self) -> bool {
        matches!(self, Self::CopyStore { .. } | Self::CopyExchange { .. })
    }
}

/// Parse with the default `dt` prefix.
///
/// # Errors
/// See [`parse_command_with_prefix`].
pub fn parse_command(input: &str) -> Result<Command> {
    parse_command_with_prefix(input, constants::DEFAULT_COMMAND_PREFIX)
}

/// Parse one command line. A leading `/` and a leading `prefix` word are
/// optional; a line with only the prefix means help.
///
/// # Errors
/// - [`TradescoutError::UnknownCommand`] for an unrecognised sub-command.
/// - [`TradescoutError::InvalidArgument`] for a missing item name or
///   malformed indices.
pub fn parse_command_with_prefix(input: &str, prefix: &str) -> Result<Command> {
    let line = input.trim();
    let line = line.strip_prefix('/').unwrap_or(line).trim_start();

    let (mut name, mut rest) = split_word(line);
    if !prefix.is_empty() && name.eq_ignore_ascii_case(prefix) {
        (name, rest) = split_word(rest);
    }

    match name.to_ascii_lowercase().as_str() {
        "" | "help" | "readme" => Ok(Command::Help),
        "version" => Ok(Command::Version),
        "wts" | "want-to-sell" | "wanttosell" => {
            if rest.is_empty() {
                return Err(TradescoutError::InvalidArgument {
                    reason: "want-to-sell needs an item name".into(),
                });
            }
            Ok(Command::WantToSell {
                item: rest.to_string(),
            })
        }
        "copystore" | "copy-store" => {
            let (source, target) = parse_indices(rest)?;
            Ok(Command::CopyStore { source, target })
        }
        "copyexchange" | "copy-exchange" => {
            let (source, target) = parse_indices(rest)?;
            Ok(Command::CopyExchange { source, target })
        }
        _ => Err(TradescoutError::UnknownCommand(name.to_string())),
    }
}

/// First whitespace-delimited word and the trimmed remainder.
fn split_word(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    }
}

/// Up to two integers separated by commas and/or whitespace.
fn parse_indices(args: &str) -> Result<(Option<i64>, Option<i64>)> {
    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() > 2 {
        return Err(TradescoutError::InvalidArgument {
            reason: format!("expected at most two indices, got {}", parts.len()),
        });
    }

    let parse = |raw: &str| {
        raw.parse::<i64>().map_err(|_| TradescoutError::InvalidArgument {
            reason: format!("index must be an integer, got {raw:?}"),
        })
    };
    let source = parts.first().map(|p| parse(p)).transpose()?;
    let target = parts.get(1).map(|p| parse(p)).transpose()?;
    Ok((source, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_and_slash_are_optional() {
        for input in ["/dt wts Wheat", "dt wts Wheat", "wts Wheat", "  /DT   WTS   Wheat  "] {
            assert_eq!(
                parse_command(input).unwrap(),
                Command::WantToSell {
                    item: "Wheat".into()
                },
                "{input}"
            );
        }
    }

    #[test]
    fn item_names_keep_inner_spaces() {
        assert_eq!(
            parse_command("dt want-to-sell Iron  Bar").unwrap(),
            Command::WantToSell {
                item: "Iron  Bar".into()
            }
        );
    }

    #[test]
    fn bare_prefix_is_help() {
        assert_eq!(parse_command("/dt").unwrap(), Command::Help);
        assert_eq!(parse_command("").unwrap(), Command::Help);
        assert_eq!(parse_command("dt readme").unwrap(), Command::Help);
        assert_eq!(parse_command("dt Version").unwrap(), Command::Version);
    }

    #[test]
    fn index_forms() {
        let expected = Command::CopyStore {
            source: Some(0),
            target: Some(1),
        };
        assert_eq!(parse_command("dt copystore 0,1").unwrap(), expected);
        assert_eq!(parse_command("dt copystore 0 1").unwrap(), expected);
        assert_eq!(parse_command("dt copy-store 0, 1").unwrap(), expected);
        assert_eq!(
            parse_command("dt copyexchange").unwrap(),
            Command::CopyExchange {
                source: None,
                target: None
            }
        );
        assert_eq!(
            parse_command("dt copyexchange -1 2").unwrap(),
            Command::CopyExchange {
                source: Some(-1),
                target: Some(2)
            }
        );
    }

    #[test]
    fn bad_input() {
        assert!(matches!(
            parse_command("dt wts"),
            Err(TradescoutError::InvalidArgument { .. })
        ));
        assert!(matches!(
            parse_command("dt copystore a,b"),
            Err(TradescoutError::InvalidArgument { .. })
        ));
        assert!(matches!(
            parse_command("dt copystore 1 2 3"),
            Err(TradescoutError::InvalidArgument { .. })
        ));
        assert!(matches!(
            parse_command("dt sellall"),
            Err(TradescoutError::UnknownCommand(ref name)) if name == "sellall"
        ));
    }

    #[test]
    fn custom_prefix() {
        assert_eq!(
            parse_command_with_prefix("!ts version", "!ts").unwrap(),
            Command::Version
        );
        assert!(parse_command_with_prefix("dt version", "!ts").is_err());
    }

    #[test]
    fn only_copies_mutate() {
        assert!(!Command::Help.mutates());
        assert!(
            Command::CopyStore {
                source: None,
                target: None
            }
            .mutates()
        );
    }
}
