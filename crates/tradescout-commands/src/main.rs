//! # tradescout
//!
//! Runs one TradeScout command against a JSON world snapshot.
//!
//! ## Usage
//! ```bash
//! tradescout --world world.json --user <uuid> wts Wheat
//! tradescout --world world.json --user <uuid> copystore 0,1
//! tradescout --world world.json --user <uuid> --yes copyexchange 1 0
//! ```
//!
//! Copies ask for confirmation on stdin unless `--yes` is given; a
//! successful copy writes the world back to the same file.
//!
//! ## Log Levels
//! - `RUST_LOG=debug` shows why each store was skipped
//! - Default: INFO, written to stderr (`--log-json` for JSON lines)

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use tradescout_commands::CommandHandler;
use tradescout_copy::{Confirmer, FixedAnswer};
use tradescout_types::{CommandConfig, Result, TradescoutError, UserId, World, constants};

struct Options {
    world: PathBuf,
    user: UserId,
    config: Option<PathBuf>,
    assume_yes: bool,
    json: bool,
    log_json: bool,
    command: String,
}

fn print_usage() {
    println!("{} {}", constants::TOOL_NAME, constants::VERSION);
    println!();
    println!("Usage: tradescout [OPTIONS] <COMMAND>...");
    println!();
    println!("Options:");
    println!("  -w, --world <PATH>    World snapshot (JSON), required");
    println!("  -u, --user <UUID>     Requesting player, required");
    println!("  -c, --config <PATH>   TOML config file (default: tradescout.toml if present)");
    println!("  -y, --yes             Confirm destructive commands without asking");
    println!("      --json            Print the response as JSON");
    println!("      --log-json        Emit logs as JSON lines on stderr");
    println!("  -h, --help            Show this help message");
    println!();
    println!("Commands: help, version, wts <item>, copystore [src dst], copyexchange [src dst]");
}

fn invalid(reason: impl Into<String>) -> TradescoutError {
    TradescoutError::InvalidArgument {
        reason: reason.into(),
    }
}

fn flag_value(args: &[String], i: usize) -> Result<&String> {
    args.get(i + 1)
        .ok_or_else(|| invalid(format!("{} needs a value", args[i])))
}

/// `Ok(None)` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut world = None;
    let mut user = None;
    let mut config = None;
    let mut assume_yes = false;
    let mut json = false;
    let mut log_json = false;
    let mut command = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--world" | "-w" => {
                world = Some(PathBuf::from(flag_value(args, i)?));
                i += 1;
            }
            "--user" | "-u" => {
                let raw = flag_value(args, i)?;
                user = Some(
                    raw.parse::<UserId>()
                        .map_err(|e| invalid(format!("--user {raw:?}: {e}")))?,
                );
                i += 1;
            }
            "--config" | "-c" => {
                config = Some(PathBuf::from(flag_value(args, i)?));
                i += 1;
            }
            "--yes" | "-y" => assume_yes = true,
            "--json" => json = true,
            "--log-json" => log_json = true,
            "--help" | "-h" => return Ok(None),
            _ => {
                command.extend(args[i..].iter().cloned());
                break;
            }
        }
        i += 1;
    }

    Ok(Some(Options {
        world: world.ok_or_else(|| invalid("--world is required"))?,
        user: user.ok_or_else(|| invalid("--user is required"))?,
        config,
        assume_yes,
        json,
        log_json,
        command: command.join(" "),
    }))
}

/// Asks on stderr, reads `y`/`yes` from stdin. Anything else declines.
struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&mut self, prompt: &str) -> bool {
        eprint!("{prompt} [y/N] ");
        if io::stderr().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(options: Options) -> Result<()> {
    let config_path = options
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("tradescout.toml"));
    let config = CommandConfig::load(Some(&config_path))?;
    let mut world = World::load(&options.world)?;
    let handler = CommandHandler::new(config);

    let reply = if options.assume_yes {
        handler.handle_line(&mut world, options.user, &options.command, &mut FixedAnswer(true))
    } else {
        handler.handle_line(&mut world, options.user, &options.command, &mut StdinConfirmer)
    };

    if reply.world_changed {
        world.save(&options.world)?;
        tracing::info!(path = ?options.world, "World snapshot written");
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&reply.response)?);
    } else {
        println!("{}", reply.response);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}");
            eprintln!("Run with --help for usage.");
            return ExitCode::from(2);
        }
    };

    init_tracing(options.log_json);
    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "tradescout failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
