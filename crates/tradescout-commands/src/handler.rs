//! Command dispatch: runs a parsed [`Command`] against the world and turns
//! the outcome, success or error, into exactly one [`Response`].

use tradescout_copy::{Confirmer, CopyOutcome, ListingEntry, copy_exchange, copy_store};
use tradescout_query::{SellQuery, SellReport};
use tradescout_types::{
    AccessListAuthorizer, Authorizer, CommandConfig, CopyKind, CopyReceipt, MarketRegistry,
    UserId, constants,
};

use crate::command::{Command, parse_command_with_prefix};
use crate::response::{Reply, Response, error_message};

/// Executes commands for one configuration and authorizer.
#[derive(Debug, Clone)]
pub struct CommandHandler<A = AccessListAuthorizer> {
    config: CommandConfig,
    query: SellQuery,
    authorizer: A,
}

impl CommandHandler {
    /// Handler backed by each entity's own access list.
    #[must_use]
    pub fn new(config: CommandConfig) -> Self {
        Self::with_authorizer(config, AccessListAuthorizer)
    }
}

impl<A: Authorizer> CommandHandler<A> {
    #[must_use]
    pub fn with_authorizer(config: CommandConfig, authorizer: A) -> Self {
        Self {
            query: SellQuery::new(config.query.clone()),
            config,
            authorizer,
        }
    }

    #[must_use]
    pub fn config(&self) -> &CommandConfig {
        &self.config
    }

    /// Parse `line` with the configured prefix and run it.
    pub fn handle_line<R, C>(
        &self,
        world: &mut R,
        requester: UserId,
        line: &str,
        confirmer: &mut C,
    ) -> Reply
    where
        R: MarketRegistry,
        C: Confirmer + ?Sized,
    {
        match parse_command_with_prefix(line, &self.config.command_prefix) {
            Ok(command) => self.handle(world, requester, &command, confirmer),
            Err(err) => {
                tracing::debug!(line, error = %err, "Rejected command line");
                Reply::unchanged(Response::Message(error_message(&err)))
            }
        }
    }

    /// Run one command. Errors never escape: each becomes a single message.
    pub fn handle<R, C>(
        &self,
        world: &mut R,
        requester: UserId,
        command: &Command,
        confirmer: &mut C,
    ) -> Reply
    where
        R: MarketRegistry,
        C: Confirmer + ?Sized,
    {
        tracing::debug!(?command, mutates = command.mutates(), "Handling command");
        let copy = match command {
            Command::Help => return Reply::unchanged(Response::Message(help_text(&self.config))),
            Command::Version => {
                return Reply::unchanged(Response::message(constants::VERSION));
            }
            Command::WantToSell { item } => {
                let response =
                    match self.query.run(&*world, &self.authorizer, requester, item) {
                        Ok(report) => self.panel(&report),
                        Err(err) => Response::Message(error_message(&err)),
                    };
                return Reply::unchanged(response);
            }
            Command::CopyStore { source, target } => copy_store(
                world,
                &self.authorizer,
                requester,
                *source,
                *target,
                confirmer,
            )
            .map(|outcome| (CopyKind::Store, outcome)),
            Command::CopyExchange { source, target } => copy_exchange(
                world,
                &self.authorizer,
                requester,
                *source,
                *target,
                confirmer,
            )
            .map(|outcome| (CopyKind::Exchange, outcome)),
        };

        match copy {
            Ok((kind, outcome)) => {
                let world_changed = outcome.is_copied();
                let text = match outcome {
                    CopyOutcome::Listing(entries) => {
                        listing_text(&self.config.command_prefix, kind, &entries)
                    }
                    CopyOutcome::Copied(receipt) => copied_text(&receipt),
                };
                Reply {
                    response: Response::Message(text),
                    world_changed,
                }
            }
            Err(err) => Reply::unchanged(Response::Message(error_message(&err))),
        }
    }

    fn panel(&self, report: &SellReport) -> Response {
        Response::Panel {
            title: report.title().to_string(),
            category: self.config.panel_category.clone(),
            body: report.render_text(),
        }
    }
}

fn help_text(config: &CommandConfig) -> String {
    let p = &config.command_prefix;
    format!(
        "Welcome to {tool}!\n\
         This tool provides some commands that make life and trading easier.\n\
         \n\
         /{p} help                  Show this message\n\
         /{p} version               Show the version\n\
         /{p} wts <item>            Where can I sell an item, how many and for how much\n\
         /{p} copystore <src>,<dst> Copy all trade offers from one owned store to another\n\
         /{p} copyexchange <src>,<dst> Copy exchange rates and holdings between exchanges\n\
         \n\
         Run copystore or copyexchange without indices to list your stores or exchanges.",
        tool = constants::TOOL_NAME,
    )
}

fn listing_text(prefix: &str, kind: CopyKind, entries: &[ListingEntry]) -> String {
    let (command, heading) = match kind {
        CopyKind::Store => ("copystore", "Your stores:"),
        CopyKind::Exchange => ("copyexchange", "Your Exchanges:"),
    };
    let mut lines = vec![
        format!("Use /{prefix} {command} sourceindex targetindex"),
        heading.to_string(),
    ];
    lines.extend(entries.iter().map(ToString::to_string));
    lines.join("\n")
}

fn copied_text(receipt: &CopyReceipt) -> String {
    let noun = match receipt.kind {
        CopyKind::Store => "store",
        CopyKind::Exchange => "exchange",
    };
    format!(
        "Copying {noun} {} to {}\n{}",
        receipt.source,
        receipt.target,
        receipt.summary()
    )
}
