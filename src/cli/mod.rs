//! Command-line interface for the daybook application.
//!
//! The CLI plays the role of the authenticated caller: it supplies the owner
//! id and operation parameters and prints the service's JSON results. It adds
//! no business logic of its own.

use crate::constants::{APP_DESCRIPTION, APP_NAME};
use clap::{Parser, Subcommand};

/// Command-line arguments for the daybook application.
#[derive(Debug, Parser)]
#[command(name = APP_NAME, about = APP_DESCRIPTION, version)]
pub struct CliArgs {
    /// Owner id the operation is scoped to.
    #[arg(short, long)]
    pub owner: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Diary operations exposed on the command line.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create or overwrite today's entry.
    Write {
        /// Entry title.
        #[arg(short, long, default_value = "")]
        subject: String,
        /// Entry body.
        #[arg(short, long)]
        content: String,
    },
    /// List the newest entries, or the page older than a cursor entry.
    List {
        /// Entry id to page backwards from.
        #[arg(short, long)]
        before: Option<String>,
    },
    /// Search entries by keyword over subject and content.
    Search {
        /// Keyword to match.
        keyword: String,
    },
    /// List entries created on or before a date (YYYY-MM-DD).
    Through {
        /// Inclusive upper bound on the creation date.
        date: String,
    },
    /// Count the owner's entries.
    Count,
    /// Delete every entry of the owner.
    Purge,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_write_command() {
        let args =
            CliArgs::parse_from(["daybook", "--owner", "u1", "write", "--content", "hello"]);
        assert_eq!(args.owner, "u1");
        match args.command {
            Command::Write { subject, content } => {
                assert_eq!(subject, "");
                assert_eq!(content, "hello");
            }
            other => panic!("expected Write, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_with_cursor() {
        let args = CliArgs::parse_from(["daybook", "-o", "u1", "list", "--before", "abc"]);
        match args.command {
            Command::List { before } => assert_eq!(before.as_deref(), Some("abc")),
            other => panic!("expected List, got {:?}", other),
        }
    }

    #[test]
    fn test_owner_is_required() {
        assert!(CliArgs::try_parse_from(["daybook", "count"]).is_err());
    }
}
