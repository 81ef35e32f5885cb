//! Command line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mailbook_core::MailId;

#[derive(Parser, Debug)]
#[command(name = "mailbook", version, about = "Read and send paged in-game mail")]
pub struct Cli {
    /// Mail database (defaults to the user data directory).
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,
    /// Settings file (defaults to the user config directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send a mail to a player, or to `-Public` for the public board.
    Send {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        title: String,
        /// Body text.
        #[arg(long, conflicts_with = "file")]
        body: Option<String>,
        /// Read the body from a file.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List the mails of a mailbox, newest first.
    List { mailbox: String },
    /// Open a mail as a book.
    Read {
        mailbox: String,
        id: MailId,
        /// Leave the mail unread.
        #[arg(long, default_value_t = false)]
        keep_unread: bool,
    },
    /// Show details about a mail.
    Info { mailbox: String, id: MailId },
    /// Delete a mail.
    Delete { mailbox: String, id: MailId },
    /// Print the public board in its exchange format.
    Feed,
    /// Show the active settings.
    Config {
        /// Write the default settings file if none exists.
        #[arg(long, default_value_t = false)]
        init: bool,
    },
}
