//! Command-line arguments and environment-backed configuration.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "bookshelf", author, version, about = "Track the books you own and have read")]
pub struct Cli {
    /// SQLite file holding the library snapshot.
    #[arg(long, env = "BOOKSHELF_DB", default_value = "bookshelf.sqlite3", global = true)]
    pub db: PathBuf,

    /// Directory for rolling log files; logging is off when unset.
    #[arg(long, env = "BOOKSHELF_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// One of trace|debug|info|warn|error.
    #[arg(long, env = "BOOKSHELF_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a book; titles must be unique.
    Add(AddArgs),
    /// Remove every book with the given title.
    Remove { title: String },
    /// Flip the read status of a book.
    Toggle { title: String },
    /// Print all books in the order they were added.
    List,
    /// Print one book.
    Show { title: String },
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long, default_value = bookshelf_core::model::book::UNKNOWN_FIELD)]
    pub author: String,

    /// Page count, kept as entered.
    #[arg(long, default_value = bookshelf_core::model::book::UNKNOWN_PAGES)]
    pub pages: String,

    /// Mark the book as already read.
    #[arg(long)]
    pub read: bool,
}
