//! `bookshelf` command-line front end.

mod cli;
mod commands;
mod render;

use anyhow::Context as _;
use bookshelf_core::db::open_db;
use bookshelf_core::{default_log_level, init_logging, LibraryService, SqliteLibraryStore};
use clap::Parser as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let log_dir = absolute(log_dir)?;
        init_logging(level, &log_dir.to_string_lossy())
            .map_err(anyhow::Error::msg)
            .context("init logging")?;
    }
    log::debug!(
        "event=cli_start module=cli status=ok version={}",
        bookshelf_core::core_version()
    );

    let conn = open_db(&cli.db)
        .with_context(|| format!("open library at `{}`", cli.db.display()))?;
    let mut service =
        LibraryService::open(SqliteLibraryStore::new(&conn)).context("restore library")?;

    let stdout = std::io::stdout();
    commands::run(&mut service, cli.command, &mut stdout.lock())
}

fn absolute(path: &Path) -> anyhow::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("resolve current directory")?;
    Ok(cwd.join(path))
}
