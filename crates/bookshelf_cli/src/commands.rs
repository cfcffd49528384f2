//! Subcommand handlers over the library service.

use crate::cli::{AddArgs, Command};
use crate::render::{book_card, books_grid};
use anyhow::Context as _;
use bookshelf_core::{Book, LibraryService, LibraryStore};
use std::io::Write;

pub fn run<S: LibraryStore>(
    service: &mut LibraryService<S>,
    command: Command,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Add(args) => add(service, args, out)?,
        Command::Remove { title } => {
            let removed = service.remove_book(&title).context("remove")?;
            writeln!(out, "Removed {removed} book(s)")?;
        }
        Command::Toggle { title } => {
            let is_read = service.toggle_read(&title).context("toggle")?;
            let label = if is_read { "Read" } else { "Not read" };
            writeln!(out, "\"{title}\" is now {label}")?;
        }
        Command::List => write!(out, "{}", books_grid(service.books()))?,
        Command::Show { title } => {
            let book = service
                .get_book(&title)
                .with_context(|| format!("book not found: \"{title}\""))?;
            write!(out, "{}", book_card(book))?;
        }
    }
    Ok(())
}

fn add<S: LibraryStore>(
    service: &mut LibraryService<S>,
    args: AddArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let book = Book::new(args.title, args.author, args.pages, args.read);
    let title = book.title.clone();
    // Duplicate titles surface as the bare user-facing message.
    service.add_book(book)?;
    writeln!(out, "Added \"{title}\"")?;
    Ok(())
}
