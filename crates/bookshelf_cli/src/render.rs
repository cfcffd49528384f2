//! Plain-text book cards.

use bookshelf_core::Book;

/// Renders one book as a four-line card.
pub fn book_card(book: &Book) -> String {
    format!(
        "\"{}\"\n{}\n{} pages\n[{}]\n",
        book.title,
        book.author,
        book.pages,
        book.read_label()
    )
}

/// Renders all cards separated by blank lines.
pub fn books_grid(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books yet\n".to_string();
    }

    let mut out = String::new();
    for (index, book) in books.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&book_card(book));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{book_card, books_grid};
    use bookshelf_core::Book;

    #[test]
    fn card_quotes_title_and_labels_read_state() {
        let card = book_card(&Book::new("Dune", "Frank Herbert", "412", false));
        assert_eq!(card, "\"Dune\"\nFrank Herbert\n412 pages\n[Not read]\n");
    }

    #[test]
    fn grid_separates_cards_and_handles_empty() {
        assert_eq!(books_grid(&[]), "No books yet\n");

        let grid = books_grid(&[
            Book::new("A", "x", "1", true),
            Book::new("B", "y", "2", false),
        ]);
        assert_eq!(grid, "\"A\"\nx\n1 pages\n[Read]\n\n\"B\"\ny\n2 pages\n[Not read]\n");
    }
}
