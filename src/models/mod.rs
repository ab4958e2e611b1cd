pub mod author;
pub mod book;
pub mod borrowing;
pub mod category;
pub mod publisher;

pub use author::{Author, AuthorDraft, Authors};
pub use book::{Book, BookDraft, Books};
pub use borrowing::{Borrowing, BorrowingDraft, Borrowings};
pub use category::{Categories, Category, CategoryDraft};
pub use publisher::{Publisher, PublisherDraft, Publishers};

/// Numeric draft fields stay text until validation; bodies serialize the
/// parsed value, or null where the field is accepted unchecked.
pub(crate) fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Empty or blank draft text maps to a JSON null in request bodies.
pub(crate) fn opt_text(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
