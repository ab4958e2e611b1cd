//! Client-side validation, run before any network call.
//!
//! Each rule set checks a draft top to bottom and returns the first failing
//! reason. Responses are never re-validated; the server stays authoritative
//! for anything not checked here.

use crate::error::ApiError;
use crate::models::{AuthorDraft, BookDraft, BorrowingDraft, CategoryDraft, PublisherDraft};

fn fail(reason: &str) -> Result<(), ApiError> {
    Err(ApiError::Validation(reason.to_string()))
}

pub fn validate_book(draft: &BookDraft) -> Result<(), ApiError> {
    if draft.name.trim().is_empty() {
        return fail("Book name cannot be empty");
    }
    if draft.publication_year.trim().parse::<i64>().is_err() {
        return fail("Publication Year must be a valid number");
    }
    match draft.stock.trim().parse::<i64>() {
        Ok(stock) if stock >= 0 => {}
        _ => return fail("Stock must be a positive number"),
    }
    if draft.author.is_none() {
        return fail("An author must be selected");
    }
    if draft.publisher.is_none() {
        return fail("A publisher must be selected");
    }
    if draft.categories.is_empty() {
        return fail("At least one category must be selected");
    }
    Ok(())
}

pub fn validate_author(draft: &AuthorDraft) -> Result<(), ApiError> {
    if draft.name.trim().is_empty() {
        return fail("Author name cannot be empty");
    }
    Ok(())
}

pub fn validate_publisher(draft: &PublisherDraft) -> Result<(), ApiError> {
    if draft.name.trim().is_empty() {
        return fail("Publisher name cannot be empty");
    }
    Ok(())
}

pub fn validate_category(draft: &CategoryDraft) -> Result<(), ApiError> {
    if draft.name.trim().is_empty() {
        return fail("Category name cannot be empty");
    }
    Ok(())
}

/// `creating` gates the book-reference rule: the referenced book is chosen
/// at creation and immutable afterwards, so edits skip it.
pub fn validate_borrowing(draft: &BorrowingDraft, creating: bool) -> Result<(), ApiError> {
    if draft.borrower_name.trim().is_empty() {
        return fail("Borrower name cannot be empty");
    }
    if draft.borrower_email.trim().is_empty() {
        return fail("Borrower email cannot be empty");
    }
    if draft.borrowing_date.trim().is_empty() {
        return fail("Borrowing date cannot be empty");
    }
    if creating && draft.book.is_none() {
        return fail("A book must be selected");
    }
    Ok(())
}
