use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::client::Resource;
use crate::error::ApiError;
use crate::util::normalize_date;
use crate::validation;

use super::book::Book;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Borrowing {
    pub id: i32,
    pub borrower_name: String,
    pub borrower_email: String,
    pub borrowing_date: String,
    #[serde(default)]
    pub return_date: Option<String>,
    #[serde(default)]
    pub book: Option<Book>,
}

/// Dates are held as `YYYY-MM-DD` text; an empty return date means the
/// book is still out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorrowingDraft {
    pub borrower_name: String,
    pub borrower_email: String,
    pub borrowing_date: String,
    pub return_date: String,
    pub book: Option<Book>,
}

pub struct Borrowings;

impl Resource for Borrowings {
    type Entity = Borrowing;
    type Draft = BorrowingDraft;

    const COLLECTION: &'static str = "borrows";
    const LABEL: &'static str = "borrowing record";
    const PLURAL: &'static str = "borrowings";

    fn entity_id(entity: &Borrowing) -> i32 {
        entity.id
    }

    fn seed(entity: &Borrowing) -> BorrowingDraft {
        BorrowingDraft {
            borrower_name: entity.borrower_name.clone(),
            borrower_email: entity.borrower_email.clone(),
            borrowing_date: normalize_date(&entity.borrowing_date),
            return_date: entity
                .return_date
                .as_deref()
                .map(normalize_date)
                .unwrap_or_default(),
            book: entity.book.clone(),
        }
    }

    fn validate(draft: &BorrowingDraft, creating: bool) -> Result<(), ApiError> {
        validation::validate_borrowing(draft, creating)
    }

    fn create_body(draft: &BorrowingDraft) -> Value {
        json!({
            "borrowerName": draft.borrower_name,
            "borrowerEmail": draft.borrower_email,
            "borrowingDate": draft.borrowing_date,
            "returnDate": super::opt_text(&draft.return_date),
            "book": draft.book,
        })
    }

    // The book reference is immutable after creation; updates carry only
    // the borrower and date fields.
    fn update_body(draft: &BorrowingDraft) -> Value {
        json!({
            "borrowerName": draft.borrower_name,
            "borrowerEmail": draft.borrower_email,
            "borrowingDate": draft.borrowing_date,
            "returnDate": super::opt_text(&draft.return_date),
        })
    }
}
