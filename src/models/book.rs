use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::client::Resource;
use crate::error::ApiError;
use crate::validation;

use super::author::Author;
use super::category::Category;
use super::publisher::Publisher;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub publication_year: i32,
    pub stock: i32,
    // Embedded references may be absent in degraded payloads
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub publisher: Option<Publisher>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// In-progress field values for a book being created or edited. Numeric
/// fields hold the text as typed; validation coerces them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookDraft {
    pub name: String,
    pub publication_year: String,
    pub stock: String,
    pub author: Option<Author>,
    pub publisher: Option<Publisher>,
    pub categories: Vec<Category>,
}

pub struct Books;

impl Resource for Books {
    type Entity = Book;
    type Draft = BookDraft;

    const COLLECTION: &'static str = "books";
    const LABEL: &'static str = "book";
    const PLURAL: &'static str = "books";

    fn entity_id(entity: &Book) -> i32 {
        entity.id
    }

    fn seed(entity: &Book) -> BookDraft {
        BookDraft {
            name: entity.name.clone(),
            publication_year: entity.publication_year.to_string(),
            stock: entity.stock.to_string(),
            author: entity.author.clone(),
            publisher: entity.publisher.clone(),
            categories: entity.categories.clone(),
        }
    }

    fn validate(draft: &BookDraft, _creating: bool) -> Result<(), ApiError> {
        validation::validate_book(draft)
    }

    fn create_body(draft: &BookDraft) -> Value {
        json!({
            "name": draft.name,
            "publicationYear": super::parse_int(&draft.publication_year),
            "stock": super::parse_int(&draft.stock),
            "author": draft.author,
            "publisher": draft.publisher,
            "categories": draft.categories,
        })
    }

    // The backend takes the same embedded sub-objects on update as on create
    fn update_body(draft: &BookDraft) -> Value {
        Self::create_body(draft)
    }
}
