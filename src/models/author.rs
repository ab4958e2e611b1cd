use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::client::Resource;
use crate::error::ApiError;
use crate::util::normalize_date;
use crate::validation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorDraft {
    pub name: String,
    pub birth_date: String,
    pub country: String,
}

pub struct Authors;

impl Resource for Authors {
    type Entity = Author;
    type Draft = AuthorDraft;

    const COLLECTION: &'static str = "authors";
    const LABEL: &'static str = "author";
    const PLURAL: &'static str = "authors";

    fn entity_id(entity: &Author) -> i32 {
        entity.id
    }

    fn seed(entity: &Author) -> AuthorDraft {
        AuthorDraft {
            name: entity.name.clone(),
            birth_date: normalize_date(&entity.birth_date),
            country: entity.country.clone(),
        }
    }

    fn validate(draft: &AuthorDraft, _creating: bool) -> Result<(), ApiError> {
        validation::validate_author(draft)
    }

    fn create_body(draft: &AuthorDraft) -> Value {
        json!({
            "name": draft.name,
            "birthDate": draft.birth_date,
            "country": draft.country,
        })
    }

    fn update_body(draft: &AuthorDraft) -> Value {
        Self::create_body(draft)
    }
}
