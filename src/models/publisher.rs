use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::client::Resource;
use crate::error::ApiError;
use crate::validation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publisher {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub establishment_year: i32,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublisherDraft {
    pub name: String,
    pub establishment_year: String,
    pub address: String,
}

pub struct Publishers;

impl Resource for Publishers {
    type Entity = Publisher;
    type Draft = PublisherDraft;

    const COLLECTION: &'static str = "publishers";
    const LABEL: &'static str = "publisher";
    const PLURAL: &'static str = "publishers";

    fn entity_id(entity: &Publisher) -> i32 {
        entity.id
    }

    fn seed(entity: &Publisher) -> PublisherDraft {
        PublisherDraft {
            name: entity.name.clone(),
            establishment_year: entity.establishment_year.to_string(),
            address: entity.address.clone(),
        }
    }

    fn validate(draft: &PublisherDraft, _creating: bool) -> Result<(), ApiError> {
        validation::validate_publisher(draft)
    }

    fn create_body(draft: &PublisherDraft) -> Value {
        // establishmentYear is accepted unchecked; non-numeric input
        // serializes as null rather than failing the submit
        json!({
            "name": draft.name,
            "establishmentYear": super::parse_int(&draft.establishment_year),
            "address": draft.address,
        })
    }

    fn update_body(draft: &PublisherDraft) -> Value {
        Self::create_body(draft)
    }
}
