use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::client::Resource;
use crate::error::ApiError;
use crate::validation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

pub struct Categories;

impl Resource for Categories {
    type Entity = Category;
    type Draft = CategoryDraft;

    const COLLECTION: &'static str = "categories";
    const LABEL: &'static str = "category";
    const PLURAL: &'static str = "categories";

    fn entity_id(entity: &Category) -> i32 {
        entity.id
    }

    fn seed(entity: &Category) -> CategoryDraft {
        CategoryDraft {
            name: entity.name.clone(),
            description: entity.description.clone(),
        }
    }

    fn validate(draft: &CategoryDraft, _creating: bool) -> Result<(), ApiError> {
        validation::validate_category(draft)
    }

    fn create_body(draft: &CategoryDraft) -> Value {
        json!({
            "name": draft.name,
            "description": draft.description,
        })
    }

    fn update_body(draft: &CategoryDraft) -> Value {
        Self::create_body(draft)
    }
}
