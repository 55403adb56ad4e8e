use pickyjoy_core::domain::child_profile::services::parse_comma_list;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A list field accepted either as a JSON array or as the comma separated
/// text typed into the profile form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum ListInput {
    List(Vec<String>),
    Text(String),
}

impl ListInput {
    pub fn into_items(self) -> Vec<String> {
        match self {
            ListInput::List(items) => items,
            ListInput::Text(text) => parse_comma_list(&text),
        }
    }
}

pub fn list_items(input: Option<ListInput>) -> Vec<String> {
    input.map(ListInput::into_items).unwrap_or_default()
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChildProfileValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(range(min = 1, max = 18, message = "age must be between 1 and 18"))]
    #[serde(default)]
    pub age: Option<i32>,

    #[serde(default)]
    pub preferences: Option<ListInput>,

    #[serde(default)]
    pub allergies: Option<ListInput>,
}
