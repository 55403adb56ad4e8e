use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ExtractRecipeValidator {
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveRecipeValidator {
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,

    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub nutrition_info: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RateRecipeValidator {
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,

    #[serde(default)]
    pub comment: Option<String>,
}
