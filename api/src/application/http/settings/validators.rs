use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSystemPromptValidator {
    #[validate(length(min = 1, message = "system_prompt is required"))]
    pub system_prompt: String,
}
