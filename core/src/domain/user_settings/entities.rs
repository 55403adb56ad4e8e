use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Per-user settings row. Only the system prompt override is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserSettings {
    pub user_id: Uuid,
    pub system_prompt: String,
    pub updated_at: DateTime<Utc>,
}

impl UserSettings {
    pub fn new(user_id: Uuid, system_prompt: String) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            user_id,
            system_prompt,
            updated_at: now,
        }
    }
}

/// The prompt a user currently chats with, and whether it is their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SystemPromptView {
    pub system_prompt: String,
    pub is_custom: bool,
}
