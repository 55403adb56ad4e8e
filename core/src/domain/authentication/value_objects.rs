use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Caller identity resolved from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: Option<String>,
}

impl Identity {
    pub fn new(user_id: Uuid, email: Option<String>) -> Self {
        Self { user_id, email }
    }

    pub fn id(&self) -> Uuid {
        self.user_id
    }
}
