use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChildProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub age: Option<i32>,
    pub preferences: Vec<String>,
    pub allergies: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ChildProfileConfig {
    pub user_id: Uuid,
    pub name: String,
    pub age: Option<i32>,
    pub preferences: Vec<String>,
    pub allergies: Vec<String>,
}

impl ChildProfile {
    pub fn new(config: ChildProfileConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            name: config.name,
            age: config.age,
            preferences: config.preferences,
            allergies: config.allergies,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        name: String,
        age: Option<i32>,
        preferences: Vec<String>,
        allergies: Vec<String>,
    ) {
        let (now, _) = generate_timestamp();

        self.name = name;
        self.age = age;
        self.preferences = preferences;
        self.allergies = allergies;
        self.updated_at = now;
    }
}
