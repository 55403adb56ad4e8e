use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError, conversation::entities::Role,
};

/// Outcome of a lookup whose failure must not abort the request.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
    Failed(CoreError),
}

impl<T> Lookup<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound | Lookup::Failed(_) => None,
        }
    }

    pub fn as_found(&self) -> Option<&T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound | Lookup::Failed(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound => Lookup::NotFound,
            Lookup::Failed(e) => Lookup::Failed(e),
        }
    }

    /// Logs the degradation, if any, under the given lookup name.
    pub fn logged(self, name: &str) -> Self {
        match &self {
            Lookup::Failed(e) => warn!("{} lookup failed, continuing without it: {}", name, e),
            Lookup::NotFound => debug!("{} lookup found nothing", name),
            Lookup::Found(_) => {}
        }
        self
    }
}

impl<T> From<Result<Option<T>, CoreError>> for Lookup<T> {
    fn from(result: Result<Option<T>, CoreError>) -> Self {
        match result {
            Ok(Some(value)) => Lookup::Found(value),
            Ok(None) => Lookup::NotFound,
            Err(e) => Lookup::Failed(e),
        }
    }
}

impl<T> From<Result<Vec<T>, CoreError>> for Lookup<Vec<T>> {
    fn from(result: Result<Vec<T>, CoreError>) -> Self {
        match result {
            Ok(values) if values.is_empty() => Lookup::NotFound,
            Ok(values) => Lookup::Found(values),
            Err(e) => Lookup::Failed(e),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionOptions {
    pub max_output_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendMessageInput {
    pub message: Option<String>,
    pub selected_profile_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SendMessageOutput {
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoleFilter {
    #[default]
    All,
    User,
    Assistant,
}

impl RoleFilter {
    pub fn matches(&self, role: Role) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::User => role == Role::User,
            RoleFilter::Assistant => role == Role::Assistant,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetHistoryInput {
    pub search: Option<String>,
    pub role: RoleFilter,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HistoryExport {
    pub file_name: String,
    pub content: String,
}
