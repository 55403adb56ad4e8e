use pickyjoy_core::domain::conversation::value_objects::{GetHistoryInput, RoleFilter};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct GetMessagesQuery {
    /// Case-insensitive substring filter.
    pub search: Option<String>,
    pub role: Option<RoleFilter>,
    /// At most 100.
    pub limit: Option<u64>,
}

impl From<GetMessagesQuery> for GetHistoryInput {
    fn from(query: GetMessagesQuery) -> Self {
        GetHistoryInput {
            search: query.search,
            role: query.role.unwrap_or_default(),
            limit: query.limit,
        }
    }
}
