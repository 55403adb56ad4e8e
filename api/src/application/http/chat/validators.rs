use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Chat request body. Both fields are optional on the wire so that a missing
/// message is reported by the conversation handler, not by the JSON parser.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageValidator {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub selected_profile_id: Option<String>,
}

impl SendMessageValidator {
    /// An unparseable or blank profile id is treated as no selection.
    pub fn profile_id(&self) -> Option<Uuid> {
        self.selected_profile_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .and_then(|id| Uuid::parse_str(id).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_id_is_lenient() {
        let id = Uuid::new_v4();
        let body: SendMessageValidator = serde_json::from_value(serde_json::json!({
            "message": "hi",
            "selectedProfileId": id.to_string(),
        }))
        .unwrap();
        assert_eq!(body.profile_id(), Some(id));

        let body: SendMessageValidator =
            serde_json::from_value(serde_json::json!({"selectedProfileId": "nope"})).unwrap();
        assert_eq!(body.profile_id(), None);
        assert_eq!(body.message, None);
    }
}
