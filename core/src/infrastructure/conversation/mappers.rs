use chrono::{TimeZone, Utc};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    conversation::entities::{Role, StoredMessage},
};
use crate::entity::messages::Model as MessageModel;

impl TryFrom<&MessageModel> for StoredMessage {
    type Error = CoreError;

    fn try_from(model: &MessageModel) -> Result<Self, Self::Error> {
        let role = model.role.parse::<Role>().map_err(|e| {
            error!("Stored message {} has an unreadable role: {}", model.id, e);
            CoreError::InternalServerError
        })?;

        Ok(StoredMessage {
            id: model.id,
            user_id: model.user_id,
            role,
            content: model.content.clone(),
            created_at: Utc.from_utc_datetime(&model.created_at),
        })
    }
}
