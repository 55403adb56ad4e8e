use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    conversation::{entities::StoredMessage, ports::MessageRepository},
};
use crate::entity::messages::{
    ActiveModel as MessageActiveModel, Column as MessageColumn, Entity as MessageEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresMessageRepository {
    pub db: DatabaseConnection,
}

impl PostgresMessageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Newest first; ids are UUID v7 so they break ties between equal timestamps.
fn recent_messages(user_id: Uuid, limit: u64) -> Select<MessageEntity> {
    MessageEntity::find()
        .filter(MessageColumn::UserId.eq(user_id))
        .order_by_desc(MessageColumn::CreatedAt)
        .order_by_desc(MessageColumn::Id)
        .limit(limit)
}

impl MessageRepository for PostgresMessageRepository {
    async fn create_message(&self, message: StoredMessage) -> Result<StoredMessage, CoreError> {
        let created = MessageEntity::insert(MessageActiveModel {
            id: Set(message.id),
            user_id: Set(message.user_id),
            role: Set(message.role.as_str().to_string()),
            content: Set(message.content),
            created_at: Set(message.created_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to create message: {}", e);
            CoreError::InternalServerError
        })?;

        StoredMessage::try_from(&created)
    }

    async fn fetch_recent(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<StoredMessage>, CoreError> {
        recent_messages(user_id, limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch messages: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(StoredMessage::try_from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};

    use super::*;

    #[test]
    fn test_recent_messages_order_is_total() {
        let sql = recent_messages(Uuid::new_v4(), 10)
            .build(DbBackend::Postgres)
            .to_string();

        assert!(
            sql.contains(r#"ORDER BY "messages"."created_at" DESC, "messages"."id" DESC"#),
            "{sql}"
        );
        assert!(sql.contains("LIMIT 10"), "{sql}");
    }
}
