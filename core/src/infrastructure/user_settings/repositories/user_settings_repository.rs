use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user_settings::{entities::UserSettings, ports::UserSettingsRepository},
};
use crate::entity::user_settings::{
    ActiveModel as UserSettingsActiveModel, Column as UserSettingsColumn,
    Entity as UserSettingsEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresUserSettingsRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserSettingsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserSettingsRepository for PostgresUserSettingsRepository {
    async fn get_by_user(&self, user_id: Uuid) -> Result<Option<UserSettings>, CoreError> {
        let settings = UserSettingsEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user settings: {}", e);
                CoreError::InternalServerError
            })?
            .map(UserSettings::from);

        Ok(settings)
    }

    async fn upsert(&self, settings: UserSettings) -> Result<UserSettings, CoreError> {
        let saved = UserSettingsEntity::insert(UserSettingsActiveModel {
            user_id: Set(settings.user_id),
            system_prompt: Set(settings.system_prompt),
            updated_at: Set(settings.updated_at.naive_utc()),
        })
        .on_conflict(
            OnConflict::column(UserSettingsColumn::UserId)
                .update_columns([UserSettingsColumn::SystemPrompt, UserSettingsColumn::UpdatedAt])
                .to_owned(),
        )
        .exec_with_returning(&self.db)
        .await
        .map(UserSettings::from)
        .map_err(|e| {
            error!("Failed to upsert user settings: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(saved)
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<(), CoreError> {
        UserSettingsEntity::delete_many()
            .filter(UserSettingsColumn::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete user settings: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
