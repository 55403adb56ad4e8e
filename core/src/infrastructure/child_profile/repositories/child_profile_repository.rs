use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    child_profile::{entities::ChildProfile, ports::ChildProfileRepository},
    common::entities::app_errors::CoreError,
};
use crate::entity::child_profiles::{
    ActiveModel as ChildProfileActiveModel, Column as ChildProfileColumn,
    Entity as ChildProfileEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresChildProfileRepository {
    pub db: DatabaseConnection,
}

impl PostgresChildProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(profile: ChildProfile) -> ChildProfileActiveModel {
    ChildProfileActiveModel {
        id: Set(profile.id),
        user_id: Set(profile.user_id),
        name: Set(profile.name),
        age: Set(profile.age),
        preferences: Set(profile.preferences),
        allergies: Set(profile.allergies),
        created_at: Set(profile.created_at.naive_utc()),
        updated_at: Set(profile.updated_at.naive_utc()),
    }
}

impl ChildProfileRepository for PostgresChildProfileRepository {
    async fn create_profile(&self, profile: ChildProfile) -> Result<ChildProfile, CoreError> {
        let created = ChildProfileEntity::insert(to_active_model(profile))
            .exec_with_returning(&self.db)
            .await
            .map(ChildProfile::from)
            .map_err(|e| {
                error!("Failed to create child profile: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created)
    }

    async fn get_by_id(
        &self,
        profile_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ChildProfile>, CoreError> {
        let profile = ChildProfileEntity::find()
            .filter(ChildProfileColumn::Id.eq(profile_id))
            .filter(ChildProfileColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get child profile by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(ChildProfile::from);

        Ok(profile)
    }

    async fn fetch_by_user(&self, user_id: Uuid) -> Result<Vec<ChildProfile>, CoreError> {
        let profiles = ChildProfileEntity::find()
            .filter(ChildProfileColumn::UserId.eq(user_id))
            .order_by_desc(ChildProfileColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch child profiles: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(ChildProfile::from)
            .collect::<Vec<ChildProfile>>();

        Ok(profiles)
    }

    async fn update_profile(&self, profile: ChildProfile) -> Result<ChildProfile, CoreError> {
        let profile_id = profile.id;
        let user_id = profile.user_id;

        let updated = ChildProfileEntity::update(to_active_model(profile))
            .filter(ChildProfileColumn::Id.eq(profile_id))
            .filter(ChildProfileColumn::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map(ChildProfile::from)
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => CoreError::NotFound,
                e => {
                    error!("Failed to update child profile: {}", e);
                    CoreError::InternalServerError
                }
            })?;

        Ok(updated)
    }

    async fn delete_profile(&self, profile_id: Uuid, user_id: Uuid) -> Result<(), CoreError> {
        let result = ChildProfileEntity::delete_many()
            .filter(ChildProfileColumn::Id.eq(profile_id))
            .filter(ChildProfileColumn::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete child profile: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}
