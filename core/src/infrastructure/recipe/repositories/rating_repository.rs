use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::Rating, ports::RatingRepository},
};
use crate::entity::ratings::{
    ActiveModel as RatingActiveModel, Column as RatingColumn, Entity as RatingEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresRatingRepository {
    pub db: DatabaseConnection,
}

impl PostgresRatingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RatingRepository for PostgresRatingRepository {
    async fn create_rating(&self, rating: Rating) -> Result<Rating, CoreError> {
        let created = RatingEntity::insert(RatingActiveModel {
            id: Set(rating.id),
            recipe_id: Set(rating.recipe_id),
            user_id: Set(rating.user_id),
            rating: Set(rating.rating),
            comment: Set(rating.comment),
            created_at: Set(rating.created_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Rating::from)
        .map_err(|e| {
            error!("Failed to create rating: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn fetch_scores_by_recipe(&self, recipe_id: Uuid) -> Result<Vec<i32>, CoreError> {
        let scores = RatingEntity::find()
            .select_only()
            .column(RatingColumn::Rating)
            .filter(RatingColumn::RecipeId.eq(recipe_id))
            .into_tuple::<i32>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch ratings for recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(scores)
    }
}
