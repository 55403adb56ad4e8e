use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::Recipe, ports::RecipeRepository},
};
use crate::entity::recipes::{
    ActiveModel as RecipeActiveModel, Column as RecipeColumn, Entity as RecipeEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn create_recipe(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let created = RecipeEntity::insert(RecipeActiveModel {
            id: Set(recipe.id),
            user_id: Set(recipe.user_id),
            title: Set(recipe.title),
            ingredients: Set(recipe.ingredients),
            instructions: Set(recipe.instructions),
            nutrition_info: Set(recipe.nutrition_info),
            rating_avg: Set(recipe.rating_avg),
            rating_count: Set(recipe.rating_count),
            created_at: Set(recipe.created_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Recipe::from)
        .map_err(|e| {
            error!("Failed to create recipe: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn get_by_id(&self, recipe_id: Uuid, user_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        let recipe = RecipeEntity::find()
            .filter(RecipeColumn::Id.eq(recipe_id))
            .filter(RecipeColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Recipe::from);

        Ok(recipe)
    }

    async fn update_recipe_rating(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let result = RecipeEntity::update_many()
            .col_expr(RecipeColumn::RatingAvg, Expr::value(recipe.rating_avg))
            .col_expr(RecipeColumn::RatingCount, Expr::value(recipe.rating_count))
            .filter(RecipeColumn::Id.eq(recipe.id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update recipe rating: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(recipe)
    }

    async fn fetch_top_rated(
        &self,
        user_id: Uuid,
        min_avg: f64,
        limit: u64,
    ) -> Result<Vec<Recipe>, CoreError> {
        let recipes = RecipeEntity::find()
            .filter(RecipeColumn::UserId.eq(user_id))
            .filter(RecipeColumn::RatingAvg.gte(min_avg))
            .order_by_desc(RecipeColumn::RatingAvg)
            .order_by_desc(RecipeColumn::RatingCount)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch top rated recipes: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Recipe::from)
            .collect::<Vec<Recipe>>();

        Ok(recipes)
    }
}
