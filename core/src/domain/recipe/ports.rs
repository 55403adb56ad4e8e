use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{ExtractedRecipe, Rating, Recipe},
        value_objects::{RateRecipeInput, SaveRecipeInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn create_recipe(
        &self,
        recipe: Recipe,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    /// Persists `rating_avg` and `rating_count` only.
    fn update_recipe_rating(
        &self,
        recipe: Recipe,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    /// Recipes with `rating_avg >= min_avg`, best average first, ties broken
    /// by rating count.
    fn fetch_top_rated(
        &self,
        user_id: Uuid,
        min_avg: f64,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RatingRepository: Send + Sync {
    fn create_rating(
        &self,
        rating: Rating,
    ) -> impl Future<Output = Result<Rating, CoreError>> + Send;

    fn fetch_scores_by_recipe(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<i32>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    /// Pure preview, nothing is stored.
    fn extract_recipe(&self, content: String) -> Option<ExtractedRecipe>;

    fn save_recipe(
        &self,
        identity: Identity,
        input: SaveRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn rate_recipe(
        &self,
        identity: Identity,
        input: RateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_top_recipes(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}
