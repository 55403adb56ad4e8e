use tracing::info;

use crate::domain::{
    authentication::{ports::SessionVerifier, value_objects::Identity},
    child_profile::ports::ChildProfileRepository,
    common::{entities::app_errors::CoreError, services::Service},
    conversation::ports::{LLMClient, MessageRepository},
    health::ports::HealthCheckRepository,
    recipe::{
        entities::{ExtractedRecipe, Rating, Recipe},
        extractor,
        ports::{RatingRepository, RecipeRepository, RecipeService},
        value_objects::{
            MAX_RATING, MIN_RATING, RateRecipeInput, SaveRecipeInput, TOP_RECIPES_LIMIT,
            TOP_RECIPES_MIN_AVG,
        },
    },
    user_settings::ports::UserSettingsRepository,
};

impl<SV, US, CP, M, RC, RT, LLM, HC> RecipeService for Service<SV, US, CP, M, RC, RT, LLM, HC>
where
    SV: SessionVerifier,
    US: UserSettingsRepository,
    CP: ChildProfileRepository,
    M: MessageRepository,
    RC: RecipeRepository,
    RT: RatingRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    fn extract_recipe(&self, content: String) -> Option<ExtractedRecipe> {
        extractor::extract_recipe(&content)
    }

    async fn save_recipe(
        &self,
        identity: Identity,
        input: SaveRecipeInput,
    ) -> Result<Recipe, CoreError> {
        let extracted = extractor::extract_recipe(&input.content)
            .ok_or_else(|| CoreError::Invalid("No recipe found in message".to_string()))?;

        let recipe = self
            .recipe_repository
            .create_recipe(Recipe::new(identity.id(), extracted, input.nutrition_info))
            .await?;

        info!("saved recipe {} for {}", recipe.id, identity.id());
        Ok(recipe)
    }

    async fn rate_recipe(
        &self,
        identity: Identity,
        input: RateRecipeInput,
    ) -> Result<Recipe, CoreError> {
        if !(MIN_RATING..=MAX_RATING).contains(&input.rating) {
            return Err(CoreError::Invalid(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }

        let mut recipe = self
            .recipe_repository
            .get_by_id(input.recipe_id, identity.id())
            .await?
            .ok_or(CoreError::NotFound)?;

        let comment = input
            .comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        self.rating_repository
            .create_rating(Rating::new(recipe.id, identity.id(), input.rating, comment))
            .await?;

        let scores = self
            .rating_repository
            .fetch_scores_by_recipe(recipe.id)
            .await?;
        recipe.apply_ratings(&scores);

        self.recipe_repository.update_recipe_rating(recipe).await
    }

    async fn get_top_recipes(&self, identity: Identity) -> Result<Vec<Recipe>, CoreError> {
        self.recipe_repository
            .fetch_top_rated(identity.id(), TOP_RECIPES_MIN_AVG, TOP_RECIPES_LIMIT)
            .await
    }
}
