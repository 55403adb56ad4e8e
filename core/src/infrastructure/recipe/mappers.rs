use chrono::{TimeZone, Utc};

use crate::domain::recipe::entities::{Rating, Recipe};
use crate::entity::{ratings::Model as RatingModel, recipes::Model as RecipeModel};

impl From<RecipeModel> for Recipe {
    fn from(model: RecipeModel) -> Self {
        Recipe {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            ingredients: model.ingredients,
            instructions: model.instructions,
            nutrition_info: model.nutrition_info,
            rating_avg: model.rating_avg,
            rating_count: model.rating_count,
            created_at: Utc.from_utc_datetime(&model.created_at),
        }
    }
}

impl From<&RecipeModel> for Recipe {
    fn from(model: &RecipeModel) -> Self {
        Recipe::from(model.clone())
    }
}

impl From<RatingModel> for Rating {
    fn from(model: RatingModel) -> Self {
        Rating {
            id: model.id,
            recipe_id: model.recipe_id,
            user_id: model.user_id,
            rating: model.rating,
            comment: model.comment,
            created_at: Utc.from_utc_datetime(&model.created_at),
        }
    }
}
