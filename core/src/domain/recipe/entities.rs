use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Structured recipe recovered from an assistant reply. Never persisted on
/// its own; see [`Recipe`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExtractedRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    #[schema(value_type = Option<Object>)]
    pub nutrition_info: Option<serde_json::Value>,
    pub rating_avg: Option<f64>,
    pub rating_count: i32,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    pub fn new(
        user_id: Uuid,
        extracted: ExtractedRecipe,
        nutrition_info: Option<serde_json::Value>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            title: extracted.title,
            ingredients: extracted.ingredients,
            instructions: extracted.instructions,
            nutrition_info,
            rating_avg: None,
            rating_count: 0,
            created_at: now,
        }
    }

    /// Recomputes the aggregate from every score the recipe has received.
    pub fn apply_ratings(&mut self, scores: &[i32]) {
        self.rating_count = scores.len() as i32;
        self.rating_avg = if scores.is_empty() {
            None
        } else {
            let sum: i64 = scores.iter().map(|s| i64::from(*s)).sum();
            Some(sum as f64 / scores.len() as f64)
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Rating {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Rating {
    pub fn new(recipe_id: Uuid, user_id: Uuid, rating: i32, comment: Option<String>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            recipe_id,
            user_id,
            rating,
            comment,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Recipe {
        Recipe::new(
            Uuid::new_v4(),
            ExtractedRecipe {
                title: "Toast".to_string(),
                ingredients: vec!["Bread".to_string()],
                instructions: String::new(),
            },
            None,
        )
    }

    #[test]
    fn test_new_recipe_is_unrated() {
        let recipe = recipe();

        assert_eq!(recipe.rating_avg, None);
        assert_eq!(recipe.rating_count, 0);
    }

    #[test]
    fn test_apply_ratings_averages_scores() {
        let mut recipe = recipe();

        recipe.apply_ratings(&[5, 4, 4]);

        assert_eq!(recipe.rating_count, 3);
        let avg = recipe.rating_avg.unwrap();
        assert!((avg - 13.0 / 3.0).abs() < 1e-9);
    }
}
