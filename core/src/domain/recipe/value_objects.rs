use uuid::Uuid;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;
pub const TOP_RECIPES_MIN_AVG: f64 = 4.0;
pub const TOP_RECIPES_LIMIT: u64 = 20;

#[derive(Debug, Clone)]
pub struct SaveRecipeInput {
    pub content: String,
    pub nutrition_info: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct RateRecipeInput {
    pub recipe_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
}
