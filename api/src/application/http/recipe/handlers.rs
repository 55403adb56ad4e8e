pub mod extract_recipe;
pub mod get_top_recipes;
pub mod rate_recipe;
pub mod save_recipe;
