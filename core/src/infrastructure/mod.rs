pub mod auth;
pub mod child_profile;
pub mod conversation;
pub mod db;
pub mod health;
pub mod llm;
pub mod recipe;
pub mod user_settings;
