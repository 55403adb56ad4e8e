pub mod authentication;
pub mod child_profile;
pub mod common;
pub mod conversation;
pub mod health;
pub mod recipe;
pub mod user_settings;
