pub mod child_profiles;
pub mod messages;
pub mod ratings;
pub mod recipes;
pub mod user_settings;
