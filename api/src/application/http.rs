pub mod chat;
pub mod child_profile;
pub mod health;
pub mod history;
pub mod recipe;
pub mod server;
pub mod settings;
