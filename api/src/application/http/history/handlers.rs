pub mod export_messages;
pub mod get_messages;
