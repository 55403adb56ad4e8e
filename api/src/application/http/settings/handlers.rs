pub mod get_system_prompt;
pub mod reset_system_prompt;
pub mod update_system_prompt;
