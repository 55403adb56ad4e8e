pub mod create_profile;
pub mod delete_profile;
pub mod get_profiles;
pub mod update_profile;
