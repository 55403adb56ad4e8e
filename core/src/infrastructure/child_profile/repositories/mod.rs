pub mod child_profile_repository;
