pub mod message_repository;
