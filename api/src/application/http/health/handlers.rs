pub mod health;
pub mod readiness;
