pub mod advisory;
pub mod health;
pub mod project;
pub mod provider;
pub mod v1;
