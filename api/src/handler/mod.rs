pub mod advisory;
pub mod health;
pub mod portfolio;
pub mod project;
pub mod provider;
pub mod schedule;
