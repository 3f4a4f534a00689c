pub mod advisory;
pub mod health;
pub mod portfolio;
pub mod profile;
pub mod project;
pub mod schedule;
