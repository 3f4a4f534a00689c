pub mod advisory;
pub mod health;
pub mod notification;
pub mod portfolio;
pub mod profile;
pub mod project;
pub mod schedule;
