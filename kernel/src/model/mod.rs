pub mod advisory;
pub mod id;
pub mod notification;
pub mod portfolio;
pub mod project;
pub mod provider;
pub mod schedule;
