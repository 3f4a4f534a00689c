pub mod advisory;
pub mod portfolio;
pub mod project;
pub mod provider;
pub mod schedule;
pub mod validate;
