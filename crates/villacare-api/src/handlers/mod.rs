//! HTTP request handlers, grouped by domain.

pub mod admin;
pub mod auth;
pub mod health;
pub mod profile;
pub mod public;
pub mod report;
