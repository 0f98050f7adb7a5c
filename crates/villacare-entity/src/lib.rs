//! # villacare-entity
//!
//! Domain entity models for VillaCare: users, profiles, packages,
//! contact messages, reviews, villa reports, report comments, and
//! sessions. All models derive `sqlx::FromRow` and map enum columns
//! through PostgreSQL enum types.

pub mod comment;
pub mod contact;
pub mod package;
pub mod profile;
pub mod report;
pub mod review;
pub mod session;
pub mod user;
