//! Entity repositories.

pub mod comment;
pub mod contact;
pub mod package;
pub mod profile;
pub mod report;
pub mod review;
pub mod session;
pub mod user;
