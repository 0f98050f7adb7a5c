//! Opaque session token issuing and validation.

pub mod store;
pub mod token;
