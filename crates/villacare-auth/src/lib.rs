//! Authentication and authorization for VillaCare.
//!
//! Covers password hashing and policy checks, opaque session tokens,
//! and the report visibility rules shared by the service layer.

pub mod password;
pub mod policy;
pub mod session;

pub use password::hasher::PasswordHasher;
pub use password::validator::PasswordValidator;
pub use policy::Actor;
pub use session::store::SessionStore;
