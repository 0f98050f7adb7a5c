//! Password hashing and strength validation.

pub mod hasher;
pub mod validator;
