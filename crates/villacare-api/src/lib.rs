//! # villacare-api
//!
//! HTTP API layer using Axum: routes, extractors, handlers, DTOs, and
//! error mapping for VillaCare.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;
