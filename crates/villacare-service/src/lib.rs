//! # villacare-service
//!
//! Business logic service layer for VillaCare. Each service orchestrates
//! repositories and authentication to implement application-level use
//! cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod account;
pub mod context;
pub mod intake;
pub mod report;

pub use account::AccountService;
pub use context::RequestContext;
pub use intake::IntakeService;
pub use report::ReportService;
