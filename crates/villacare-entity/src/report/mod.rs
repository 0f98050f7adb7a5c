//! Villa report entity, enumerations, and staff edit patching.

pub mod category;
pub mod model;
pub mod priority;
pub mod status;

pub use category::ReportCategory;
pub use model::{CreateReport, StaffReportPatch, VillaReport};
pub use priority::ReportPriority;
pub use status::ReportStatus;
