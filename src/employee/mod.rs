//! Employee domain: façade-owned types, pure queries and the service.
//!
//! # Data Flow
//! ```text
//! http handlers
//!     → service.rs (validation, delete orchestration)
//!     → query.rs (filter / max / top-N over a fresh list)
//!     → upstream client
//! ```

pub mod model;
pub mod query;
pub mod service;

pub use model::{CreateEmployeeInput, Employee};
pub use service::EmployeeService;
