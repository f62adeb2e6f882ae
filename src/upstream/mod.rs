//! Upstream employee API integration.
//!
//! # Data Flow
//! ```text
//! EmployeeService
//!     → client.rs (one HTTP call per capability, status mapping)
//!     → types.rs (envelope + field-name translation)
//!     → upstream mock employee API
//! ```

pub mod client;
pub mod types;

pub use client::{ClientBuildError, EmployeeClient, HttpEmployeeClient};
