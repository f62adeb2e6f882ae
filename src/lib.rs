//! Employee API façade library.
//!
//! Re-exposes an upstream mock employee API under a stable REST contract.

pub mod config;
pub mod employee;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::FacadeConfig;
pub use employee::{CreateEmployeeInput, Employee, EmployeeService};
pub use error::EmployeeError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use upstream::{EmployeeClient, HttpEmployeeClient};
