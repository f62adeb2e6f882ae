//! HTTP façade subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned, propagated)
//!     → handlers.rs (extract, call EmployeeService)
//!     → response.rs (EmployeeError → status + JSON body)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{build_router, AppState, HttpServer};
