//! CivicFix complaint-intake API
//!
//! Library surface for the binary and the integration tests: request
//! handlers, application state, HTTP error conversion, and setup.

pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
