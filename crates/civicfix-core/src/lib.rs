//! CivicFix Core Library
//!
//! This crate provides the complaint domain model, error types, and
//! configuration shared across all CivicFix components.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{Complaint, NewComplaint, StatusUpdate};
