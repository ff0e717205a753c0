//! Complaint persistence for CivicFix
//!
//! A single-table SQLite store behind [`ComplaintRepository`]. Schema creation
//! is idempotent and runs at every startup before requests are served.

mod complaint;

pub use complaint::ComplaintRepository;
