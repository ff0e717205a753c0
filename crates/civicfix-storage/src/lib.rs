//! Upload storage for CivicFix
//!
//! Uploaded complaint images are stored behind the [`Storage`] trait. The only
//! backend is the local filesystem ([`LocalStorage`]), which writes each file
//! under a timestamp-prefixed name inside a single uploads directory and
//! serves it back by relative public path.

mod local;
mod traits;

pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};
