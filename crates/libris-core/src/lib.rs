//! Libris Core - In-memory bookshop catalog query kernel
//!
//! This crate provides the data structures and operations for querying a
//! bookshop catalog held in memory, including:
//! - Book, Client, and Order models
//! - A Store over the three record containers with validated add operations
//! - Total find queries (authors, groupings, price and date filters)
//! - Stable sort views surfacing the absent-container sentinel
//! - A structured logging facility for boundary callers
//!
//! The kernel performs no I/O: callers populate the Store, then query it.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;

// Re-export commonly used types
pub use errors::{LibrisError, Result};
pub use model::{Book, Client, Order};
pub use ops::Store;
