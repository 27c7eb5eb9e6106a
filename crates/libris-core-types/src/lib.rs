//! Core types shared across Libris facilities
//!
//! This crate provides foundational vocabulary used by the catalog kernel
//! and its logging facility:
//!
//! - **Identifier types**: BookId, ClientId, OrderId and the canonical
//!   textual client key used by grouped-order mappings
//! - **Schema constants**: Canonical field keys and event names for
//!   structured logging

pub mod ids;
pub mod schema;

pub use ids::{client_key, BookId, ClientId, OrderId};
