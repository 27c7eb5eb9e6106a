//! Identifier vocabulary for catalog records
//!
//! Identifiers are caller-supplied integers; the kernel never generates
//! them and never enforces referential integrity between them.

/// Identifier of a Book record
pub type BookId = i64;

/// Identifier of a Client record
pub type ClientId = i64;

/// Identifier of an Order record
pub type OrderId = i64;

/// Canonical textual form of a client id
///
/// Grouped-order mappings key their entries by this form rather than by the
/// raw integer, so every consumer renders the key identically.
pub fn client_key(id: ClientId) -> String {
    id.to_string()
}
