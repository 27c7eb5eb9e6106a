use chrono::NaiveDate;
use libris_core_types::BookId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Book - a catalog record for a single title
///
/// Books are immutable once added to the Store. Identifiers are expected to
/// be unique but the kernel performs no deduplication; duplicate ids are
/// carried as-is and each entry participates in queries independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, supplied by the external collaborator
    pub id: BookId,

    /// Author name as it appears in the catalog
    pub author: String,

    /// Title of the book
    pub title: String,

    /// List price (non-negative)
    pub price: Decimal,

    /// Calendar date the book was published
    pub publication_date: NaiveDate,
}

impl Book {
    /// Create a new Book record
    pub fn new(
        id: BookId,
        author: String,
        title: String,
        price: Decimal,
        publication_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            author,
            title,
            price,
            publication_date,
        }
    }

    /// Check whether this book was published strictly after `date`
    pub fn published_after(&self, date: NaiveDate) -> bool {
        self.publication_date > date
    }

    /// Check whether this book's price lies within `min..=max` (inclusive)
    pub fn price_within(&self, min: Decimal, max: Decimal) -> bool {
        min <= self.price && self.price <= max
    }
}
