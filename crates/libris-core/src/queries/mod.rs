//! Query module for read-only operations
//!
//! This module provides the find and sort operations over a Store. Queries
//! return freshly allocated result containers and never touch the Store's
//! own collections.
//!
//! Key principles:
//! - All queries are read-only (no mutations)
//! - Find operations are total: absent containers read as empty
//! - Sort operations are stable and surface the absent-container sentinel
//!   as `None`

pub mod find_queries;
pub mod sort_queries;

pub use find_queries::{
    find_authors, find_books_in_price_range, find_books_published_after,
    find_clients_with_average_price_no_less_than, find_most_popular_authors,
    find_orders_by_date, find_orders_grouped_by_client_id,
};
pub use sort_queries::{
    sort_books_by_price_desc, sort_books_by_published_year, sort_orders_by_client_id,
};
