//! Sort operations over the Store's containers
//!
//! Each sort returns a newly allocated, stably sorted copy of a container.
//! The return is `None` only when the container itself was never
//! initialized; a present-but-empty container sorts to `Some(vec![])`.

use crate::model::{Book, Order};
use crate::ops::Store;

/// All Orders ascending by client id, as a new list
///
/// Returns `None` iff the Order container was never initialized. Orders
/// with equal client ids keep their relative container order.
pub fn sort_orders_by_client_id(store: &Store) -> Option<Vec<Order>> {
    let mut sorted = store.orders.as_ref()?.clone();
    sorted.sort_by_key(|order| order.client_id);
    Some(sorted)
}

/// All Books ascending by publication date, as a new list
///
/// Despite the name, ordering uses the full publication date, not just the
/// year. Returns `None` iff the Book container was never initialized.
pub fn sort_books_by_published_year(store: &Store) -> Option<Vec<Book>> {
    let mut sorted = store.books.as_ref()?.clone();
    sorted.sort_by_key(|book| book.publication_date);
    Some(sorted)
}

/// All Books descending by price, as a new list
///
/// Returns `None` iff the Book container was never initialized. Books with
/// equal prices keep their relative container order.
pub fn sort_books_by_price_desc(store: &Store) -> Option<Vec<Book>> {
    let mut sorted = store.books.as_ref()?.clone();
    sorted.sort_by(|a, b| b.price.cmp(&a.price));
    Some(sorted)
}
