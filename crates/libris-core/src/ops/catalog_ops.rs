use super::store::Store;
use crate::errors::{LibrisError, Result};
use crate::model::{Book, Client, Order};

/// Add a Book to the store
///
/// The record arrives as an `Option` because upstream callers hand over
/// possibly-missing input; an absent record is rejected, never silently
/// skipped. Accepted records are appended without duplicate detection.
///
/// # Arguments
/// * `store` - Mutable reference to the Store
/// * `book` - The Book to add, if present
///
/// # Errors
/// * `BookAbsent` - If `book` is `None` (the store is left untouched)
pub fn add_book(store: &mut Store, book: Option<Book>) -> Result<()> {
    let book = book.ok_or(LibrisError::BookAbsent)?;
    store.insert_book(book);
    Ok(())
}

/// Add an Order to the store
///
/// The referenced client and book are not checked for existence; an Order
/// may arrive before the records it points at.
///
/// # Arguments
/// * `store` - Mutable reference to the Store
/// * `order` - The Order to add, if present
///
/// # Errors
/// * `OrderAbsent` - If `order` is `None` (the store is left untouched)
pub fn add_order(store: &mut Store, order: Option<Order>) -> Result<()> {
    let order = order.ok_or(LibrisError::OrderAbsent)?;
    store.insert_order(order);
    Ok(())
}

/// Add a Client to the store
///
/// # Arguments
/// * `store` - Mutable reference to the Store
/// * `client` - The Client to add, if present
///
/// # Errors
/// * `ClientAbsent` - If `client` is `None` (the store is left untouched)
pub fn add_client(store: &mut Store, client: Option<Client>) -> Result<()> {
    let client = client.ok_or(LibrisError::ClientAbsent)?;
    store.insert_client(client);
    Ok(())
}
