//! Find query operations
//!
//! Read-only lookups over the Store's containers. Every function here is
//! total: an absent container reads as empty, dangling references yield
//! empty results, and nothing can fail.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};
use libris_core_types::client_key;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::model::{Book, Client, Order};
use crate::ops::Store;

/// Collect the distinct author names across all Books
pub fn find_authors(store: &Store) -> HashSet<String> {
    store
        .books()
        .iter()
        .map(|book| book.author.clone())
        .collect()
}

/// Group the Store's Orders by the client that placed them
///
/// The map holds one entry per Client in the Client container, keyed by the
/// canonical textual form of the client id. A client with no matching orders
/// maps to an empty list. Orders whose `client_id` matches no Client are
/// excluded from every group. Within a group, orders keep their container
/// order.
pub fn find_orders_grouped_by_client_id(store: &Store) -> BTreeMap<String, Vec<Order>> {
    let mut groups: BTreeMap<String, Vec<Order>> = BTreeMap::new();

    for client in store.clients() {
        let client_orders: Vec<Order> = store
            .orders()
            .iter()
            .filter(|order| order.placed_by(client.id))
            .cloned()
            .collect();

        groups.insert(client_key(client.id), client_orders);
    }

    groups
}

/// Author names ordered by total copies of their books ordered, descending
///
/// Totals sum `Order::quantity` over the orders referencing each Book,
/// accumulated per Book entry into the shared author name in first-encounter
/// order. Authors whose books were never ordered still appear (total 0).
/// The sort is stable, so authors with equal totals keep first-encounter
/// order; no stronger tie order is promised.
pub fn find_most_popular_authors(store: &Store) -> Vec<String> {
    let mut totals: Vec<(String, u64)> = Vec::new();

    for book in store.books() {
        let copies: u64 = store
            .orders()
            .iter()
            .filter(|order| order.book_id == book.id)
            .map(|order| u64::from(order.quantity))
            .sum();

        if let Some(entry) = totals.iter_mut().find(|(author, _)| *author == book.author) {
            entry.1 += copies;
        } else {
            totals.push((book.author.clone(), copies));
        }
    }

    // Stable sort by total descending
    totals.sort_by(|a, b| b.1.cmp(&a.1));

    totals.into_iter().map(|(author, _)| author).collect()
}

/// Books published strictly after the given date, in container order
pub fn find_books_published_after(store: &Store, date: NaiveDate) -> Vec<Book> {
    store
        .books()
        .iter()
        .filter(|book| book.published_after(date))
        .cloned()
        .collect()
}

/// Books priced within `[min, max]` (both bounds inclusive), in container order
pub fn find_books_in_price_range(store: &Store, min: Decimal, max: Decimal) -> Vec<Book> {
    store
        .books()
        .iter()
        .filter(|book| book.price_within(min, max))
        .cloned()
        .collect()
}

/// Clients from the given slice whose average order price exceeds `average`
///
/// The average is computed from the Store's Orders: each matching order's
/// price is truncated to a whole number, summed, then integer-divided by the
/// number of matching orders. A client with no matching orders averages 0.
///
/// Note: despite the name, the threshold itself is excluded. The comparison
/// is strictly greater than `average`.
pub fn find_clients_with_average_price_no_less_than(
    store: &Store,
    clients: &[Client],
    average: i64,
) -> HashSet<Client> {
    let mut selected = HashSet::new();

    for client in clients {
        let mut count: i64 = 0;
        let mut amount: i64 = 0;

        for order in store.orders() {
            if order.placed_by(client.id) {
                count += 1;
                amount += order.price.trunc().to_i64().unwrap_or_default();
            }
        }

        let average_order_amount = if count > 0 { amount / count } else { 0 };
        if average_order_amount > average {
            selected.insert(client.clone());
        }
    }

    selected
}

/// Orders placed at exactly the given instant
///
/// Equality is on the full timestamp, not the calendar day.
pub fn find_orders_by_date(store: &Store, date_time: DateTime<Utc>) -> HashSet<Order> {
    store
        .orders()
        .iter()
        .filter(|order| order.order_date == date_time)
        .cloned()
        .collect()
}
