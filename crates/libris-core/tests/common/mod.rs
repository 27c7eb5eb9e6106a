use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use libris_core::{Book, Client, Order, Store};
use rust_decimal::Decimal;

/// Create a new empty Store for testing
#[allow(dead_code)]
pub fn new_store() -> Store {
    Store::new()
}

/// Create a test Book with the given id, author, and whole-number price
///
/// Publication date defaults to 2020-01-01; use `test_book_published` when
/// the date matters.
#[allow(dead_code)]
pub fn test_book(id: i64, author: &str, price: i64) -> Book {
    Book::new(
        id,
        author.to_string(),
        format!("Title {id}"),
        Decimal::from(price),
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
    )
}

/// Create a test Book published on the given date
#[allow(dead_code)]
pub fn test_book_published(id: i64, year: i32, month: u32, day: u32) -> Book {
    Book::new(
        id,
        "Author".to_string(),
        format!("Title {id}"),
        Decimal::from(10),
        NaiveDate::from_ymd_opt(year, month, day).unwrap(),
    )
}

/// Create a test Client with the given id and name
#[allow(dead_code)]
pub fn test_client(id: i64, name: &str) -> Client {
    Client::new(
        id,
        name.to_string(),
        format!("{}@example.com", name.to_lowercase()),
    )
}

/// Create a test Order for the given client and book
///
/// Placement instant defaults to 2024-06-01 12:00:00 UTC; use `test_instant`
/// plus `Order::new` directly when the timestamp matters.
#[allow(dead_code)]
pub fn test_order(id: i64, client_id: i64, book_id: i64, quantity: u32, price: i64) -> Order {
    Order::new(
        id,
        client_id,
        book_id,
        quantity,
        Decimal::from(price),
        test_instant(2024, 6, 1, 12, 0, 0),
    )
}

/// Build an order placement instant
#[allow(dead_code)]
pub fn test_instant(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec).unwrap()
}

/// Populate a small well-known catalog:
///
/// - Books: 1 and 3 by "Alice" (prices 10 and 20), 2 by "Bob" (price 15)
/// - Clients: 1 "Ada", 2 "Bert"
/// - Orders: 100 (Ada, book 1, qty 2) and 102 (Ada, book 3, qty 1) placed at
///   the same instant, 101 (Bert, book 2, qty 1) placed later
///
/// Alice's books total 3 ordered copies, Bob's total 1.
#[allow(dead_code)]
pub fn sample_catalog() -> Store {
    let mut store = Store::new();

    store.insert_book(Book::new(
        1,
        "Alice".to_string(),
        "Title 1".to_string(),
        Decimal::from(10),
        NaiveDate::from_ymd_opt(2019, 3, 1).unwrap(),
    ));
    store.insert_book(Book::new(
        2,
        "Bob".to_string(),
        "Title 2".to_string(),
        Decimal::from(15),
        NaiveDate::from_ymd_opt(2020, 7, 15).unwrap(),
    ));
    store.insert_book(Book::new(
        3,
        "Alice".to_string(),
        "Title 3".to_string(),
        Decimal::from(20),
        NaiveDate::from_ymd_opt(2021, 11, 30).unwrap(),
    ));

    store.insert_client(test_client(1, "Ada"));
    store.insert_client(test_client(2, "Bert"));

    let morning = test_instant(2024, 1, 10, 9, 0, 0);
    store.insert_order(Order::new(100, 1, 1, 2, Decimal::from(20), morning));
    store.insert_order(Order::new(
        101,
        2,
        2,
        1,
        Decimal::from(15),
        test_instant(2024, 2, 20, 18, 30, 0),
    ));
    store.insert_order(Order::new(102, 1, 3, 1, Decimal::from(20), morning));

    store
}
