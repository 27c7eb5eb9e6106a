use chrono::{DateTime, Utc};
use libris_core_types::{BookId, ClientId, OrderId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order - a purchase of some quantity of one title by one client
///
/// `client_id` and `book_id` are unchecked references: an Order may point at
/// a client or book the Store has never seen. Queries tolerate such dangling
/// references and simply yield empty or zero results for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier, supplied by the external collaborator
    pub id: OrderId,

    /// Client that placed the order (referential integrity not enforced)
    pub client_id: ClientId,

    /// Book that was ordered (referential integrity not enforced)
    pub book_id: BookId,

    /// Number of copies ordered (positive)
    pub quantity: u32,

    /// Monetary total of the order, independent of the book's list price
    pub price: Decimal,

    /// Instant the order was placed
    pub order_date: DateTime<Utc>,
}

impl Order {
    /// Create a new Order record
    pub fn new(
        id: OrderId,
        client_id: ClientId,
        book_id: BookId,
        quantity: u32,
        price: Decimal,
        order_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            client_id,
            book_id,
            quantity,
            price,
            order_date,
        }
    }

    /// Check whether this order was placed by the given client
    pub fn placed_by(&self, client_id: ClientId) -> bool {
        self.client_id == client_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_order() {
        let placed = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let order = Order::new(100, 7, 3, 2, Decimal::new(2599, 2), placed);

        assert_eq!(order.id, 100);
        assert_eq!(order.client_id, 7);
        assert_eq!(order.book_id, 3);
        assert_eq!(order.quantity, 2);
        assert_eq!(order.price, Decimal::new(2599, 2));
        assert_eq!(order.order_date, placed);
    }

    #[test]
    fn test_order_wire_shape() {
        let placed = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let order = Order::new(100, 7, 3, 2, Decimal::from(10), placed);

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["client_id"], 7);
        assert_eq!(value["quantity"], 2);
        assert_eq!(value["order_date"], "2024-03-01T09:30:00Z");
    }

    #[test]
    fn test_placed_by() {
        let placed = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let order = Order::new(100, 7, 3, 2, Decimal::from(10), placed);

        assert!(order.placed_by(7));
        assert!(!order.placed_by(8));
    }
}
