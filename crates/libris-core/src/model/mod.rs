pub mod book;
pub mod client;
pub mod order;

pub use book::Book;
pub use client::Client;
pub use order::Order;
