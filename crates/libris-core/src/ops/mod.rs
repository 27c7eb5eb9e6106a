pub mod catalog_ops;
pub mod store;

pub use catalog_ops::{add_book, add_client, add_order};
pub use store::Store;
