use crate::model::{Book, Client, Order};

/// In-memory store for the bookshop catalog
///
/// This is a simple sequence-based storage implementation holding the Book,
/// Client, and Order containers. Not thread-safe (no Arc/RwLock) - designed
/// for single-threaded use; concurrent callers must add their own guard.
///
/// Each container is optional: `None` means the container was never
/// initialized, which is distinct from present-but-empty. Sort operations
/// surface that distinction; everything else reads an absent container as
/// empty.
#[derive(Debug, Clone)]
pub struct Store {
    /// Book container (append-only once populated)
    pub(crate) books: Option<Vec<Book>>,
    /// Client container (append-only once populated)
    pub(crate) clients: Option<Vec<Client>>,
    /// Order container (append-only once populated)
    pub(crate) orders: Option<Vec<Order>>,
}

impl Store {
    /// Create a new Store with all three containers present and empty
    pub fn new() -> Self {
        Self {
            books: Some(Vec::new()),
            clients: Some(Vec::new()),
            orders: Some(Vec::new()),
        }
    }

    /// Create a Store whose containers were never initialized
    ///
    /// Sort operations distinguish this state from empty and return the
    /// absent sentinel (`None`) for it.
    pub fn uninitialized() -> Self {
        Self {
            books: None,
            clients: None,
            orders: None,
        }
    }

    /// Wrap three already-populated collections
    ///
    /// This is the bootstrap path for an external collaborator that builds
    /// the records elsewhere and hands them over in one step.
    pub fn from_parts(books: Vec<Book>, clients: Vec<Client>, orders: Vec<Order>) -> Self {
        Self {
            books: Some(books),
            clients: Some(clients),
            orders: Some(orders),
        }
    }

    /// Append a Book, initializing the container on first use
    ///
    /// This is an internal method used by the add operations and test
    /// helpers; it performs no validation.
    pub fn insert_book(&mut self, book: Book) {
        self.books.get_or_insert_with(Vec::new).push(book);
    }

    /// Append a Client, initializing the container on first use
    pub fn insert_client(&mut self, client: Client) {
        self.clients.get_or_insert_with(Vec::new).push(client);
    }

    /// Append an Order, initializing the container on first use
    pub fn insert_order(&mut self, order: Order) {
        self.orders.get_or_insert_with(Vec::new).push(order);
    }

    /// Borrow the Books in insertion order (absent container reads as empty)
    pub fn books(&self) -> &[Book] {
        self.books.as_deref().unwrap_or_default()
    }

    /// Borrow the Clients in insertion order (absent container reads as empty)
    pub fn clients(&self) -> &[Client] {
        self.clients.as_deref().unwrap_or_default()
    }

    /// Borrow the Orders in insertion order (absent container reads as empty)
    pub fn orders(&self) -> &[Order] {
        self.orders.as_deref().unwrap_or_default()
    }

    /// Number of Books held (absent container counts as 0)
    pub fn book_count(&self) -> usize {
        self.books().len()
    }

    /// Number of Clients held (absent container counts as 0)
    pub fn client_count(&self) -> usize {
        self.clients().len()
    }

    /// Number of Orders held (absent container counts as 0)
    pub fn order_count(&self) -> usize {
        self.orders().len()
    }

    /// Check whether the Book container was ever initialized
    pub fn books_initialized(&self) -> bool {
        self.books.is_some()
    }

    /// Check whether the Client container was ever initialized
    pub fn clients_initialized(&self) -> bool {
        self.clients.is_some()
    }

    /// Check whether the Order container was ever initialized
    pub fn orders_initialized(&self) -> bool {
        self.orders.is_some()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
