use libris_core_types::ClientId;
use serde::{Deserialize, Serialize};

/// Client - an account that places orders
///
/// The kernel exercises a client only through its identity: grouped-order
/// keys derive from `id`, and set-valued query results rely on equality and
/// hashing. The contact fields travel with the record but carry no query
/// semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier, supplied by the external collaborator
    pub id: ClientId,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,
}

impl Client {
    /// Create a new Client record
    pub fn new(id: ClientId, name: String, email: String) -> Self {
        Self { id, name, email }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_client() {
        let client = Client::new(42, "Ada".to_string(), "ada@example.com".to_string());

        assert_eq!(client.id, 42);
        assert_eq!(client.name, "Ada");
        assert_eq!(client.email, "ada@example.com");
    }

    #[test]
    fn test_client_set_membership() {
        let a = Client::new(1, "Ada".to_string(), "ada@example.com".to_string());
        let b = Client::new(2, "Grace".to_string(), "grace@example.com".to_string());

        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(b);
        // Re-inserting an equal record does not grow the set
        set.insert(a.clone());

        assert_eq!(set.len(), 2);
        assert!(set.contains(&a));
    }
}
