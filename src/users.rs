//! Fixed user directory served by the user service.

use serde::{Deserialize, Serialize};

/// A single user entry returned by `GET /users`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserRecord {
    /// Numeric user identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
}

impl UserRecord {
    /// Create a new user record.
    ///
    /// # Parameters
    ///
    /// - `id` - Numeric identifier
    /// - `name` - Display name
    /// - `email` - Contact email address
    ///
    /// # Returns
    ///
    /// Returns a new `UserRecord` instance.
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { id, name: name.into(), email: email.into() }
    }
}

/// Ordered, read-only collection of user records.
///
/// The directory is built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDirectory {
    records: Vec<UserRecord>,
}

impl UserDirectory {
    /// The three canned users every user service instance returns.
    ///
    /// # Returns
    ///
    /// Returns a directory holding John Doe, Jane Smith and Bob Johnson, in that order.
    pub fn builtin() -> Self {
        Self {
            records: vec![
                UserRecord::new(1, "John Doe", "john@example.com"),
                UserRecord::new(2, "Jane Smith", "jane@example.com"),
                UserRecord::new(3, "Bob Johnson", "bob@example.com"),
            ],
        }
    }

    /// Borrow the records in their fixed order.
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// Number of records in the directory.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}
