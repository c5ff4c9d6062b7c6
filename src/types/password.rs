use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A stored password record as returned by the backend.
///
/// The backend owns the record; the client never edits fields in place and
/// only replaces whole records from backend responses. Besides the cleartext
/// `password` everything else (uuid, name, login, url, ...) is carried as an
/// opaque map so the client stays agnostic to backend schema changes. The
/// cleartext is wiped from memory when the record is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Password {
    /// Cleartext password. Empty when the backend sent none.
    #[serde(default)]
    pub password: String,
    /// Remaining record fields, untouched and round-tripped as-is.
    #[serde(flatten)]
    #[zeroize(skip)]
    pub meta: Map<String, Value>,
}

impl Password {
    /// Builds a record holding only a cleartext value.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            password: secret.into(),
            meta: Map::new(),
        }
    }

    /// Metadata field lookup, e.g. `get("uuid")` or `get("name")`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.meta.get(key)
    }
}
