//! Wire identifier newtype.
//!
//! A [`WireId`] is the textual name binding a wire to its gate definition.
//! Names are compared case-sensitively by exact text equality. The observed
//! rule grammar only produces one- and two-letter names, but nothing in the
//! data model depends on that, so no length limit is enforced here.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The name of a wire. Keys the [`Circuit`](crate::Circuit) registry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WireId(String);

impl WireId {
    /// Creates a wire identifier from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        WireId(name.into())
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WireId {
    fn from(name: &str) -> Self {
        WireId(name.to_owned())
    }
}

impl From<String> for WireId {
    fn from(name: String) -> Self {
        WireId(name)
    }
}

// Allows map lookups keyed by WireId to accept plain &str.
impl Borrow<str> for WireId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
