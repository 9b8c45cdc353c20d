//! Newtype IDs for type-safe identifiers.
//!
//! Catalog sources identify products with either integers or strings; both
//! normalise to the same [`ProductId`], so `1` and `"1"` name one product.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// A product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the ID is unusable (empty or whitespace only).
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for ProductId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Unsigned(u64),
            Signed(i64),
            Float(f64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Unsigned(n) => ProductId(n.to_string()),
            RawId::Signed(n) => ProductId(n.to_string()),
            // `1.0` names the same product as `1`.
            RawId::Float(f) if f.fract() == 0.0 && (0.0..=u64::MAX as f64).contains(&f) => {
                ProductId((f as u64).to_string())
            }
            RawId::Float(f) => {
                return Err(de::Error::custom(format!(
                    "product id must be a whole number, got {f}"
                )))
            }
            RawId::Text(s) => ProductId(s),
        })
    }
}

/// Handle returned when registering a cart observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub(crate) u64);

impl SubscriptionId {
    /// Numeric value of the handle.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}
