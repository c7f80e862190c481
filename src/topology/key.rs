//! Canonical design keys
//!
//! The prediction and metrics tables are indexed by the Python tuple text of
//! the hidden layer sizes, e.g. `(4,)` or `(4, 8, 4)`.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Coerce a layer size up to the next even number
///
/// Only even sizes were evaluated offline, so an odd selection maps onto
/// the next larger even design.
#[inline]
pub fn coerce_even(size: usize) -> usize {
    if size % 2 == 0 {
        size
    } else {
        size + 1
    }
}

/// Lookup key of an evaluated network design
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignKey(String);

impl DesignKey {
    /// Key for the given hidden layer sizes, after even coercion
    pub fn for_layers(layer_sizes: &[usize]) -> Self {
        let sizes: Vec<String> = layer_sizes
            .iter()
            .map(|&size| coerce_even(size).to_string())
            .collect();

        if sizes.len() == 1 {
            Self(format!("({},)", sizes[0]))
        } else {
            Self(format!("({})", sizes.join(", ")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DesignKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for DesignKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DesignKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DesignKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_even() {
        assert_eq!(coerce_even(1), 2);
        assert_eq!(coerce_even(2), 2);
        assert_eq!(coerce_even(9), 10);
        assert_eq!(coerce_even(10), 10);
    }

    #[test]
    fn test_tuple_formatting() {
        assert_eq!(DesignKey::for_layers(&[4]).as_str(), "(4,)");
        assert_eq!(DesignKey::for_layers(&[4, 8]).as_str(), "(4, 8)");
        assert_eq!(DesignKey::for_layers(&[3, 7, 4]).as_str(), "(4, 8, 4)");
    }

    #[test]
    fn test_serde_transparent() {
        let key = DesignKey::from("(2, 6)");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"(2, 6)\"");
    }
}
