//! Symbol value object for underlying tickers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An underlying ticker, e.g. "GOOG" or "SPY".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new Symbol.
    ///
    /// The symbol is normalized to uppercase.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().to_uppercase())
    }

    /// Get the symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_new_normalizes_case() {
        let s = Symbol::new("goog");
        assert_eq!(s.as_str(), "GOOG");
    }

    #[test]
    fn symbol_display() {
        let s = Symbol::new("SPY");
        assert_eq!(format!("{s}"), "SPY");
    }
}
