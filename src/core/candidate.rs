//! Candidate entities and their attribute values
//!
//! A candidate is one row of a game's dataset: its identity (the guessable
//! label) plus one value per scored attribute, in schema order. Candidates
//! are immutable once loaded; the pool shrinks by being replaced with a
//! filtered copy, never by in-place mutation.

use std::collections::BTreeSet;
use std::fmt;

/// Value of one scored attribute
///
/// `Set` uses a `BTreeSet` so iteration and display order are deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Set(BTreeSet<String>),
    Ordinal(i64),
}

impl Value {
    /// Build a set value from string tokens
    pub fn set<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Set(tokens.into_iter().map(Into::into).collect())
    }

    /// Build an ordinal value
    #[must_use]
    pub const fn ordinal(value: i64) -> Self {
        Self::Ordinal(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set(tokens) => {
                let joined: Vec<&str> = tokens.iter().map(String::as_str).collect();
                write!(f, "{}", joined.join(";"))
            }
            Self::Ordinal(value) => write!(f, "{value}"),
        }
    }
}

/// One entity of the guessable dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    identity: String,
    values: Vec<Value>,
}

impl Candidate {
    /// Create a candidate with values aligned to `Schema::scored()` order
    pub fn new(identity: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            identity: identity.into(),
            values,
        }
    }

    /// The guessable label
    #[inline]
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Value of the scored attribute at the given schema index
    ///
    /// # Panics
    /// Panics if `index` is out of range for the schema the candidate was
    /// loaded against.
    #[inline]
    #[must_use]
    pub fn value(&self, index: usize) -> &Value {
        &self.values[index]
    }

    /// All scored values in schema order
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identity)
    }
}

/// Look up a pool member by identity, ignoring case
///
/// Returns the first match, or `None` if no candidate carries that label.
#[must_use]
pub fn find_by_identity<'a>(pool: &'a [Candidate], identity: &str) -> Option<&'a Candidate> {
    let wanted = identity.trim().to_lowercase();
    pool.iter().find(|c| c.identity().to_lowercase() == wanted)
}
