//! Attribute schemas for guessing games
//!
//! A schema describes the ordered attribute list of one game: exactly one
//! identity column (the guessable label) plus any number of scored columns,
//! each either a categorical set or an ordered scalar.

use std::fmt;

/// Kind of a scored (non-identity) attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Unordered categorical value, possibly multi-valued (e.g. "Fire;Flying")
    Set,
    /// Totally ordered integer scalar (e.g. a release year)
    Ordinal,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set => write!(f, "set"),
            Self::Ordinal => write!(f, "ordinal"),
        }
    }
}

/// A scored attribute: name plus kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    kind: AttributeKind,
}

impl Attribute {
    pub fn new(name: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> AttributeKind {
        self.kind
    }
}

/// Role of a raw data column, before schema validation
///
/// Mirrors how game definitions tag their columns; `Identity` becomes the
/// schema's label column, the other two become scored attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    /// The guessable label itself, exactly one per schema
    Identity,
    /// Unordered categorical attribute
    Set,
    /// Ordered integer attribute
    Ordinal,
}

/// Error type for invalid schemas
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    MissingIdentity,
    MultipleIdentity { first: String, second: String },
    DuplicateAttribute(String),
    NoScoredAttributes,
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingIdentity => write!(f, "Schema must have exactly one identity column"),
            Self::MultipleIdentity { first, second } => {
                write!(
                    f,
                    "Schema has more than one identity column: '{first}' and '{second}'"
                )
            }
            Self::DuplicateAttribute(name) => {
                write!(f, "Duplicate attribute name: '{name}'")
            }
            Self::NoScoredAttributes => {
                write!(f, "Schema needs at least one scored attribute")
            }
        }
    }
}

impl std::error::Error for SchemaError {}

/// A validated game schema
///
/// Construction checks the identity invariant once; afterwards the solver
/// never has to re-validate attribute kinds per round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    identity: String,
    scored: Vec<Attribute>,
}

impl Schema {
    /// Build a schema from an ordered column list
    ///
    /// # Errors
    /// Returns `SchemaError` if:
    /// - No column or more than one column is tagged `Identity`
    /// - Two columns share a name
    /// - There is no scored column at all
    ///
    /// # Examples
    /// ```
    /// use alldle_solver::core::{ColumnRole, Schema};
    ///
    /// let schema = Schema::new(vec![
    ///     ("Champion".to_string(), ColumnRole::Identity),
    ///     ("Region(s)".to_string(), ColumnRole::Set),
    ///     ("Release year".to_string(), ColumnRole::Ordinal),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(schema.identity(), "Champion");
    /// assert_eq!(schema.scored().len(), 2);
    /// ```
    pub fn new(columns: Vec<(String, ColumnRole)>) -> Result<Self, SchemaError> {
        let mut identity: Option<String> = None;
        let mut scored = Vec::new();
        let mut seen: Vec<&str> = Vec::new();

        for (name, role) in &columns {
            if seen.iter().any(|s| *s == name) {
                return Err(SchemaError::DuplicateAttribute(name.clone()));
            }
            seen.push(name);

            match role {
                ColumnRole::Identity => {
                    if let Some(first) = &identity {
                        return Err(SchemaError::MultipleIdentity {
                            first: first.clone(),
                            second: name.clone(),
                        });
                    }
                    identity = Some(name.clone());
                }
                ColumnRole::Set => scored.push(Attribute::new(name, AttributeKind::Set)),
                ColumnRole::Ordinal => scored.push(Attribute::new(name, AttributeKind::Ordinal)),
            }
        }

        let identity = identity.ok_or(SchemaError::MissingIdentity)?;

        if scored.is_empty() {
            return Err(SchemaError::NoScoredAttributes);
        }

        Ok(Self { identity, scored })
    }

    /// Name of the identity column (the guessable label)
    #[inline]
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Scored attributes in schema order
    ///
    /// Feedback vectors and candidate values are both indexed by this order.
    #[inline]
    #[must_use]
    pub fn scored(&self) -> &[Attribute] {
        &self.scored
    }
}
