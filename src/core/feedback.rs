//! Feedback symbols and vectors
//!
//! Feedback encodes how a guess compares to the hidden target, one symbol
//! per scored attribute in schema order:
//! - G = Correct (values equal)
//! - O = Partial (sets overlap but differ, set attributes only)
//! - R = Incorrect (sets disjoint, set attributes only)
//! - H = Greater (target's value exceeds the guess, ordinal only)
//! - L = Lower (target's value is below the guess, ordinal only)

use super::candidate::{Candidate, Value};
use super::schema::{AttributeKind, Schema};
use std::fmt;

/// One per-attribute feedback symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Guess value equals the target value exactly
    Correct,
    /// Guess and target sets intersect but are not equal
    Partial,
    /// Guess and target sets are disjoint
    Incorrect,
    /// Target's ordinal value exceeds the guess's
    Greater,
    /// Target's ordinal value is below the guess's
    Lower,
}

impl Feedback {
    /// The input/display letter for this symbol
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Partial => 'O',
            Self::Incorrect => 'R',
            Self::Greater => 'H',
            Self::Lower => 'L',
        }
    }

    /// Parse a single letter (case-insensitive)
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'G' => Some(Self::Correct),
            'O' => Some(Self::Partial),
            'R' => Some(Self::Incorrect),
            'H' => Some(Self::Greater),
            'L' => Some(Self::Lower),
            _ => None,
        }
    }

    /// Whether this symbol is meaningful for the given attribute kind
    #[must_use]
    pub const fn valid_for(self, kind: AttributeKind) -> bool {
        match kind {
            AttributeKind::Set => matches!(self, Self::Correct | Self::Partial | Self::Incorrect),
            AttributeKind::Ordinal => matches!(self, Self::Correct | Self::Greater | Self::Lower),
        }
    }

    /// The symbols accepted for an attribute kind, in legend order
    #[must_use]
    pub const fn accepted_for(kind: AttributeKind) -> &'static [Self] {
        match kind {
            AttributeKind::Set => &[Self::Correct, Self::Incorrect, Self::Partial],
            AttributeKind::Ordinal => &[Self::Correct, Self::Greater, Self::Lower],
        }
    }

    /// The symbol `guess` would receive for one attribute if `target` were
    /// the answer
    ///
    /// # Panics
    /// Panics if the two values are of different kinds; candidates loaded
    /// against the same schema always align.
    #[must_use]
    pub fn observe(guess: &Value, target: &Value) -> Self {
        match (guess, target) {
            (Value::Set(g), Value::Set(t)) => {
                if g == t {
                    Self::Correct
                } else if g.intersection(t).next().is_some() {
                    Self::Partial
                } else {
                    Self::Incorrect
                }
            }
            (Value::Ordinal(g), Value::Ordinal(t)) => match t.cmp(g) {
                std::cmp::Ordering::Equal => Self::Correct,
                std::cmp::Ordering::Greater => Self::Greater,
                std::cmp::Ordering::Less => Self::Lower,
            },
            _ => unreachable!("attribute value kinds must match the schema"),
        }
    }

    /// Whether a candidate's value is consistent with this symbol observed
    /// for the given guess value
    #[must_use]
    pub fn admits(self, guess: &Value, candidate: &Value) -> bool {
        Self::observe(guess, candidate) == self
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Error type for malformed feedback input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    WrongLength { expected: usize, got: usize },
    UnknownSymbol(char),
    InvalidSymbol { attribute: String, symbol: char },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, got } => {
                write!(f, "Feedback must be {expected} symbols long, got {got}")
            }
            Self::UnknownSymbol(symbol) => {
                write!(f, "Unknown feedback symbol '{symbol}'")
            }
            Self::InvalidSymbol { attribute, symbol } => {
                write!(f, "Symbol '{symbol}' is not valid for attribute '{attribute}'")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// An ordered feedback vector, one symbol per scored attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackVector(Vec<Feedback>);

impl FeedbackVector {
    /// The feedback `guess` would receive if `target` were the answer
    ///
    /// Used both for elimination scoring (hypothetical targets) and for
    /// self-play simulation (the real target).
    #[must_use]
    pub fn compute(guess: &Candidate, target: &Candidate, schema: &Schema) -> Self {
        let symbols = schema
            .scored()
            .iter()
            .enumerate()
            .map(|(i, _)| Feedback::observe(guess.value(i), target.value(i)))
            .collect();
        Self(symbols)
    }

    /// Parse user input like "GROHL" against the schema
    ///
    /// # Errors
    /// Returns `FeedbackError` if the input length differs from the number
    /// of scored attributes, a character is not one of the five symbols, or
    /// a symbol is invalid for its positional attribute's kind.
    pub fn parse(input: &str, schema: &Schema) -> Result<Self, FeedbackError> {
        let input = input.trim();
        let expected = schema.scored().len();
        let chars: Vec<char> = input.chars().collect();

        if chars.len() != expected {
            return Err(FeedbackError::WrongLength {
                expected,
                got: chars.len(),
            });
        }

        let mut symbols = Vec::with_capacity(expected);
        for (ch, attribute) in chars.into_iter().zip(schema.scored()) {
            let symbol = Feedback::from_letter(ch).ok_or(FeedbackError::UnknownSymbol(ch))?;
            if !symbol.valid_for(attribute.kind()) {
                return Err(FeedbackError::InvalidSymbol {
                    attribute: attribute.name().to_string(),
                    symbol: ch,
                });
            }
            symbols.push(symbol);
        }

        Ok(Self(symbols))
    }

    /// The symbols in schema order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Feedback] {
        &self.0
    }

    /// True when every symbol is `Correct` (the guess is the answer)
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.0.iter().all(|&s| s == Feedback::Correct)
    }

    /// Plain letter string, e.g. "GROH"
    #[must_use]
    pub fn letters(&self) -> String {
        self.0.iter().map(|s| s.letter()).collect()
    }
}

impl fmt::Display for FeedbackVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters())
    }
}
