//! Core domain types: schemas, candidates and feedback

pub mod candidate;
pub mod feedback;
pub mod schema;

pub use candidate::{Candidate, Value, find_by_identity};
pub use feedback::{Feedback, FeedbackError, FeedbackVector};
pub use schema::{Attribute, AttributeKind, ColumnRole, Schema, SchemaError};
