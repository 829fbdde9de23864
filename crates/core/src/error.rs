use std::collections::BTreeMap;

use crate::types::DbId;

/// Validation messages collected per field.
///
/// A single write can violate the domain of several fields at once; all
/// violations are gathered here and reported together rather than failing
/// on the first bad field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<&'static str, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation message against a field.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.entries.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(field, messages)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        self.entries.iter().map(|(f, msgs)| (*f, msgs.as_slice()))
    }

    /// Consume into a `Validation` error. Callers must check `is_empty`
    /// first; an empty set is not a valid error.
    pub fn into_error(self) -> CoreError {
        CoreError::Validation(self)
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.entries {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{field}: {}", messages.join(", "))?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
