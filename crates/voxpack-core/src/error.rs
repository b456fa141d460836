use std::fmt;

use thiserror::Error;

/// One vertex field whose value does not fit its bit width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOverflow {
    pub field: &'static str,
    pub value: u32,
    pub max: u32,
}

impl fmt::Display for FieldOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} (max {})", self.field, self.value, self.max)
    }
}

/// Raised by strict encoding when one or more fields exceed their width.
/// Lists every offending field, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("vertex fields out of range: {}", join_overflows(.fields))]
pub struct RangeError {
    pub fields: Vec<FieldOverflow>,
}

impl RangeError {
    /// True if `field` is among the offending fields.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }
}

fn join_overflows(fields: &[FieldOverflow]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors produced by the vertex codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("normal index {0} is outside the 6-entry face table")]
    InvalidNormalIndex(u8),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("mesh holds {0} vertices; another quad would overflow u32 indices")]
    MeshFull(usize),
}
