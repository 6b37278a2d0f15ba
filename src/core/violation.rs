//! Violation records.

use std::fmt;

use indexmap::IndexSet;
use serde::Serialize;

use super::constraint::Constraint;
use super::value::Value;

/// The violations of one validation run: insertion-ordered, deduplicated.
///
/// Iteration order is the order violations were recorded, but carries no
/// semantic guarantee beyond determinism.
pub type ViolationSet = IndexSet<Violation>;

/// A record that a constraint failed for a property.
///
/// `value` is `None` when the property was absent (only presence rules
/// produce such violations).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Violation {
    /// Dotted/bracketed path from the root target, e.g. `"address.city"`
    /// or `"phones[2].number"`.
    pub property_path: String,
    pub value: Option<Value>,
    pub constraint: Constraint,
}

impl Violation {
    #[must_use]
    pub fn new(
        property_path: impl Into<String>,
        value: Option<Value>,
        constraint: Constraint,
    ) -> Self {
        Self {
            property_path: property_path.into(),
            value,
            constraint,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property_path, self.constraint)
    }
}
