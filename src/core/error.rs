//! The aggregate validation failure.

use thiserror::Error;

use super::violation::{Violation, ViolationSet};

/// Raised once, at the top level, when a validation run finishes with a
/// non-empty violation set. Individual rule failures are never raised
/// mid-traversal; they accumulate and arrive here together.
#[derive(Debug, Clone, Error)]
#[error("validation failed with {} violation(s)", .violations.len())]
pub struct ValidationFailed {
    violations: ViolationSet,
}

impl ValidationFailed {
    pub(crate) fn new(violations: ViolationSet) -> Self {
        Self { violations }
    }

    /// The full violation set, in recording order.
    #[must_use]
    pub fn violations(&self) -> &ViolationSet {
        &self.violations
    }

    #[must_use]
    pub fn into_violations(self) -> ViolationSet {
        self.violations
    }

    /// Looks up the violation recorded for a property path, if any.
    ///
    /// At most one exists per path within a single run.
    #[must_use]
    pub fn violation_for(&self, path: &str) -> Option<&Violation> {
        self.violations.iter().find(|v| v.property_path == path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}
