//! Core engine: values, constraints, violations, and the traversal
//! context.

pub mod constraint;
pub mod context;
pub mod error;
pub mod value;
pub mod violation;

pub use constraint::{Constraint, ConstraintParams};
pub use context::{Context, validate};
pub use error::ValidationFailed;
pub use value::{ToValue, Value, ValueKind};
pub use violation::{Violation, ViolationSet};
