//! Constraint descriptors.
//!
//! A [`Constraint`] identifies the rule a property broke plus the
//! parameters the rule was declared with. It is pure data: the predicate
//! that decides pass/fail lives with the rule method that records the
//! constraint, so this enum stays a closed, exhaustively matchable catalog
//! usable by both the traversal engine and the message layer.

use std::fmt;

use serde::Serialize;
use smallvec::{SmallVec, smallvec};

use super::value::{ToValue, Value};

/// Ordered `(placeholder, value)` parameters of a constraint.
///
/// Almost every constraint carries zero, one, or two parameters.
pub type ConstraintParams = SmallVec<[(&'static str, Value); 2]>;

// ============================================================================
// CONSTRAINT
// ============================================================================

/// Descriptor of a violated rule: tag plus semantic parameters.
///
/// Two constraints are equal iff tag and parameters match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "constraint")]
pub enum Constraint {
    Null,
    NotNull,
    Equals { expected: Value },
    NotEquals { expected: Value },
    EqualsIgnoringCase { expected: Value },
    NotEqualsIgnoringCase { expected: Value },
    In { values: Vec<Value> },
    NotIn { values: Vec<Value> },
    Less { bound: Value },
    LessOrEqual { bound: Value },
    Greater { bound: Value },
    GreaterOrEqual { bound: Value },
    Between { start: Value, end: Value },
    NotBetween { start: Value, end: Value },
    Empty,
    NotEmpty,
    Blank,
    NotBlank,
    Contains { part: Value },
    NotContain { part: Value },
    ContainsIgnoringCase { part: Value },
    ContainsElement { element: Value },
    NotContainElement { element: Value },
    StartsWith { prefix: Value },
    EndsWith { suffix: Value },
    Matches { pattern: String },
    Size { min: usize, max: usize },
    Even,
    Odd,
    IntegerDigits { min: usize, max: usize },
}

impl Constraint {
    /// The tag used for message-catalog lookup.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::NotNull => "NotNull",
            Self::Equals { .. } => "Equals",
            Self::NotEquals { .. } => "NotEquals",
            Self::EqualsIgnoringCase { .. } => "EqualsIgnoringCase",
            Self::NotEqualsIgnoringCase { .. } => "NotEqualsIgnoringCase",
            Self::In { .. } => "In",
            Self::NotIn { .. } => "NotIn",
            Self::Less { .. } => "Less",
            Self::LessOrEqual { .. } => "LessOrEqual",
            Self::Greater { .. } => "Greater",
            Self::GreaterOrEqual { .. } => "GreaterOrEqual",
            Self::Between { .. } => "Between",
            Self::NotBetween { .. } => "NotBetween",
            Self::Empty => "Empty",
            Self::NotEmpty => "NotEmpty",
            Self::Blank => "Blank",
            Self::NotBlank => "NotBlank",
            Self::Contains { .. } => "Contains",
            Self::NotContain { .. } => "NotContain",
            Self::ContainsIgnoringCase { .. } => "ContainsIgnoringCase",
            Self::ContainsElement { .. } => "ContainsElement",
            Self::NotContainElement { .. } => "NotContainElement",
            Self::StartsWith { .. } => "StartsWith",
            Self::EndsWith { .. } => "EndsWith",
            Self::Matches { .. } => "Matches",
            Self::Size { .. } => "Size",
            Self::Even => "Even",
            Self::Odd => "Odd",
            Self::IntegerDigits { .. } => "IntegerDigits",
        }
    }

    /// Parameters in declaration order, keyed by their placeholder names.
    #[must_use]
    pub fn params(&self) -> ConstraintParams {
        match self {
            Self::Null
            | Self::NotNull
            | Self::Empty
            | Self::NotEmpty
            | Self::Blank
            | Self::NotBlank
            | Self::Even
            | Self::Odd => SmallVec::new(),
            Self::Equals { expected }
            | Self::NotEquals { expected }
            | Self::EqualsIgnoringCase { expected }
            | Self::NotEqualsIgnoringCase { expected } => {
                smallvec![("expected", expected.clone())]
            }
            Self::In { values } | Self::NotIn { values } => {
                smallvec![("values", Value::List(values.clone()))]
            }
            Self::Less { bound }
            | Self::LessOrEqual { bound }
            | Self::Greater { bound }
            | Self::GreaterOrEqual { bound } => smallvec![("bound", bound.clone())],
            Self::Between { start, end } | Self::NotBetween { start, end } => {
                smallvec![("start", start.clone()), ("end", end.clone())]
            }
            Self::Contains { part }
            | Self::NotContain { part }
            | Self::ContainsIgnoringCase { part } => smallvec![("part", part.clone())],
            Self::ContainsElement { element } | Self::NotContainElement { element } => {
                smallvec![("element", element.clone())]
            }
            Self::StartsWith { prefix } => smallvec![("prefix", prefix.clone())],
            Self::EndsWith { suffix } => smallvec![("suffix", suffix.clone())],
            Self::Matches { pattern } => {
                smallvec![("pattern", Value::Str(pattern.clone()))]
            }
            Self::Size { min, max } => {
                smallvec![("min", min.to_value()), ("max", max.to_value())]
            }
            Self::IntegerDigits { min, max } => {
                smallvec![("min", min.to_value()), ("max", max.to_value())]
            }
        }
    }
}

/// Tag plus raw parameters, e.g. `Between(start: 0, end: 10)`. This is the
/// untemplated form the message resolver degrades to when a catalog has no
/// entry for the tag.
impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        let params = self.params();
        if params.is_empty() {
            return Ok(());
        }
        f.write_str("(")?;
        for (i, (name, value)) in params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str(")")
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_tag_plus_params() {
        let a = Constraint::Between {
            start: Value::Int(0),
            end: Value::Int(10),
        };
        let b = Constraint::Between {
            start: Value::Int(0),
            end: Value::Int(10),
        };
        let c = Constraint::Between {
            start: Value::Int(0),
            end: Value::Int(11),
        };
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Constraint::NotNull);
    }

    #[test]
    fn params_are_ordered() {
        let c = Constraint::Between {
            start: Value::Int(0),
            end: Value::Int(10),
        };
        let params = c.params();
        assert_eq!(params[0], ("start", Value::Int(0)));
        assert_eq!(params[1], ("end", Value::Int(10)));
    }

    #[test]
    fn in_params_collapse_to_one_list() {
        let c = Constraint::In {
            values: vec![Value::Int(1), Value::Int(2)],
        };
        let params = c.params();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].0, "values");
    }

    #[test]
    fn display_includes_raw_params() {
        let c = Constraint::Size { min: 1, max: 3 };
        assert_eq!(c.to_string(), "Size(min: 1, max: 3)");
        assert_eq!(Constraint::NotNull.to_string(), "NotNull");
    }

    #[test]
    fn name_matches_variant() {
        assert_eq!(Constraint::Even.name(), "Even");
        assert_eq!(
            Constraint::Matches {
                pattern: "^a".into()
            }
            .name(),
            "Matches"
        );
    }
}
