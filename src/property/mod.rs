//! The rule-declaration surface.
//!
//! [`Context::property`] yields a [`Property`] handle bound to one named
//! property of the target; every rule method consumes and returns the
//! handle so rules chain. Which methods exist for a property is decided by
//! its type: ordered rules need `PartialOrd`, text rules need [`AsText`],
//! size rules need [`HasSize`], numeric rules need [`NumericValue`], and
//! so on. Declaring a rule against a type it cannot apply to is a compile
//! error, not a runtime one.
//!
//! Every rule except `is_null` / `is_not_null` treats an absent property
//! as trivially satisfied. Presence is opt-in.

pub mod collection;
pub mod comparable;
pub mod numeric;
pub mod text;

pub use collection::HasSize;
pub use numeric::{IntegerValue, NumericValue};
pub use text::AsText;

use crate::core::constraint::Constraint;
use crate::core::context::Context;
use crate::core::value::ToValue;

// ============================================================================
// PROPERTY HANDLE
// ============================================================================

/// Chainable handle for declaring rules against one property.
pub struct Property<'c, 't, T, U: ?Sized> {
    context: &'c mut Context<'t, T>,
    name: &'static str,
    value: Option<&'t U>,
}

impl<'t, T> Context<'t, T> {
    /// Binds a property of the target by name.
    ///
    /// The accessor is the injected "read property by name" capability:
    /// it returns `None` when the property is absent. Rule methods on the
    /// returned handle record at most one violation for this property per
    /// run, corresponding to the first rule whose predicate failed.
    pub fn property<'c, U: ?Sized>(
        &'c mut self,
        name: &'static str,
        accessor: impl FnOnce(&'t T) -> Option<&'t U>,
    ) -> Property<'c, 't, T, U> {
        let value = accessor(self.target());
        Property {
            context: self,
            name,
            value,
        }
    }
}

impl<'c, 't, T, U: ?Sized> Property<'c, 't, T, U> {
    /// The declared property name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The current value, if present.
    #[must_use]
    pub fn value(&self) -> Option<&'t U> {
        self.value
    }

    pub(crate) fn constrain(
        self,
        constraint: Constraint,
        predicate: impl FnOnce(&U) -> bool,
    ) -> Self
    where
        U: ToValue,
    {
        self.context
            .evaluate(self.name, self.value, constraint, predicate);
        self
    }
}

// ============================================================================
// UNIVERSAL RULES
// ============================================================================

impl<'c, 't, T, U: ToValue + ?Sized> Property<'c, 't, T, U> {
    /// The property must be absent.
    pub fn is_null(self) -> Self {
        self.context
            .evaluate_presence(self.name, self.value, Constraint::Null, |present| !present);
        self
    }

    /// The property must be present.
    pub fn is_not_null(self) -> Self {
        self.context
            .evaluate_presence(self.name, self.value, Constraint::NotNull, |present| present);
        self
    }
}

impl<'c, 't, T, U: PartialEq + ToValue> Property<'c, 't, T, U> {
    pub fn is_equal_to(self, expected: U) -> Self {
        let constraint = Constraint::Equals {
            expected: expected.to_value(),
        };
        self.constrain(constraint, |v| *v == expected)
    }

    pub fn is_not_equal_to(self, expected: U) -> Self {
        let constraint = Constraint::NotEquals {
            expected: expected.to_value(),
        };
        self.constrain(constraint, |v| *v != expected)
    }

    /// The value must equal one of `values`.
    pub fn is_in(self, values: &[U]) -> Self {
        let constraint = Constraint::In {
            values: values.iter().map(ToValue::to_value).collect(),
        };
        self.constrain(constraint, |v| values.contains(v))
    }

    /// The value must equal none of `values`.
    pub fn is_not_in(self, values: &[U]) -> Self {
        let constraint = Constraint::NotIn {
            values: values.iter().map(ToValue::to_value).collect(),
        };
        self.constrain(constraint, |v| !values.contains(v))
    }
}

// ============================================================================
// NESTED VALIDATION
// ============================================================================

impl<'c, 't, T, U> Property<'c, 't, T, U> {
    /// Validates the nested object with its own rule block. Child
    /// violations surface under `"{name}.{child_path}"`. Absent values
    /// are not descended into.
    pub fn validate_nested(self, block: impl FnOnce(&mut Context<'t, U>)) -> Self {
        self.context.descend(self.name, self.value, block);
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
