//! Size and collection rules, plus per-element traversal.

use crate::core::constraint::Constraint;
use crate::core::context::Context;
use crate::core::value::ToValue;

use super::Property;

/// Types with a countable size: strings count `char`s, collections count
/// elements.
pub trait HasSize {
    fn size(&self) -> usize;
}

impl HasSize for str {
    fn size(&self) -> usize {
        self.chars().count()
    }
}

impl HasSize for String {
    fn size(&self) -> usize {
        self.chars().count()
    }
}

impl<E> HasSize for [E] {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<E> HasSize for Vec<E> {
    fn size(&self) -> usize {
        self.len()
    }
}

// ============================================================================
// SIZE RULES
// ============================================================================

impl<'c, 't, T, U: HasSize + ToValue + ?Sized> Property<'c, 't, T, U> {
    /// The size must lie within the inclusive range `[min, max]`.
    pub fn has_size(self, min: usize, max: usize) -> Self {
        let constraint = Constraint::Size { min, max };
        self.constrain(constraint, |v| {
            let size = v.size();
            size >= min && size <= max
        })
    }

    pub fn is_empty(self) -> Self {
        self.constrain(Constraint::Empty, |v| v.size() == 0)
    }

    pub fn is_not_empty(self) -> Self {
        self.constrain(Constraint::NotEmpty, |v| v.size() > 0)
    }
}

// ============================================================================
// ELEMENT RULES
// ============================================================================

impl<'c, 't, T, E: PartialEq + ToValue> Property<'c, 't, T, Vec<E>> {
    pub fn contains_element(self, element: E) -> Self {
        let constraint = Constraint::ContainsElement {
            element: element.to_value(),
        };
        self.constrain(constraint, |v| v.contains(&element))
    }

    pub fn does_not_contain_element(self, element: E) -> Self {
        let constraint = Constraint::NotContainElement {
            element: element.to_value(),
        };
        self.constrain(constraint, |v| !v.contains(&element))
    }
}

// ============================================================================
// PER-ELEMENT TRAVERSAL
// ============================================================================

impl<'c, 't, T, E> Property<'c, 't, T, Vec<E>> {
    /// Validates every element with its own rule block. Violations of
    /// element `i` surface under `"{name}[{i}].{child_path}"`. An absent
    /// collection is not descended into.
    pub fn validate_for_each(self, block: impl Fn(&mut Context<'t, E>)) -> Self {
        self.context
            .descend_each(self.name, self.value.map(Vec::as_slice), block);
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
