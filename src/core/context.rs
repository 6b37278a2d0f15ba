//! The traversal engine: per-invocation contexts and the `validate` entry
//! point.
//!
//! A [`Context`] is the mutable accumulator bound to one target object. It
//! owns the growing violation set for that object and its descendants, and
//! exposes the rule-evaluation primitive every concrete rule method routes
//! through. Contexts are created per validation invocation, merged upward,
//! and discarded; nothing survives the call that created them.
//!
//! Traversal is plain call/return recursion over the object graph. There is
//! no cycle guard: targets handed to [`validate`] must be acyclic, which is
//! the caller's responsibility.

use tracing::{debug, trace};

use super::constraint::Constraint;
use super::error::ValidationFailed;
use super::value::ToValue;
use super::violation::{Violation, ViolationSet};

// ============================================================================
// VALIDATE ENTRY POINT
// ============================================================================

/// Validates `target` against the rules declared in `rules`.
///
/// Returns the target unchanged when every rule passes, enabling chaining;
/// otherwise returns [`ValidationFailed`] carrying the complete violation
/// set. The target itself is never mutated.
///
/// # Examples
///
/// ```rust,ignore
/// let employee = validate(employee, |ctx| {
///     ctx.property("name", |e: &Employee| e.name.as_ref())
///         .is_not_null()
///         .is_not_blank();
///     ctx.property("age", |e: &Employee| e.age.as_ref())
///         .is_between(18, 100);
/// })?;
/// ```
pub fn validate<T, F>(target: T, rules: F) -> Result<T, ValidationFailed>
where
    F: FnOnce(&mut Context<'_, T>),
{
    let violations = {
        let mut context = Context::open(&target);
        rules(&mut context);
        context.finish()
    };
    debug!(violations = violations.len(), "validation run finished");
    if violations.is_empty() {
        Ok(target)
    } else {
        Err(ValidationFailed::new(violations))
    }
}

// ============================================================================
// CONTEXT
// ============================================================================

/// Violation accumulator for one target object (root or nested).
pub struct Context<'t, T> {
    target: &'t T,
    violations: ViolationSet,
}

impl<'t, T> Context<'t, T> {
    /// Opens a fresh context over `target` with an empty violation set.
    pub(crate) fn open(target: &'t T) -> Self {
        Self {
            target,
            violations: ViolationSet::new(),
        }
    }

    /// The object this context validates. Read-only to the engine.
    #[must_use]
    pub fn target(&self) -> &'t T {
        self.target
    }

    /// Violations recorded so far.
    #[must_use]
    pub fn violations(&self) -> &ViolationSet {
        &self.violations
    }

    pub(crate) fn has_violation(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.property_path == path)
    }

    /// The central rule-evaluation primitive.
    ///
    /// First violation wins: once a property has one recorded failure,
    /// later rule checks against the same property are no-ops. Absent
    /// values satisfy every predicate; only the presence primitive below
    /// looks at absence itself.
    pub(crate) fn evaluate<U>(
        &mut self,
        name: &'static str,
        value: Option<&U>,
        constraint: Constraint,
        predicate: impl FnOnce(&U) -> bool,
    ) where
        U: ToValue + ?Sized,
    {
        if self.has_violation(name) {
            return;
        }
        let Some(current) = value else {
            return;
        };
        if !predicate(current) {
            self.violations
                .insert(Violation::new(name, Some(current.to_value()), constraint));
        }
    }

    /// Presence variant of [`evaluate`](Self::evaluate): the predicate
    /// decides on whether the value is present at all.
    pub(crate) fn evaluate_presence<U>(
        &mut self,
        name: &'static str,
        value: Option<&U>,
        constraint: Constraint,
        predicate: impl FnOnce(bool) -> bool,
    ) where
        U: ToValue + ?Sized,
    {
        if self.has_violation(name) {
            return;
        }
        if !predicate(value.is_some()) {
            self.violations.insert(Violation::new(
                name,
                value.map(ToValue::to_value),
                constraint,
            ));
        }
    }

    /// Opens a child context over a nested target, runs `block` against
    /// it, and merges the child's violations into this context with a
    /// `"{name}."` path prefix. Absent children are never validated.
    pub(crate) fn descend<U>(
        &mut self,
        name: &str,
        child: Option<&'t U>,
        block: impl FnOnce(&mut Context<'t, U>),
    ) {
        let Some(child) = child else {
            return;
        };
        trace!(property = name, "descending into nested target");
        let mut child_context = Context::open(child);
        block(&mut child_context);
        self.absorb(&format!("{name}."), child_context.finish());
    }

    /// Like [`descend`](Self::descend), once per element of an ordered
    /// collection, with `"{name}[{index}]."` path prefixes. Iteration is
    /// sequential; indices are 0-based positions in iteration order.
    pub(crate) fn descend_each<U>(
        &mut self,
        name: &str,
        children: Option<&'t [U]>,
        block: impl Fn(&mut Context<'t, U>),
    ) {
        let Some(children) = children else {
            return;
        };
        trace!(
            property = name,
            elements = children.len(),
            "descending into collection"
        );
        for (index, child) in children.iter().enumerate() {
            let mut child_context = Context::open(child);
            block(&mut child_context);
            self.absorb(&format!("{name}[{index}]."), child_context.finish());
        }
    }

    /// Merges a child's violations under `prefix`, keeping the
    /// one-violation-per-path invariant across the whole run.
    fn absorb(&mut self, prefix: &str, child: ViolationSet) {
        for violation in child {
            let path = format!("{prefix}{}", violation.property_path);
            if self.has_violation(&path) {
                continue;
            }
            self.violations.insert(Violation {
                property_path: path,
                ..violation
            });
        }
    }

    /// Consumes the context, yielding the frozen violation set.
    pub(crate) fn finish(self) -> ViolationSet {
        self.violations
    }
}

// ============================================================================
// TESTS
// ============================================================================
