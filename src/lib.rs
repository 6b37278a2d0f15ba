//! # validus
//!
//! Declarative object validation with localized violation messages.
//!
//! Host code opens a validation run over a target object, declares rules
//! property by property, and gets back either the unchanged target or a
//! [`ValidationFailed`] carrying every violated rule with its property
//! path, offending value, and constraint parameters.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use validus::prelude::*;
//!
//! let employee = validate(employee, |ctx| {
//!     ctx.property("name", |e: &Employee| e.name.as_ref())
//!         .is_not_null()
//!         .is_not_blank();
//!     ctx.property("age", |e: &Employee| e.age.as_ref())
//!         .is_between(18, 100);
//!     ctx.property("address", |e: &Employee| e.address.as_ref())
//!         .validate_nested(|addr| {
//!             addr.property("city", |a: &Address| a.city.as_ref())
//!                 .is_not_blank();
//!         });
//! })?;
//! ```
//!
//! Violations report the first broken rule per property ("report the first
//! failure per field, not all of them") and nested paths compose as
//! `"address.city"` / `"phones[2].number"`.
//!
//! ## Messages
//!
//! [`MessageResolver`] renders violations for humans: locale fallback
//! (exact key, language, default), per-locale templates, and value
//! formatting by runtime type (numbers group per locale, dates follow
//! locale patterns). Resolution never fails; gaps degrade to a raw
//! representation.
//!
//! ## Limits
//!
//! Traversal is plain recursion with no cycle guard; targets must be
//! acyclic. Contexts are single-use and single-threaded; the resolver's
//! tables are read-only after construction and freely shared.

pub mod core;
pub mod message;
pub mod prelude;
pub mod property;

pub use crate::core::{
    Constraint, ConstraintParams, Context, ToValue, ValidationFailed, Value, ValueKind, Violation,
    ViolationSet, validate,
};
pub use crate::message::{FormatterRegistry, LocaleProfile, MessageCatalog, MessageResolver};
pub use crate::property::Property;
