//! Prelude module for convenient imports.
//!
//! A single `use validus::prelude::*;` brings in the entry point, the
//! property handle with every rule capability trait, and the message
//! layer.

pub use crate::core::{
    Constraint, ConstraintParams, Context, ToValue, ValidationFailed, Value, ValueKind, Violation,
    ViolationSet, validate,
};

pub use crate::property::{AsText, HasSize, IntegerValue, NumericValue, Property};

pub use crate::message::{
    FormatFn, FormatterRegistry, LocaleProfile, MessageCatalog, MessageResolver,
};
