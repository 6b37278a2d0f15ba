//! The message-resolution engine.
//!
//! Turns a [`Violation`] plus a requested locale into a human-readable
//! string: locale fallback, template lookup, locale/type-aware value
//! formatting, placeholder interpolation. Resolution always produces some
//! string; catalog gaps and unknown locales degrade instead of failing.
//!
//! The whole configuration lives in an explicitly constructed
//! [`MessageResolver`] handed to every call. There is no ambient global
//! catalog, which keeps resolution deterministic and independently
//! testable. Both tables are read-only after construction, so sharing one
//! resolver across threads needs no synchronization.

pub mod catalog;
pub mod format;
pub mod locale;

pub use catalog::MessageCatalog;
pub use format::{FormatFn, FormatterRegistry, LocaleProfile};

use indexmap::IndexMap;

use crate::core::value::Value;
use crate::core::violation::Violation;

// ============================================================================
// MESSAGE RESOLVER
// ============================================================================

/// Catalog + formatter registry + default locale, built once at startup.
#[derive(Debug, Clone)]
pub struct MessageResolver {
    catalog: MessageCatalog,
    formatters: FormatterRegistry,
    default_locale: String,
}

impl MessageResolver {
    /// A resolver over the built-in `en` / `de` / `pt-BR` tables, with
    /// `en` as the default locale.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(MessageCatalog::builtin(), FormatterRegistry::builtin(), "en")
    }

    #[must_use]
    pub fn new(
        catalog: MessageCatalog,
        formatters: FormatterRegistry,
        default_locale: &str,
    ) -> Self {
        Self {
            catalog,
            formatters,
            default_locale: locale::normalize(default_locale),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn formatters(&self) -> &FormatterRegistry {
        &self.formatters
    }

    /// Resolves a violation to a localized message.
    ///
    /// The requested locale falls back exact key, then language-only key,
    /// then the default locale; the first key with catalog entries becomes
    /// the resolved locale for both template lookup and value formatting.
    /// A missing template degrades to the untemplated
    /// `"<path>: <Constraint>"` form. Never fails.
    #[must_use]
    pub fn resolve(&self, violation: &Violation, requested_locale: &str) -> String {
        let resolved = self.resolve_locale(requested_locale);
        let profile = self.formatters.profile(&resolved);

        let Some(template) = self
            .catalog
            .template(&resolved, violation.constraint.name())
        else {
            return format!("{violation}");
        };

        let mut replacements: Vec<(&str, String)> = Vec::new();
        let offending = violation
            .value
            .as_ref()
            .map(|value| self.formatters.format_with(value, profile))
            .unwrap_or_default();
        replacements.push(("value", offending));
        for (name, value) in violation.constraint.params() {
            replacements.push((name, self.formatters.format_with(&value, profile)));
        }
        interpolate(template, &replacements)
    }

    /// Formats one value under every registered locale, in catalog order.
    /// Used for cross-locale consistency checks.
    #[must_use]
    pub fn format_all_locales(&self, value: &Value) -> IndexMap<String, String> {
        self.catalog
            .locales()
            .map(|key| (key.to_owned(), self.formatters.format(value, key)))
            .collect()
    }

    /// First fallback-chain key with catalog entries, else the default
    /// locale.
    fn resolve_locale(&self, requested: &str) -> String {
        locale::fallback_chain(requested)
            .into_iter()
            .find(|candidate| self.catalog.has_locale(candidate))
            .unwrap_or_else(|| self.default_locale.clone())
    }
}

impl Default for MessageResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Textual `{name}` substitution.
fn interpolate(template: &str, replacements: &[(&str, String)]) -> String {
    let mut out = template.to_owned();
    for (name, formatted) in replacements {
        out = out.replace(&format!("{{{name}}}"), formatted);
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================
