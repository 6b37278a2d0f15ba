//! The message-template catalog.
//!
//! A read-only mapping from `(locale, constraint tag)` to a parameterized
//! template. Built once at startup; adding a locale means adding entries,
//! not code.

use std::collections::HashMap;

use indexmap::IndexMap;

use super::locale;

/// `(locale, tag) -> template` lookup table.
///
/// Locales iterate in registration order, which makes bulk lookups
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    templates: IndexMap<String, HashMap<&'static str, String>>,
}

impl MessageCatalog {
    /// An empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog shipped with the crate: `en`, `de`, and `pt-BR`
    /// templates for every constraint tag.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.add_locale("en", EN);
        catalog.add_locale("de", DE);
        catalog.add_locale("pt-BR", PT_BR);
        catalog
    }

    /// Registers all `(tag, template)` entries for a locale. The key is
    /// normalized, so `"pt-BR"` and `"pt_br"` name the same locale.
    pub fn add_locale<'a>(
        &mut self,
        key: &str,
        entries: impl IntoIterator<Item = &'a (&'static str, &'static str)>,
    ) {
        let bucket = self.templates.entry(locale::normalize(key)).or_default();
        for &(tag, template) in entries {
            bucket.insert(tag, template.to_owned());
        }
    }

    /// Adds or replaces one template.
    pub fn set_template(&mut self, key: &str, tag: &'static str, template: impl Into<String>) {
        self.templates
            .entry(locale::normalize(key))
            .or_default()
            .insert(tag, template.into());
    }

    /// Whether any entry exists under the normalized `key`.
    #[must_use]
    pub fn has_locale(&self, key: &str) -> bool {
        self.templates.contains_key(&locale::normalize(key))
    }

    /// The template for `(key, tag)`, if present. The key must already be
    /// normalized by the caller's fallback walk.
    #[must_use]
    pub fn template(&self, normalized_key: &str, tag: &str) -> Option<&str> {
        self.templates
            .get(normalized_key)
            .and_then(|bucket| bucket.get(tag))
            .map(String::as_str)
    }

    /// Registered locale keys, in registration order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }
}

// ============================================================================
// BUILT-IN TEMPLATES
// ============================================================================

const EN: &[(&str, &str)] = &[
    ("Null", "must be null"),
    ("NotNull", "must not be null"),
    ("Equals", "must be equal to {expected}"),
    ("NotEquals", "must not be equal to {expected}"),
    ("EqualsIgnoringCase", "must be equal to {expected} ignoring case"),
    ("NotEqualsIgnoringCase", "must not be equal to {expected} ignoring case"),
    ("In", "must be in {values}"),
    ("NotIn", "must not be in {values}"),
    ("Less", "must be less than {bound}"),
    ("LessOrEqual", "must be less than or equal to {bound}"),
    ("Greater", "must be greater than {bound}"),
    ("GreaterOrEqual", "must be greater than or equal to {bound}"),
    ("Between", "must be between {start} and {end}"),
    ("NotBetween", "must not be between {start} and {end}"),
    ("Empty", "must be empty"),
    ("NotEmpty", "must not be empty"),
    ("Blank", "must be blank"),
    ("NotBlank", "must not be blank"),
    ("Contains", "must contain {part}"),
    ("NotContain", "must not contain {part}"),
    ("ContainsIgnoringCase", "must contain {part} ignoring case"),
    ("ContainsElement", "must contain {element}"),
    ("NotContainElement", "must not contain {element}"),
    ("StartsWith", "must start with {prefix}"),
    ("EndsWith", "must end with {suffix}"),
    ("Matches", "must match {pattern}"),
    ("Size", "size must be between {min} and {max}"),
    ("Even", "must be even"),
    ("Odd", "must be odd"),
    ("IntegerDigits", "integer digits must be between {min} and {max}"),
];

const DE: &[(&str, &str)] = &[
    ("Null", "muss null sein"),
    ("NotNull", "darf nicht null sein"),
    ("Equals", "muss gleich {expected} sein"),
    ("NotEquals", "darf nicht gleich {expected} sein"),
    (
        "EqualsIgnoringCase",
        "muss ohne Beachtung der Groß- und Kleinschreibung gleich {expected} sein",
    ),
    (
        "NotEqualsIgnoringCase",
        "darf ohne Beachtung der Groß- und Kleinschreibung nicht gleich {expected} sein",
    ),
    ("In", "muss einer der folgenden Werte sein: {values}"),
    ("NotIn", "darf keiner der folgenden Werte sein: {values}"),
    ("Less", "muss kleiner als {bound} sein"),
    ("LessOrEqual", "muss kleiner oder gleich {bound} sein"),
    ("Greater", "muss größer als {bound} sein"),
    ("GreaterOrEqual", "muss größer oder gleich {bound} sein"),
    ("Between", "muss zwischen {start} und {end} liegen"),
    ("NotBetween", "darf nicht zwischen {start} und {end} liegen"),
    ("Empty", "muss leer sein"),
    ("NotEmpty", "darf nicht leer sein"),
    ("Blank", "darf nur Leerraum enthalten"),
    ("NotBlank", "darf nicht leer oder nur Leerraum sein"),
    ("Contains", "muss {part} enthalten"),
    ("NotContain", "darf {part} nicht enthalten"),
    (
        "ContainsIgnoringCase",
        "muss {part} ohne Beachtung der Groß- und Kleinschreibung enthalten",
    ),
    ("ContainsElement", "muss das Element {element} enthalten"),
    ("NotContainElement", "darf das Element {element} nicht enthalten"),
    ("StartsWith", "muss mit {prefix} beginnen"),
    ("EndsWith", "muss mit {suffix} enden"),
    ("Matches", "muss dem Muster {pattern} entsprechen"),
    ("Size", "die Größe muss zwischen {min} und {max} liegen"),
    ("Even", "muss gerade sein"),
    ("Odd", "muss ungerade sein"),
    (
        "IntegerDigits",
        "die Anzahl der Ziffern muss zwischen {min} und {max} liegen",
    ),
];

const PT_BR: &[(&str, &str)] = &[
    ("Null", "deve ser nulo"),
    ("NotNull", "não deve ser nulo"),
    ("Equals", "deve ser igual a {expected}"),
    ("NotEquals", "não deve ser igual a {expected}"),
    (
        "EqualsIgnoringCase",
        "deve ser igual a {expected} ignorando maiúsculas e minúsculas",
    ),
    (
        "NotEqualsIgnoringCase",
        "não deve ser igual a {expected} ignorando maiúsculas e minúsculas",
    ),
    ("In", "deve ser um destes: {values}"),
    ("NotIn", "não deve ser um destes: {values}"),
    ("Less", "deve ser menor que {bound}"),
    ("LessOrEqual", "deve ser menor ou igual a {bound}"),
    ("Greater", "deve ser maior que {bound}"),
    ("GreaterOrEqual", "deve ser maior ou igual a {bound}"),
    ("Between", "deve estar entre {start} e {end}"),
    ("NotBetween", "não deve estar entre {start} e {end}"),
    ("Empty", "deve ser vazio"),
    ("NotEmpty", "não deve ser vazio"),
    ("Blank", "deve estar em branco"),
    ("NotBlank", "não deve estar em branco"),
    ("Contains", "deve conter {part}"),
    ("NotContain", "não deve conter {part}"),
    (
        "ContainsIgnoringCase",
        "deve conter {part} ignorando maiúsculas e minúsculas",
    ),
    ("ContainsElement", "deve conter o elemento {element}"),
    ("NotContainElement", "não deve conter o elemento {element}"),
    ("StartsWith", "deve começar com {prefix}"),
    ("EndsWith", "deve terminar com {suffix}"),
    ("Matches", "deve corresponder ao padrão {pattern}"),
    ("Size", "o tamanho deve estar entre {min} e {max}"),
    ("Even", "deve ser par"),
    ("Odd", "deve ser ímpar"),
    (
        "IntegerDigits",
        "a quantidade de dígitos deve estar entre {min} e {max}",
    ),
];

// ============================================================================
// TESTS
// ============================================================================
