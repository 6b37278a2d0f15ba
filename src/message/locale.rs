//! Locale keys and the fallback chain.
//!
//! Keys are matched case-insensitively by normalizing both sides:
//! lowercase, `_` replaced by `-`. A requested key falls back from its
//! exact form to its language-only form; the resolver appends the default
//! locale as the final step.

/// Normalizes a locale key for lookup: `"pt_BR"` becomes `"pt-br"`.
#[must_use]
pub fn normalize(key: &str) -> String {
    key.trim().replace('_', "-").to_ascii_lowercase()
}

/// The language part of a normalized key: `"pt-br"` yields `"pt"`.
#[must_use]
pub fn language_of(key: &str) -> &str {
    match key.find('-') {
        Some(split) => &key[..split],
        None => key,
    }
}

/// Increasingly generic candidate keys for a requested locale, most
/// specific first. Duplicates collapse, so `"de"` yields just `["de"]`.
#[must_use]
pub fn fallback_chain(requested: &str) -> Vec<String> {
    let exact = normalize(requested);
    let language = language_of(&exact).to_owned();
    let mut chain = vec![exact];
    if chain[0] != language && !language.is_empty() {
        chain.push(language);
    }
    chain
}
