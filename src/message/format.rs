//! Locale-aware value formatting.
//!
//! The [`FormatterRegistry`] maps a value's runtime kind to a formatting
//! function and a locale key to a [`LocaleProfile`] (separators and date
//! patterns). Formatting never fails: kinds without a registered function
//! fall back to the value's locale-agnostic `Display` form.

use std::collections::HashMap;

use chrono::NaiveTime;
use indexmap::IndexMap;

use crate::core::value::{Value, ValueKind};

use super::locale;

// ============================================================================
// LOCALE PROFILE
// ============================================================================

/// Per-locale formatting conventions.
#[derive(Debug, Clone)]
pub struct LocaleProfile {
    pub decimal_separator: char,
    pub grouping_separator: char,
    /// chrono pattern for date values and for date-times at start of day.
    pub date_pattern: &'static str,
    /// chrono pattern for date-times with a time-of-day component.
    pub datetime_pattern: &'static str,
}

impl LocaleProfile {
    const EN: Self = Self {
        decimal_separator: '.',
        grouping_separator: ',',
        date_pattern: "%b %-d, %Y",
        datetime_pattern: "%b %-d, %Y %H:%M:%S",
    };

    const DE: Self = Self {
        decimal_separator: ',',
        grouping_separator: '.',
        date_pattern: "%d.%m.%Y",
        datetime_pattern: "%d.%m.%Y %H:%M:%S",
    };

    const PT_BR: Self = Self {
        decimal_separator: ',',
        grouping_separator: '.',
        date_pattern: "%d/%m/%Y",
        datetime_pattern: "%d/%m/%Y %H:%M:%S",
    };
}

// ============================================================================
// FORMATTER REGISTRY
// ============================================================================

/// A formatting function for one value kind.
pub type FormatFn = fn(&FormatterRegistry, &Value, &LocaleProfile) -> String;

/// Immutable after construction; shared read-only across validations.
#[derive(Debug, Clone)]
pub struct FormatterRegistry {
    formatters: HashMap<ValueKind, FormatFn>,
    profiles: IndexMap<String, LocaleProfile>,
    default_profile: LocaleProfile,
}

impl FormatterRegistry {
    /// The registry shipped with the crate: formatters for every kind and
    /// profiles for `en`, `de`, and `pt-BR`.
    #[must_use]
    pub fn builtin() -> Self {
        let mut formatters: HashMap<ValueKind, FormatFn> = HashMap::new();
        formatters.insert(ValueKind::Boolean, format_boolean);
        formatters.insert(ValueKind::Integer, format_integer);
        formatters.insert(ValueKind::Decimal, format_decimal);
        formatters.insert(ValueKind::Text, format_text);
        formatters.insert(ValueKind::Date, format_date);
        formatters.insert(ValueKind::DateTime, format_datetime);
        formatters.insert(ValueKind::List, format_list);

        let mut profiles = IndexMap::new();
        profiles.insert("en".to_owned(), LocaleProfile::EN);
        profiles.insert("de".to_owned(), LocaleProfile::DE);
        profiles.insert("pt-br".to_owned(), LocaleProfile::PT_BR);

        Self {
            formatters,
            profiles,
            default_profile: LocaleProfile::EN,
        }
    }

    /// Registers or replaces the formatter for a kind.
    pub fn register(&mut self, kind: ValueKind, formatter: FormatFn) {
        self.formatters.insert(kind, formatter);
    }

    /// Registers or replaces the profile for a locale key.
    pub fn set_profile(&mut self, key: &str, profile: LocaleProfile) {
        self.profiles.insert(locale::normalize(key), profile);
    }

    /// The profile for a locale key, falling back through the locale
    /// chain and finally to the default profile.
    #[must_use]
    pub fn profile(&self, key: &str) -> &LocaleProfile {
        for candidate in locale::fallback_chain(key) {
            if let Some(profile) = self.profiles.get(&candidate) {
                return profile;
            }
        }
        &self.default_profile
    }

    /// Formats a value under the profile of `key`.
    #[must_use]
    pub fn format(&self, value: &Value, key: &str) -> String {
        self.format_with(value, self.profile(key))
    }

    /// Formats a value under an explicit profile.
    #[must_use]
    pub fn format_with(&self, value: &Value, profile: &LocaleProfile) -> String {
        match self.formatters.get(&value.kind()) {
            Some(formatter) => formatter(self, value, profile),
            None => value.to_string(),
        }
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// BUILT-IN FORMATTERS
// ============================================================================

fn format_boolean(_: &FormatterRegistry, value: &Value, _: &LocaleProfile) -> String {
    value.to_string()
}

fn format_text(_: &FormatterRegistry, value: &Value, _: &LocaleProfile) -> String {
    value.to_string()
}

fn format_integer(_: &FormatterRegistry, value: &Value, profile: &LocaleProfile) -> String {
    match value {
        Value::Int(i) => {
            let grouped = group_digits(&i.unsigned_abs().to_string(), profile.grouping_separator);
            if *i < 0 {
                format!("-{grouped}")
            } else {
                grouped
            }
        }
        Value::UInt(u) => group_digits(&u.to_string(), profile.grouping_separator),
        other => other.to_string(),
    }
}

fn format_decimal(_: &FormatterRegistry, value: &Value, profile: &LocaleProfile) -> String {
    let Value::Float(x) = value else {
        return value.to_string();
    };
    let plain = x.to_string();
    // NaN, infinities, and exponent forms pass through untouched.
    if !plain.bytes().all(|b| b.is_ascii_digit() || b == b'.' || b == b'-') {
        return plain;
    }
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };
    let mut out = format!("{sign}{}", group_digits(int_part, profile.grouping_separator));
    if let Some(frac) = frac_part {
        out.push(profile.decimal_separator);
        out.push_str(frac);
    }
    out
}

fn format_date(_: &FormatterRegistry, value: &Value, profile: &LocaleProfile) -> String {
    match value {
        Value::Date(d) => d.format(profile.date_pattern).to_string(),
        other => other.to_string(),
    }
}

/// Date-times at the canonical start of day render as plain dates.
fn format_datetime(_: &FormatterRegistry, value: &Value, profile: &LocaleProfile) -> String {
    match value {
        Value::DateTime(dt) => {
            if dt.time() == NaiveTime::MIN {
                dt.format(profile.date_pattern).to_string()
            } else {
                dt.format(profile.datetime_pattern).to_string()
            }
        }
        other => other.to_string(),
    }
}

fn format_list(registry: &FormatterRegistry, value: &Value, profile: &LocaleProfile) -> String {
    match value {
        Value::List(items) => items
            .iter()
            .map(|item| registry.format_with(item, profile))
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// Inserts the grouping separator every three digits from the right.
/// Expects an unsigned all-digit string.
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn registry() -> FormatterRegistry {
        FormatterRegistry::builtin()
    }

    #[test]
    fn integers_group_per_locale() {
        let r = registry();
        assert_eq!(r.format(&Value::Int(1_234_567), "en"), "1,234,567");
        assert_eq!(r.format(&Value::Int(1_234_567), "de"), "1.234.567");
        assert_eq!(r.format(&Value::Int(-1_234), "pt-BR"), "-1.234");
        assert_eq!(r.format(&Value::Int(999), "en"), "999");
        assert_eq!(r.format(&Value::UInt(1_000), "en"), "1,000");
    }

    #[test]
    fn decimals_use_locale_separators() {
        let r = registry();
        assert_eq!(r.format(&Value::Float(1234.5), "en"), "1,234.5");
        assert_eq!(r.format(&Value::Float(1234.5), "de"), "1.234,5");
        assert_eq!(r.format(&Value::Float(-0.25), "pt-br"), "-0,25");
        assert_eq!(r.format(&Value::Float(50.0), "en"), "50");
    }

    #[test]
    fn non_finite_decimals_pass_through() {
        let r = registry();
        assert_eq!(r.format(&Value::Float(f64::NAN), "de"), "NaN");
        assert_eq!(r.format(&Value::Float(f64::INFINITY), "de"), "inf");
    }

    #[test]
    fn dates_use_locale_patterns() {
        let r = registry();
        let d = Value::Date(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
        assert_eq!(r.format(&d, "en"), "Jan 5, 2026");
        assert_eq!(r.format(&d, "de"), "05.01.2026");
        assert_eq!(r.format(&d, "pt-BR"), "05/01/2026");
    }

    #[test]
    fn datetime_at_midnight_renders_as_date() {
        let r = registry();
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let midnight = Value::DateTime(date.and_hms_opt(0, 0, 0).unwrap());
        let afternoon = Value::DateTime(date.and_hms_opt(14, 30, 0).unwrap());
        assert_eq!(r.format(&midnight, "de"), "05.01.2026");
        assert_eq!(r.format(&afternoon, "de"), "05.01.2026 14:30:00");
        assert_eq!(r.format(&afternoon, "en"), "Jan 5, 2026 14:30:00");
    }

    #[test]
    fn lists_join_formatted_elements() {
        let r = registry();
        let list = Value::List(vec![Value::Int(1_000), Value::Int(2_000)]);
        assert_eq!(r.format(&list, "de"), "1.000, 2.000");
    }

    #[test]
    fn unknown_locale_falls_back_to_default_profile() {
        let r = registry();
        assert_eq!(r.format(&Value::Float(1.5), "zz-XX"), "1.5");
    }

    #[test]
    fn region_falls_back_to_language_profile() {
        let r = registry();
        assert_eq!(r.format(&Value::Float(1.5), "de-AT"), "1,5");
    }
}
