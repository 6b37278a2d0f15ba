//! String rules.

use regex::Regex;

use crate::core::constraint::Constraint;
use crate::core::value::{ToValue, Value};

use super::Property;

/// Types a text rule can read as a string slice.
pub trait AsText {
    fn as_text(&self) -> &str;
}

impl AsText for str {
    fn as_text(&self) -> &str {
        self
    }
}

impl AsText for String {
    fn as_text(&self) -> &str {
        self
    }
}

impl<'c, 't, T, U: AsText + ToValue + ?Sized> Property<'c, 't, T, U> {
    /// The text must be empty or consist only of whitespace.
    pub fn is_blank(self) -> Self {
        self.constrain(Constraint::Blank, |v| v.as_text().trim().is_empty())
    }

    /// The text must contain at least one non-whitespace character.
    pub fn is_not_blank(self) -> Self {
        self.constrain(Constraint::NotBlank, |v| !v.as_text().trim().is_empty())
    }

    pub fn contains(self, part: &str) -> Self {
        let constraint = Constraint::Contains {
            part: Value::Str(part.to_owned()),
        };
        self.constrain(constraint, |v| v.as_text().contains(part))
    }

    pub fn does_not_contain(self, part: &str) -> Self {
        let constraint = Constraint::NotContain {
            part: Value::Str(part.to_owned()),
        };
        self.constrain(constraint, |v| !v.as_text().contains(part))
    }

    pub fn contains_ignoring_case(self, part: &str) -> Self {
        let constraint = Constraint::ContainsIgnoringCase {
            part: Value::Str(part.to_owned()),
        };
        let needle = part.to_lowercase();
        self.constrain(constraint, |v| {
            v.as_text().to_lowercase().contains(&needle)
        })
    }

    pub fn is_equal_to_ignoring_case(self, expected: &str) -> Self {
        let constraint = Constraint::EqualsIgnoringCase {
            expected: Value::Str(expected.to_owned()),
        };
        self.constrain(constraint, |v| {
            v.as_text().to_lowercase() == expected.to_lowercase()
        })
    }

    pub fn is_not_equal_to_ignoring_case(self, expected: &str) -> Self {
        let constraint = Constraint::NotEqualsIgnoringCase {
            expected: Value::Str(expected.to_owned()),
        };
        self.constrain(constraint, |v| {
            v.as_text().to_lowercase() != expected.to_lowercase()
        })
    }

    pub fn starts_with(self, prefix: &str) -> Self {
        let constraint = Constraint::StartsWith {
            prefix: Value::Str(prefix.to_owned()),
        };
        self.constrain(constraint, |v| v.as_text().starts_with(prefix))
    }

    pub fn ends_with(self, suffix: &str) -> Self {
        let constraint = Constraint::EndsWith {
            suffix: Value::Str(suffix.to_owned()),
        };
        self.constrain(constraint, |v| v.as_text().ends_with(suffix))
    }

    /// The text must match `pattern`. The pattern is compiled by the
    /// caller; the recorded constraint carries its source.
    pub fn matches(self, pattern: &Regex) -> Self {
        let constraint = Constraint::Matches {
            pattern: pattern.as_str().to_owned(),
        };
        self.constrain(constraint, |v| pattern.is_match(v.as_text()))
    }
}
