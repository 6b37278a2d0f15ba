//! Rules over the natural ordering of the property's type.

use crate::core::constraint::Constraint;
use crate::core::value::ToValue;

use super::Property;

impl<'c, 't, T, U: PartialOrd + ToValue> Property<'c, 't, T, U> {
    pub fn is_less_than(self, bound: U) -> Self {
        let constraint = Constraint::Less {
            bound: bound.to_value(),
        };
        self.constrain(constraint, |v| *v < bound)
    }

    pub fn is_less_than_or_equal_to(self, bound: U) -> Self {
        let constraint = Constraint::LessOrEqual {
            bound: bound.to_value(),
        };
        self.constrain(constraint, |v| *v <= bound)
    }

    pub fn is_greater_than(self, bound: U) -> Self {
        let constraint = Constraint::Greater {
            bound: bound.to_value(),
        };
        self.constrain(constraint, |v| *v > bound)
    }

    pub fn is_greater_than_or_equal_to(self, bound: U) -> Self {
        let constraint = Constraint::GreaterOrEqual {
            bound: bound.to_value(),
        };
        self.constrain(constraint, |v| *v >= bound)
    }

    /// The value must lie within the inclusive range `[start, end]`.
    pub fn is_between(self, start: U, end: U) -> Self {
        let constraint = Constraint::Between {
            start: start.to_value(),
            end: end.to_value(),
        };
        self.constrain(constraint, |v| *v >= start && *v <= end)
    }

    /// The value must lie outside the inclusive range `[start, end]`.
    pub fn is_not_between(self, start: U, end: U) -> Self {
        let constraint = Constraint::NotBetween {
            start: start.to_value(),
            end: end.to_value(),
        };
        self.constrain(constraint, |v| *v < start || *v > end)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::constraint::Constraint;
    use crate::core::context::validate;
    use crate::core::value::Value;

    #[derive(Debug)]
    struct Reading {
        value: Option<i64>,
        at: Option<chrono::NaiveDate>,
    }

    #[test]
    fn between_flags_out_of_range() {
        let reading = Reading {
            value: Some(50),
            at: None,
        };
        let err = validate(reading, |ctx| {
            ctx.property("value", |r: &Reading| r.value.as_ref())
                .is_between(0, 10);
        })
        .unwrap_err();
        let v = err.violation_for("value").unwrap();
        assert_eq!(v.value, Some(Value::Int(50)));
        assert_eq!(
            v.constraint,
            Constraint::Between {
                start: Value::Int(0),
                end: Value::Int(10),
            }
        );
    }

    #[test]
    fn between_accepts_bounds() {
        let reading = Reading {
            value: Some(10),
            at: None,
        };
        assert!(
            validate(reading, |ctx| {
                ctx.property("value", |r: &Reading| r.value.as_ref())
                    .is_between(0, 10);
            })
            .is_ok()
        );
    }

    #[test]
    fn strict_comparisons() {
        let reading = Reading {
            value: Some(10),
            at: None,
        };
        let err = validate(reading, |ctx| {
            ctx.property("value", |r: &Reading| r.value.as_ref())
                .is_less_than(10);
        })
        .unwrap_err();
        assert_eq!(
            err.violation_for("value").unwrap().constraint,
            Constraint::Less {
                bound: Value::Int(10)
            }
        );
    }

    #[test]
    fn ordering_applies_to_dates() {
        let cutoff = chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let reading = Reading {
            value: None,
            at: Some(chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()),
        };
        let err = validate(reading, |ctx| {
            ctx.property("at", |r: &Reading| r.at.as_ref())
                .is_less_than_or_equal_to(cutoff);
        })
        .unwrap_err();
        assert_eq!(
            err.violation_for("at").unwrap().constraint,
            Constraint::LessOrEqual {
                bound: Value::Date(cutoff)
            }
        );
    }

    #[test]
    fn not_between_excludes_range() {
        let reading = Reading {
            value: Some(5),
            at: None,
        };
        let err = validate(reading, |ctx| {
            ctx.property("value", |r: &Reading| r.value.as_ref())
                .is_not_between(0, 10);
        })
        .unwrap_err();
        assert!(err.violation_for("value").is_some());
    }
}
