//! Numeric sign, parity, and digit-count rules.
//!
//! Sign rules reuse the comparison constraints against zero and one, so
//! `is_positive` reports `Greater(0)` and `is_zero` reports `Equals(0)`.
//! Parity and digit count get their own tags.

use crate::core::constraint::Constraint;
use crate::core::value::ToValue;

use super::Property;

/// Numbers the sign and digit-count rules apply to.
pub trait NumericValue: PartialOrd + ToValue + Copy {
    const ZERO: Self;
    const ONE: Self;

    /// Digit count of the decimal representation of the truncated
    /// absolute value. Sign and fraction are not counted; zero has one
    /// digit.
    fn integer_digits(self) -> usize;
}

/// Integers, for the parity rules.
pub trait IntegerValue: NumericValue {
    fn is_even_number(self) -> bool;
}

macro_rules! numeric_signed {
    ($($t:ty),* $(,)?) => {$(
        impl NumericValue for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn integer_digits(self) -> usize {
                let mut n = u128::from(self.unsigned_abs());
                let mut digits = 1;
                while n >= 10 {
                    n /= 10;
                    digits += 1;
                }
                digits
            }
        }

        impl IntegerValue for $t {
            fn is_even_number(self) -> bool {
                self % 2 == 0
            }
        }
    )*};
}

macro_rules! numeric_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl NumericValue for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn integer_digits(self) -> usize {
                let mut n = u128::from(self);
                let mut digits = 1;
                while n >= 10 {
                    n /= 10;
                    digits += 1;
                }
                digits
            }
        }

        impl IntegerValue for $t {
            fn is_even_number(self) -> bool {
                self % 2 == 0
            }
        }
    )*};
}

macro_rules! numeric_float {
    ($($t:ty),* $(,)?) => {$(
        impl NumericValue for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn integer_digits(self) -> usize {
                let mut n = self.abs().trunc();
                let mut digits = 1;
                while n >= 10.0 {
                    n /= 10.0;
                    n = n.trunc();
                    digits += 1;
                }
                digits
            }
        }
    )*};
}

numeric_signed!(i8, i16, i32, i64);
numeric_unsigned!(u8, u16, u32, u64);
numeric_float!(f32, f64);

impl NumericValue for isize {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    fn integer_digits(self) -> usize {
        (self.unsigned_abs() as u64).integer_digits()
    }
}

impl IntegerValue for isize {
    fn is_even_number(self) -> bool {
        self % 2 == 0
    }
}

impl NumericValue for usize {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    fn integer_digits(self) -> usize {
        (self as u64).integer_digits()
    }
}

impl IntegerValue for usize {
    fn is_even_number(self) -> bool {
        self % 2 == 0
    }
}

// ============================================================================
// RULES
// ============================================================================

impl<'c, 't, T, U: NumericValue> Property<'c, 't, T, U> {
    pub fn is_zero(self) -> Self {
        let constraint = Constraint::Equals {
            expected: U::ZERO.to_value(),
        };
        self.constrain(constraint, |v| *v == U::ZERO)
    }

    pub fn is_not_zero(self) -> Self {
        let constraint = Constraint::NotEquals {
            expected: U::ZERO.to_value(),
        };
        self.constrain(constraint, |v| *v != U::ZERO)
    }

    pub fn is_one(self) -> Self {
        let constraint = Constraint::Equals {
            expected: U::ONE.to_value(),
        };
        self.constrain(constraint, |v| *v == U::ONE)
    }

    pub fn is_positive(self) -> Self {
        let constraint = Constraint::Greater {
            bound: U::ZERO.to_value(),
        };
        self.constrain(constraint, |v| *v > U::ZERO)
    }

    pub fn is_positive_or_zero(self) -> Self {
        let constraint = Constraint::GreaterOrEqual {
            bound: U::ZERO.to_value(),
        };
        self.constrain(constraint, |v| *v >= U::ZERO)
    }

    pub fn is_negative(self) -> Self {
        let constraint = Constraint::Less {
            bound: U::ZERO.to_value(),
        };
        self.constrain(constraint, |v| *v < U::ZERO)
    }

    pub fn is_negative_or_zero(self) -> Self {
        let constraint = Constraint::LessOrEqual {
            bound: U::ZERO.to_value(),
        };
        self.constrain(constraint, |v| *v <= U::ZERO)
    }

    /// The integer-digit count of `|value|` must lie in `[min, max]`.
    pub fn has_digits(self, min: usize, max: usize) -> Self {
        let constraint = Constraint::IntegerDigits { min, max };
        self.constrain(constraint, |v| {
            let digits = v.integer_digits();
            digits >= min && digits <= max
        })
    }
}

impl<'c, 't, T, U: IntegerValue> Property<'c, 't, T, U> {
    pub fn is_even(self) -> Self {
        self.constrain(Constraint::Even, |v| v.is_even_number())
    }

    pub fn is_odd(self) -> Self {
        self.constrain(Constraint::Odd, |v| !v.is_even_number())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::NumericValue;
    use crate::core::constraint::Constraint;
    use crate::core::context::validate;
    use crate::core::value::Value;

    #[derive(Debug)]
    struct Sample {
        n: Option<i64>,
        x: Option<f64>,
    }

    fn with_n(n: i64) -> Sample {
        Sample {
            n: Some(n),
            x: None,
        }
    }

    #[test]
    fn sign_rules_reuse_comparison_constraints() {
        let err = validate(with_n(-1), |ctx| {
            ctx.property("n", |s: &Sample| s.n.as_ref()).is_positive();
        })
        .unwrap_err();
        assert_eq!(
            err.violation_for("n").unwrap().constraint,
            Constraint::Greater {
                bound: Value::Int(0)
            }
        );

        let err = validate(with_n(3), |ctx| {
            ctx.property("n", |s: &Sample| s.n.as_ref()).is_zero();
        })
        .unwrap_err();
        assert_eq!(
            err.violation_for("n").unwrap().constraint,
            Constraint::Equals {
                expected: Value::Int(0)
            }
        );
    }

    #[test]
    fn boundary_sign_cases() {
        assert!(
            validate(with_n(0), |ctx| {
                ctx.property("n", |s: &Sample| s.n.as_ref())
                    .is_positive_or_zero();
            })
            .is_ok()
        );
        assert!(
            validate(with_n(0), |ctx| {
                ctx.property("n", |s: &Sample| s.n.as_ref()).is_positive();
            })
            .is_err()
        );
        assert!(
            validate(with_n(0), |ctx| {
                ctx.property("n", |s: &Sample| s.n.as_ref())
                    .is_negative_or_zero();
            })
            .is_ok()
        );
    }

    #[test]
    fn parity_rules() {
        assert!(
            validate(with_n(4), |ctx| {
                ctx.property("n", |s: &Sample| s.n.as_ref()).is_even();
            })
            .is_ok()
        );
        let err = validate(with_n(4), |ctx| {
            ctx.property("n", |s: &Sample| s.n.as_ref()).is_odd();
        })
        .unwrap_err();
        assert_eq!(err.violation_for("n").unwrap().constraint, Constraint::Odd);
    }

    #[test]
    fn digit_counts() {
        assert_eq!(0_i64.integer_digits(), 1);
        assert_eq!(9_i64.integer_digits(), 1);
        assert_eq!(10_i64.integer_digits(), 2);
        assert_eq!((-123_i64).integer_digits(), 3);
        assert_eq!((-123.45_f64).integer_digits(), 3);
        assert_eq!(0.99_f64.integer_digits(), 1);
        assert_eq!(u64::MAX.integer_digits(), 20);
    }

    #[test]
    fn has_digits_rule() {
        let err = validate(with_n(12345), |ctx| {
            ctx.property("n", |s: &Sample| s.n.as_ref()).has_digits(1, 3);
        })
        .unwrap_err();
        assert_eq!(
            err.violation_for("n").unwrap().constraint,
            Constraint::IntegerDigits { min: 1, max: 3 }
        );

        let sample = Sample {
            n: None,
            x: Some(-123.45),
        };
        assert!(
            validate(sample, |ctx| {
                ctx.property("x", |s: &Sample| s.x.as_ref()).has_digits(3, 3);
            })
            .is_ok()
        );
    }
}
