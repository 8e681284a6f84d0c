use std::cmp::Ordering;
use std::fmt;

use crate::errors::*;

/// A numeric value, tagged as integral or floating point.
///
/// Arithmetic promotes to `Float` as soon as either operand is one, with
/// two exceptions: `div` narrows exact quotients back to `Int`, and
/// `modulo` always yields `Float`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Classify a token as a numeral, trying the integer form first.
    pub fn parse(token: &str) -> Result<Number> {
        if let Ok(i) = token.parse::<i64>() {
            return Ok(Number::Int(i));
        }
        if let Ok(f) = token.parse::<f64>() {
            return Ok(Number::Float(f));
        }
        Err(ErrorKind::UnknownNumericFormat(token.to_string()).into())
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    pub fn add(self, rhs: Number) -> Number {
        self.promote(rhs, i64::wrapping_add, |a, b| a + b)
    }

    pub fn sub(self, rhs: Number) -> Number {
        self.promote(rhs, i64::wrapping_sub, |a, b| a - b)
    }

    pub fn mul(self, rhs: Number) -> Number {
        self.promote(rhs, i64::wrapping_mul, |a, b| a * b)
    }

    /// Division always runs in floating point; an exact quotient narrows
    /// back to `Int`.
    pub fn div(self, rhs: Number) -> Number {
        let quotient = self.as_f64() / rhs.as_f64();
        if quotient.fract() == 0.0 {
            Number::Int(quotient as i64)
        } else {
            Number::Float(quotient)
        }
    }

    /// Remainder stays `Float` even when both operands are integers.
    pub fn modulo(self, rhs: Number) -> Number {
        Number::Float(self.as_f64() % rhs.as_f64())
    }

    fn promote(
        self,
        rhs: Number,
        int_op: fn(i64, i64) -> i64,
        float_op: fn(f64, f64) -> f64,
    ) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Number::Int(int_op(a, b)),
            _ => Number::Float(float_op(self.as_f64(), rhs.as_f64())),
        }
    }
}

/// Comparisons coerce both operands to floating point.
impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        self.as_f64() == other.as_f64()
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
        self.as_f64().partial_cmp(&other.as_f64())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{:.6}", x),
        }
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Number {
        Number::Int(i)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Number {
        Number::Float(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_prefers_integers() {
        assert!(matches!(Number::parse("42"), Ok(Number::Int(42))));
        assert!(matches!(Number::parse("-7"), Ok(Number::Int(-7))));
        assert!(matches!(Number::parse("2.5"), Ok(Number::Float(_))));
        assert!(matches!(Number::parse("1e3"), Ok(Number::Float(_))));
    }

    #[test]
    fn parse_rejects_words() {
        let err = Number::parse("0x10").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::UnknownNumericFormat(_)));
        assert!(Number::parse("hello").is_err());
        assert!(Number::parse("1.2.3").is_err());
    }

    #[test]
    fn arithmetic_promotes_on_mixed_operands() {
        assert!(matches!(Number::Int(2).add(Number::Int(3)), Number::Int(5)));
        assert!(matches!(
            Number::Int(2).add(Number::Float(3.0)),
            Number::Float(_)
        ));
        assert!(matches!(
            Number::Float(2.0).mul(Number::Int(3)),
            Number::Float(_)
        ));
    }

    #[test]
    fn integer_arithmetic_wraps() {
        let wrapped = Number::Int(i64::max_value()).add(Number::Int(1));
        assert!(matches!(wrapped, Number::Int(std::i64::MIN)));
    }

    #[test]
    fn division_narrows_exact_quotients() {
        assert!(matches!(Number::Int(4).div(Number::Int(2)), Number::Int(2)));
        assert!(matches!(Number::Int(2).div(Number::Int(5)), Number::Float(_)));
        assert_eq!(Number::Int(2).div(Number::Int(5)).as_f64(), 0.4);
        assert!(matches!(
            Number::Float(7.0).div(Number::Float(3.5)),
            Number::Int(2)
        ));
    }

    #[test]
    fn division_by_zero_stays_float() {
        let quotient = Number::Int(1).div(Number::Int(0));
        assert!(matches!(quotient, Number::Float(_)));
        assert!(quotient.as_f64().is_infinite());
    }

    #[test]
    fn modulo_is_always_float() {
        assert!(matches!(
            Number::Int(6).modulo(Number::Int(3)),
            Number::Float(_)
        ));
        assert_eq!(Number::Int(7).modulo(Number::Int(4)).as_f64(), 3.0);
    }

    #[test]
    fn comparisons_coerce() {
        assert_eq!(Number::Int(2), Number::Float(2.0));
        assert!(Number::Int(1) < Number::Float(1.5));
        assert!(Number::Float(2.5) > Number::Int(2));
    }

    #[test]
    fn rendering() {
        assert_eq!(format!("{}", Number::Int(42)), "42");
        assert_eq!(format!("{}", Number::Float(0.4)), "0.400000");
    }
}
