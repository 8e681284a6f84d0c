use std::fmt;
use std::rc::Rc;

use crate::errors::*;
use crate::numeric::Number;
use crate::quotation::Quotation;

/// The universal runtime datum. Everything on the stacks, and every literal
/// inside a compiled body, is one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(Number),
    Boolean(bool),
    String(Rc<String>),
    Quotation(Rc<Quotation>),
}

impl Value {
    pub fn try_into_number(self) -> Result<Number> {
        match self {
            Value::Number(n) => Ok(n),
            other => Err(ErrorKind::TypeMismatch(format!("{:?} is not a number", other)).into()),
        }
    }

    pub fn try_into_bool(self) -> Result<bool> {
        match self {
            Value::Boolean(b) => Ok(b),
            other => Err(ErrorKind::TypeMismatch(format!("{:?} is not a boolean", other)).into()),
        }
    }

    pub fn try_into_string(self) -> Result<Rc<String>> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(ErrorKind::TypeMismatch(format!("{:?} is not a string", other)).into()),
        }
    }

    pub fn try_into_quotation(self) -> Result<Rc<Quotation>> {
        match self {
            Value::Quotation(q) => Ok(q),
            other => {
                Err(ErrorKind::TypeMismatch(format!("{:?} is not a quotation", other)).into())
            }
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Value {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Number(Number::Int(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Value {
        Value::Number(Number::Float(f))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(Rc::new(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(Rc::new(s))
    }
}

impl From<Rc<String>> for Value {
    fn from(s: Rc<String>) -> Value {
        Value::String(s)
    }
}

impl From<Quotation> for Value {
    fn from(q: Quotation) -> Value {
        Value::Quotation(Rc::new(q))
    }
}

impl From<Rc<Quotation>> for Value {
    fn from(q: Rc<Quotation>) -> Value {
        Value::Quotation(q)
    }
}

// The comparisons against bare Rust values are variant-strict, so tests can
// tell an integer result apart from an equal float.

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Value::Number(Number::Int(i)) => i == other,
            _ => false,
        }
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        match self {
            Value::Number(Number::Float(f)) => f == other,
            _ => false,
        }
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        match self {
            Value::Boolean(b) => b == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        match self {
            Value::String(s) => s.as_str() == *other,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Quotation(q) => write!(f, "{}", q),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_report_the_offending_value() {
        let err = Value::from(true).try_into_number().unwrap_err();
        assert!(err.to_string().contains("is not a number"));
        assert!(Value::from(1i64).try_into_bool().is_err());
        assert!(Value::from("q").try_into_quotation().is_err());
    }

    #[test]
    fn comparisons_are_variant_strict() {
        assert_eq!(Value::from(5i64), 5i64);
        assert_ne!(Value::from(5i64), 5.0);
        assert_ne!(Value::from(5.0), 5i64);
        assert_eq!(Value::from("hi"), "hi");
    }

    #[test]
    fn rendering() {
        assert_eq!(format!("{}", Value::from(5i64)), "5");
        assert_eq!(format!("{}", Value::from(0.4)), "0.400000");
        assert_eq!(format!("{}", Value::from(true)), "true");
        assert_eq!(format!("{}", Value::from("hi")), "\"hi\"");
    }
}
