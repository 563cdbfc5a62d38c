//! A small dynamic value type and the destructuring interface.

use std::fmt;

/// Values whose elements the `tuple()` pattern can destructure.
///
/// Each accessor must agree with the others on which values have elements.
pub trait Destructure: Sized {
    fn elements(&self) -> Option<&[Self]>;

    fn elements_mut(&mut self) -> Option<&mut [Self]>;

    /// Split into owned elements, or hand the value back unchanged.
    fn into_elements(self) -> Result<Vec<Self>, Self>;
}

/// Dynamic value for exercising the matcher.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Unit,
    Bool(bool),
    Int(i64),
    Str(String),
    Tuple(Vec<Value>),
}

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    #[inline]
    pub fn tuple(elements: Vec<Value>) -> Self {
        Value::Tuple(elements)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unit => "void",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Str(_) => "str",
            Value::Tuple(_) => "tuple",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// `false`, `0`, `""`, `()` and the empty tuple are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Unit => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Str(s) => !s.is_empty(),
            Value::Tuple(elements) => !elements.is_empty(),
        }
    }
}

impl Destructure for Value {
    fn elements(&self) -> Option<&[Self]> {
        match self {
            Value::Tuple(elements) => Some(elements.as_slice()),
            _ => None,
        }
    }

    fn elements_mut(&mut self) -> Option<&mut [Self]> {
        match self {
            Value::Tuple(elements) => Some(elements.as_mut_slice()),
            _ => None,
        }
    }

    fn into_elements(self) -> Result<Vec<Self>, Self> {
        match self {
            Value::Tuple(elements) => Ok(elements),
            other => Err(other),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => f.write_str("()"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::Tuple(elements) => {
                f.write_str("(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Unit
    }
}

// Literal comparisons, so `eq(0)` and `eq("zero")` work on `Value` subjects.

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other.as_int() == Some(*self)
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other.as_bool() == Some(*self)
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other.as_str() == Some(*self)
    }
}
