//! Tagged argument values for event emission.
//!
//! Receivers are stored behind a uniform calling convention, so emitted
//! arguments travel as [`Value`]s: an owned, tagged representation of the
//! supported primitive kinds. [`Kind`] is the matching discriminant and is
//! what [`TypedEvent`](crate::TypedEvent) signatures are declared in.
//!
//! # Compatibility
//!
//! Kind matching is exact. There is no numeric coercion: `Value::Int(3)`
//! does not satisfy a declared [`Kind::Float`].

use std::fmt;

/// The type of a [`Value`], without the payload.
///
/// Signatures for [`TypedEvent`](crate::TypedEvent) are ordered sequences
/// of kinds, one per positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Int,
    Float,
    Str,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Str => "str",
        };
        f.write_str(name)
    }
}

/// An owned, tagged argument passed through [`emit`](crate::Event::emit).
///
/// # Example
///
/// ```rust
/// use signals::{Kind, Value};
///
/// let v = Value::from(9.0);
/// assert_eq!(v.kind(), Kind::Float);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Returns the discriminant of this value.
    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}
