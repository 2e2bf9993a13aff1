//! Tagged-union payload model.
//!
//! The closed set of payload variants and their single semantic operation:
//! combining two values of the same variant. This is the "sealed" rendition
//! of the payload set; `payload` holds the open trait-object rendition of
//! the same four shapes.

use std::fmt;

use crate::dispatch::error::DispatchError;

/// Discriminant of a payload variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    Float,
    Double,
    Text,
}

impl ValueKind {
    /// All variants in opcode order.
    pub const ALL: [ValueKind; 4] = [
        ValueKind::Int,
        ValueKind::Float,
        ValueKind::Double,
        ValueKind::Text,
    ];
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Double => "double",
            ValueKind::Text => "text",
        };
        f.write_str(name)
    }
}

/// An immutable payload value. Combine never mutates an operand; it always
/// allocates the result.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i32),
    Float(f32),
    Double(f64),
    Text(String),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Double(_) => ValueKind::Double,
            Value::Text(_) => ValueKind::Text,
        }
    }

    /// Combine two values of the same variant: numeric addition for the
    /// numeric variants (wrapping for `Int`), concatenation for `Text`.
    /// Mixing variants is a caller error and fails without coercing.
    pub fn combine(&self, other: &Value) -> Result<Value, DispatchError> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_add(*b))),
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a + b)),
            (Value::Double(a), Value::Double(b)) => Ok(Value::Double(a + b)),
            (Value::Text(a), Value::Text(b)) => {
                let mut out = String::with_capacity(a.len() + b.len());
                out.push_str(a);
                out.push_str(b);
                Ok(Value::Text(out))
            }
            (a, b) => Err(DispatchError::VariantMismatch {
                left: a.kind(),
                right: b.kind(),
            }),
        }
    }
}
