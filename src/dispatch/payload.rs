//! Open trait-object payload family.
//!
//! The same four payload shapes as `value::Value`, but as four sibling
//! structs behind a bare trait. Nothing ties the implementations together
//! beyond the trait itself, so a caller holding `&dyn Payload` has no
//! discriminant to branch on: `combine` is resolved purely by the object's
//! identity, and each implementation checks the other operand with an
//! explicit fallible downcast.

use std::any::Any;

use crate::dispatch::error::DispatchError;
use crate::dispatch::value::{Value, ValueKind};

pub trait Payload: std::fmt::Debug {
    fn kind(&self) -> ValueKind;
    fn as_any(&self) -> &dyn Any;

    /// Combine with another payload of the same concrete type. The other
    /// operand is downcast-checked; a wrong variant is an operand mismatch.
    fn combine(&self, other: &dyn Payload) -> Result<Box<dyn Payload>, DispatchError>;

    /// Snapshot as a plain `Value`, for verification.
    fn to_value(&self) -> Value;
}

#[derive(Debug)]
pub struct IntPayload(pub i32);
#[derive(Debug)]
pub struct FloatPayload(pub f32);
#[derive(Debug)]
pub struct DoublePayload(pub f64);
#[derive(Debug)]
pub struct TextPayload(pub String);

fn operand<'a, T: Any>(other: &'a dyn Payload, expected: ValueKind) -> Result<&'a T, DispatchError> {
    other
        .as_any()
        .downcast_ref::<T>()
        .ok_or(DispatchError::OperandMismatch {
            expected,
            found: other.kind(),
        })
}

impl Payload for IntPayload {
    fn kind(&self) -> ValueKind {
        ValueKind::Int
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn combine(&self, other: &dyn Payload) -> Result<Box<dyn Payload>, DispatchError> {
        let rhs = operand::<IntPayload>(other, ValueKind::Int)?;
        Ok(Box::new(IntPayload(self.0.wrapping_add(rhs.0))))
    }

    fn to_value(&self) -> Value {
        Value::Int(self.0)
    }
}

impl Payload for FloatPayload {
    fn kind(&self) -> ValueKind {
        ValueKind::Float
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn combine(&self, other: &dyn Payload) -> Result<Box<dyn Payload>, DispatchError> {
        let rhs = operand::<FloatPayload>(other, ValueKind::Float)?;
        Ok(Box::new(FloatPayload(self.0 + rhs.0)))
    }

    fn to_value(&self) -> Value {
        Value::Float(self.0)
    }
}

impl Payload for DoublePayload {
    fn kind(&self) -> ValueKind {
        ValueKind::Double
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn combine(&self, other: &dyn Payload) -> Result<Box<dyn Payload>, DispatchError> {
        let rhs = operand::<DoublePayload>(other, ValueKind::Double)?;
        Ok(Box::new(DoublePayload(self.0 + rhs.0)))
    }

    fn to_value(&self) -> Value {
        Value::Double(self.0)
    }
}

impl Payload for TextPayload {
    fn kind(&self) -> ValueKind {
        ValueKind::Text
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn combine(&self, other: &dyn Payload) -> Result<Box<dyn Payload>, DispatchError> {
        let rhs = operand::<TextPayload>(other, ValueKind::Text)?;
        let mut out = String::with_capacity(self.0.len() + rhs.0.len());
        out.push_str(&self.0);
        out.push_str(&rhs.0);
        Ok(Box::new(TextPayload(out)))
    }

    fn to_value(&self) -> Value {
        Value::Text(self.0.clone())
    }
}

/// Box a plain value into the trait-object family.
pub fn from_value(value: &Value) -> Box<dyn Payload> {
    match value {
        Value::Int(v) => Box::new(IntPayload(*v)),
        Value::Float(v) => Box::new(FloatPayload(*v)),
        Value::Double(v) => Box::new(DoublePayload(*v)),
        Value::Text(v) => Box::new(TextPayload(v.clone())),
    }
}
