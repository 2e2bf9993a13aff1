//! Opcode-table strategy: indirect call through a fixed array of operator
//! objects indexed by a small integer opcode.
//!
//! This isolates "indirect call through a data array" from "virtual
//! dispatch through object identity": the callee is chosen by the opcode
//! carried next to the operands, not by what the operands are.

use crate::dispatch::error::DispatchError;
use crate::dispatch::sink::Sink;
use crate::dispatch::value::{Value, ValueKind};
use crate::dispatch::workload::TableInstr;

/// A single table entry. Each operator handles exactly one payload variant
/// and rejects operands of any other variant.
pub trait TableOp: Sync {
    fn combine(&self, lhs: &Value, rhs: &Value) -> Result<Value, DispatchError>;
}

struct IntOp;
struct FloatOp;
struct DoubleOp;
struct TextOp;

fn mismatch(expected: ValueKind, lhs: &Value, rhs: &Value) -> DispatchError {
    let found = if lhs.kind() != expected {
        lhs.kind()
    } else {
        rhs.kind()
    };
    DispatchError::OperandMismatch { expected, found }
}

impl TableOp for IntOp {
    fn combine(&self, lhs: &Value, rhs: &Value) -> Result<Value, DispatchError> {
        match (lhs, rhs) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_add(*b))),
            _ => Err(mismatch(ValueKind::Int, lhs, rhs)),
        }
    }
}

impl TableOp for FloatOp {
    fn combine(&self, lhs: &Value, rhs: &Value) -> Result<Value, DispatchError> {
        match (lhs, rhs) {
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a + b)),
            _ => Err(mismatch(ValueKind::Float, lhs, rhs)),
        }
    }
}

impl TableOp for DoubleOp {
    fn combine(&self, lhs: &Value, rhs: &Value) -> Result<Value, DispatchError> {
        match (lhs, rhs) {
            (Value::Double(a), Value::Double(b)) => Ok(Value::Double(a + b)),
            _ => Err(mismatch(ValueKind::Double, lhs, rhs)),
        }
    }
}

impl TableOp for TextOp {
    fn combine(&self, lhs: &Value, rhs: &Value) -> Result<Value, DispatchError> {
        match (lhs, rhs) {
            (Value::Text(a), Value::Text(b)) => {
                let mut out = String::with_capacity(a.len() + b.len());
                out.push_str(a);
                out.push_str(b);
                Ok(Value::Text(out))
            }
            _ => Err(mismatch(ValueKind::Text, lhs, rhs)),
        }
    }
}

/// The operator table, indexed by opcode in `ValueKind::ALL` order.
pub static OPS: [&dyn TableOp; 4] = [&IntOp, &FloatOp, &DoubleOp, &TextOp];

/// Dispatch one element: index the table, invoke the entry.
pub fn dispatch(opcode: u8, lhs: &Value, rhs: &Value) -> Result<Value, DispatchError> {
    let op = OPS
        .get(opcode as usize)
        .ok_or(DispatchError::InvalidOpcode(opcode))?;
    op.combine(lhs, rhs)
}

/// One full pass over the table workload.
#[inline(never)]
pub fn run(instrs: &[TableInstr], sink: &mut dyn Sink) -> Result<(), DispatchError> {
    for instr in instrs {
        let out = dispatch(instr.opcode, &instr.lhs, &instr.rhs)?;
        sink.value(&out);
    }
    Ok(())
}
