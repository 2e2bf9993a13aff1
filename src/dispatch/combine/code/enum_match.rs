//! Reference strategy: exhaustive match on the tagged union.
//!
//! The compiler sees the whole closed set at once, so this is the shape it
//! can optimize most freely (jump table or branch chain, its choice).

use crate::dispatch::error::DispatchError;
use crate::dispatch::sink::Sink;
use crate::dispatch::workload::TableInstr;

/// One full pass: combine every operand pair via the enum match and
/// forward each result to the sink.
#[inline(never)]
pub fn run(instrs: &[TableInstr], sink: &mut dyn Sink) -> Result<(), DispatchError> {
    for instr in instrs {
        let out = instr.lhs.combine(&instr.rhs)?;
        sink.value(&out);
    }
    Ok(())
}
