//! Open/virtual strategy: invoke the accessor through the shared
//! capability without any caller-side branching; the runtime resolves the
//! concrete implementation from the object's identity.

use crate::dispatch::instr::Instruction;
use crate::dispatch::sink::Sink;

/// One full pass over the family workload.
#[inline(never)]
pub fn run(instrs: &[Box<dyn Instruction>], sink: &mut dyn Sink) {
    for instr in instrs {
        instr.observe(sink);
    }
}
