//! Reference strategy: the closed enum representation.
//!
//! The discriminant is stored once in the enum tag and `observe` resolves
//! through an exhaustive match, so there is provably one shape for the
//! compiler to dispatch over.

use crate::dispatch::instr::SealedInstr;
use crate::dispatch::sink::Sink;

/// One full pass over the sealed workload.
#[inline(never)]
pub fn run(instrs: &[SealedInstr], sink: &mut dyn Sink) {
    for instr in instrs {
        instr.observe(sink);
    }
}
