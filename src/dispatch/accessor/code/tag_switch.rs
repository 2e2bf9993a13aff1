//! Tag-switch strategy: read the discriminant, branch on it, downcast to
//! the statically known concrete variant, invoke its accessor.
//!
//! In the family representation the discriminant read is itself a virtual
//! call; the match that follows is exhaustive over the four kinds, so the
//! only failure path is a downcast whose tag lied about the concrete type.

use crate::dispatch::error::DispatchError;
use crate::dispatch::instr::{downcast, Bar, Baz, Foo, FooBar, InstrKind, Instruction};
use crate::dispatch::sink::Sink;

/// Dispatch one element.
pub fn dispatch(instr: &dyn Instruction, sink: &mut dyn Sink) -> Result<(), DispatchError> {
    match instr.kind() {
        InstrKind::Foo => sink.int(downcast::<Foo>(instr)?.value()),
        InstrKind::Bar => sink.text(downcast::<Bar>(instr)?.label()),
        InstrKind::Baz => sink.double(downcast::<Baz>(instr)?.scale()),
        InstrKind::FooBar => sink.float(downcast::<FooBar>(instr)?.blend()),
    }
    Ok(())
}

/// One full pass over the family workload.
#[inline(never)]
pub fn run(instrs: &[Box<dyn Instruction>], sink: &mut dyn Sink) -> Result<(), DispatchError> {
    for instr in instrs {
        dispatch(instr.as_ref(), sink)?;
    }
    Ok(())
}
