//! Type-test-chain strategy: probe the concrete instruction type in a
//! fixed order (Foo, Bar, Baz, FooBar), first match wins.
//!
//! Same outcome as the tag switch for well-formed input, reached through a
//! chain of runtime type checks instead of one indexed branch. Whether a
//! compiler can reduce the two to the same code is part of what the
//! experiment measures.

use crate::dispatch::error::DispatchError;
use crate::dispatch::instr::{Bar, Baz, Foo, FooBar, Instruction};
use crate::dispatch::sink::Sink;

/// Dispatch one element.
pub fn dispatch(instr: &dyn Instruction, sink: &mut dyn Sink) -> Result<(), DispatchError> {
    let any = instr.as_any();
    if let Some(foo) = any.downcast_ref::<Foo>() {
        sink.int(foo.value());
    } else if let Some(bar) = any.downcast_ref::<Bar>() {
        sink.text(bar.label());
    } else if let Some(baz) = any.downcast_ref::<Baz>() {
        sink.double(baz.scale());
    } else if let Some(foobar) = any.downcast_ref::<FooBar>() {
        sink.float(foobar.blend());
    } else {
        return Err(DispatchError::ForeignInstruction);
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
