//! Open/virtual strategy over boxed payloads.
//!
//! The caller never branches: `combine` goes straight through the trait
//! object and the concrete implementation is selected by the payload's own
//! identity. With four unrelated sibling implementations in the program,
//! this is the worst case for devirtualization analysis.

use crate::dispatch::error::DispatchError;
use crate::dispatch::payload::Payload;
use crate::dispatch::sink::Sink;

/// One full pass over the payload workload.
#[inline(never)]
pub fn run(
    pairs: &[(Box<dyn Payload>, Box<dyn Payload>)],
    sink: &mut dyn Sink,
) -> Result<(), DispatchError> {
    for (lhs, rhs) in pairs {
        let out = lhs.combine(rhs.as_ref())?;
        sink.payload(out.as_ref());
    }
    Ok(())
}
