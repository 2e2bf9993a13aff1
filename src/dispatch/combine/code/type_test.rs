//! Type-test-chain strategy over boxed payloads.
//!
//! The concrete payload type is probed in a fixed order; the first
//! successful downcast wins and the combine is then invoked statically on
//! the concrete type. Equivalent outcome to the other strategies for
//! well-formed input, reached through a chain of runtime type checks
//! instead of a single tag read or a vtable.

use crate::dispatch::error::DispatchError;
use crate::dispatch::payload::{DoublePayload, FloatPayload, IntPayload, Payload, TextPayload};
use crate::dispatch::sink::Sink;

/// Dispatch one element: probe, downcast, invoke the concrete combine.
pub fn dispatch(
    lhs: &dyn Payload,
    rhs: &dyn Payload,
) -> Result<Box<dyn Payload>, DispatchError> {
    let any = lhs.as_any();
    if let Some(lhs) = any.downcast_ref::<IntPayload>() {
        lhs.combine(rhs)
    } else if let Some(lhs) = any.downcast_ref::<FloatPayload>() {
        lhs.combine(rhs)
    } else if let Some(lhs) = any.downcast_ref::<DoublePayload>() {
        lhs.combine(rhs)
    } else if let Some(lhs) = any.downcast_ref::<TextPayload>() {
        lhs.combine(rhs)
    } else {
        Err(DispatchError::ForeignPayload)
    }
}

/// One full pass over the payload workload.
#[inline(never)]
pub fn run(
    pairs: &[(Box<dyn Payload>, Box<dyn Payload>)],
    sink: &mut dyn Sink,
) -> Result<(), DispatchError> {
    for (lhs, rhs) in pairs {
        let out = dispatch(lhs.as_ref(), rhs.as_ref())?;
        sink.payload(out.as_ref());
    }
    Ok(())
}
