//! Error taxonomy for the dispatch strategies.
//!
//! Every variant here is a precondition or invariant violation: generated
//! workloads never trigger them, so a strategy pass that returns one has been
//! fed malformed data and must abort loudly rather than coerce.

use crate::dispatch::instr::InstrKind;
use crate::dispatch::value::ValueKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// Combine invoked across two different payload variants.
    #[error("cannot combine a {left} value with a {right} value")]
    VariantMismatch { left: ValueKind, right: ValueKind },

    /// A table operator or concrete payload received an operand of a
    /// variant other than its own.
    #[error("expected a {expected} operand, found {found}")]
    OperandMismatch { expected: ValueKind, found: ValueKind },

    /// Opcode outside the operator table.
    #[error("opcode {0} has no table entry")]
    InvalidOpcode(u8),

    /// An instruction's discriminant disagrees with its concrete type.
    #[error("instruction tagged {tag} is not a {tag} instruction")]
    TagMismatch { tag: InstrKind },

    /// A type-test chain exhausted all four instruction types.
    #[error("instruction does not belong to the closed instruction set")]
    ForeignInstruction,

    /// A type-test chain exhausted all four payload types.
    #[error("payload does not belong to the closed payload set")]
    ForeignPayload,
}
