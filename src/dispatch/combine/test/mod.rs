//! Tests for the combine dispatch strategies.

use rand::Rng;

use super::code::{enum_match, op_table, type_test, virtual_call};
use crate::dispatch::sink::Recorder;
use crate::dispatch::workload;

/// Verify that every strategy produces the same result sequence as the
/// tagged-union reference over a shared workload.
pub fn verify_all() -> Result<(), String> {
    let seed: u64 = rand::rng().random();
    verify_seed(seed, 512)
}

fn verify_seed(seed: u64, count: usize) -> Result<(), String> {
    let values = workload::table_instrs(count, seed);
    let pairs = workload::payload_pairs(count, seed);

    let mut reference = Recorder::new();
    enum_match::run(&values, &mut reference).map_err(|e| format!("original: {}", e))?;

    let mut table = Recorder::new();
    op_table::run(&values, &mut table).map_err(|e| format!("op-table: {}", e))?;
    if table.seen != reference.seen {
        return Err(format!(
            "op-table diverged from original over {} elements (seed {})",
            count, seed
        ));
    }

    let mut chain = Recorder::new();
    type_test::run(&pairs, &mut chain).map_err(|e| format!("type-test: {}", e))?;
    if chain.seen != reference.seen {
        return Err(format!(
            "type-test diverged from original over {} elements (seed {})",
            count, seed
        ));
    }

    let mut virt = Recorder::new();
    virtual_call::run(&pairs, &mut virt).map_err(|e| format!("virtual: {}", e))?;
    if virt.seen != reference.seen {
        return Err(format!(
            "virtual diverged from original over {} elements (seed {})",
            count, seed
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    use crate::dispatch::error::DispatchError;
    use crate::dispatch::payload::{IntPayload, Payload, TextPayload};
    use crate::dispatch::value::{Value, ValueKind};

    #[test]
    fn test_all_strategies_agree() {
        verify_seed(0x0DD5_EED5, 1000).expect("strategies should agree on a shared workload");
    }

    #[test]
    fn test_empty_workload_is_a_no_op() {
        let mut sink = Recorder::new();
        enum_match::run(&[], &mut sink).unwrap();
        op_table::run(&[], &mut sink).unwrap();
        type_test::run(&[], &mut sink).unwrap();
        virtual_call::run(&[], &mut sink).unwrap();
        assert!(sink.seen.is_empty());
    }

    #[test]
    fn test_mismatch_rejected_by_every_strategy() {
        let int = Value::Int(1);
        let text = Value::Text("x".to_string());

        assert!(matches!(
            int.combine(&text),
            Err(DispatchError::VariantMismatch { .. })
        ));
        assert_eq!(
            op_table::dispatch(0, &int, &text),
            Err(DispatchError::OperandMismatch {
                expected: ValueKind::Int,
                found: ValueKind::Text,
            })
        );
        assert_eq!(
            op_table::dispatch(3, &int, &int),
            Err(DispatchError::OperandMismatch {
                expected: ValueKind::Text,
                found: ValueKind::Int,
            })
        );

        let boxed_int = IntPayload(1);
        let boxed_text = TextPayload("x".to_string());
        assert!(matches!(
            type_test::dispatch(&boxed_int, &boxed_text),
            Err(DispatchError::OperandMismatch { .. })
        ));
        assert!(matches!(
            boxed_int.combine(&boxed_text),
            Err(DispatchError::OperandMismatch { .. })
        ));
    }

    #[test]
    fn test_invalid_opcode_has_no_table_entry() {
        let int = Value::Int(1);
        assert_eq!(
            op_table::dispatch(4, &int, &int),
            Err(DispatchError::InvalidOpcode(4))
        );
        assert_eq!(
            op_table::dispatch(255, &int, &int),
            Err(DispatchError::InvalidOpcode(255))
        );
    }

    /// A payload type outside the closed set, for exercising the chain's
    /// exhaustion path.
    #[derive(Debug)]
    struct Alien;

    impl Payload for Alien {
        fn kind(&self) -> ValueKind {
            ValueKind::Int
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn combine(&self, _other: &dyn Payload) -> Result<Box<dyn Payload>, DispatchError> {
            Err(DispatchError::ForeignPayload)
        }

        fn to_value(&self) -> Value {
            Value::Int(0)
        }
    }

    #[test]
    fn test_type_test_chain_rejects_foreign_payload() {
        assert_eq!(
            type_test::dispatch(&Alien, &IntPayload(1)).unwrap_err(),
            DispatchError::ForeignPayload
        );
    }

    #[test]
    fn test_table_results_match_direct_combine() {
        for instr in workload::table_instrs(256, 0xBEEF) {
            let direct = instr.lhs.combine(&instr.rhs).unwrap();
            let tabled = op_table::dispatch(instr.opcode, &instr.lhs, &instr.rhs).unwrap();
            assert_eq!(tabled, direct);
        }
    }
}
