//! Tests for the accessor dispatch strategies.

use rand::Rng;

use super::code::{sealed, tag_switch, type_test, virtual_call};
use crate::dispatch::sink::Recorder;
use crate::dispatch::workload;

/// Verify that every strategy observes the same accessor sequence as the
/// sealed-enum reference over workloads built from one seed.
pub fn verify_all() -> Result<(), String> {
    let seed: u64 = rand::rng().random();
    verify_seed(seed, 512)
}

fn verify_seed(seed: u64, count: usize) -> Result<(), String> {
    let sealed_instrs = workload::sealed_instrs(count, seed);
    let family = workload::family_instrs(count, seed);

    let mut reference = Recorder::new();
    sealed::run(&sealed_instrs, &mut reference);

    let mut switched = Recorder::new();
    tag_switch::run(&family, &mut switched).map_err(|e| format!("tag-switch: {}", e))?;
    if switched.seen != reference.seen {
        return Err(format!(
            "tag-switch diverged from sealed-enum over {} elements (seed {})",
            count, seed
        ));
    }

    let mut chain = Recorder::new();
    type_test::run(&family, &mut chain).map_err(|e| format!("type-test-chain: {}", e))?;
    if chain.seen != reference.seen {
        return Err(format!(
            "type-test-chain diverged from sealed-enum over {} elements (seed {})",
            count, seed
        ));
    }

    let mut virt = Recorder::new();
    virtual_call::run(&family, &mut virt);
    if virt.seen != reference.seen {
        return Err(format!(
            "virtual diverged from sealed-enum over {} elements (seed {})",
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
    use crate::dispatch::instr::{InstrKind, Instruction};
    use crate::dispatch::sink::Sink;
    use crate::dispatch::value::Value;

    #[test]
    fn test_all_strategies_agree() {
        verify_seed(0xACC3_5503, 1000).expect("strategies should agree on a shared workload");
    }

    #[test]
    fn test_results_are_the_variant_constants() {
        let family = workload::family_instrs(64, 1234);
        let mut recorder = Recorder::new();
        tag_switch::run(&family, &mut recorder).unwrap();

        for (instr, seen) in family.iter().zip(&recorder.seen) {
            let expected = match instr.kind() {
                InstrKind::Foo => Value::Int(0),
                InstrKind::Bar => Value::Text(String::new()),
                InstrKind::Baz => Value::Double(0.0),
                InstrKind::FooBar => Value::Float(0.0),
            };
            assert_eq!(*seen, expected);
        }
    }

    #[test]
    fn test_empty_workload_is_a_no_op() {
        let mut sink = Recorder::new();
        sealed::run(&[], &mut sink);
        tag_switch::run(&[], &mut sink).unwrap();
        type_test::run(&[], &mut sink).unwrap();
        virtual_call::run(&[], &mut sink);
        assert!(sink.seen.is_empty());
    }

    /// An instruction outside the closed set whose tag claims to be Foo.
    /// Breaks the tag/type invariant on purpose.
    struct Impostor;

    impl Instruction for Impostor {
        fn kind(&self) -> InstrKind {
            InstrKind::Foo
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn observe(&self, sink: &mut dyn Sink) {
            sink.int(-1);
        }
    }

    #[test]
    fn test_tag_switch_detects_lying_tag() {
        let mut sink = Recorder::new();
        assert_eq!(
            tag_switch::dispatch(&Impostor, &mut sink).unwrap_err(),
            DispatchError::TagMismatch {
                tag: InstrKind::Foo
            }
        );
        assert!(sink.seen.is_empty());
    }

    #[test]
    fn test_type_test_chain_rejects_foreign_instruction() {
        let mut sink = Recorder::new();
        assert_eq!(
            type_test::dispatch(&Impostor, &mut sink).unwrap_err(),
            DispatchError::ForeignInstruction
        );
        assert!(sink.seen.is_empty());
    }
}
