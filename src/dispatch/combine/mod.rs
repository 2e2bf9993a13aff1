//! # Combine Dispatch Comparison
//!
//! Measures the cost of selecting and invoking the variant-specific
//! combine operation for a pair of same-variant payloads, through four
//! mechanisms:
//!
//! - `original`: exhaustive match on the tagged union (reference)
//! - `op-table`: indirect call through an opcode-indexed operator table
//! - `type-test`: chain of concrete-type probes with checked downcast
//! - `virtual`: trait-object call resolved by payload identity
//!
//! All four consume workloads with identical logical content; under shared
//! seeding the results are element-for-element identical.

pub mod code;
pub mod test;

use std::sync::Arc;

use crate::dispatch::sink::Blackhole;
use crate::dispatch::workload;
use crate::registry::{AlgorithmRunner, Seeding};
use crate::utils::timer::Variant;

use code::{enum_match, op_table, type_test, virtual_call};

pub struct CombineDispatchRunner;

impl AlgorithmRunner for CombineDispatchRunner {
    fn name(&self) -> &'static str {
        "combine_dispatch"
    }

    fn category(&self) -> &'static str {
        "dispatch"
    }

    fn description(&self) -> &'static str {
        "Combining payload pairs through four dispatch mechanisms"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        vec!["original", "op-table", "type-test", "virtual"]
    }

    fn variant_closures<'a>(&'a self, size: usize, seeding: Seeding) -> Vec<Variant<'a>> {
        // Workload slots follow the variant order below. Strategies over the
        // same representation share one array under shared seeding.
        let (values_a, values_b, pairs_a, pairs_b) = match seeding {
            Seeding::Shared(_) => {
                let values = Arc::new(workload::table_instrs(size, seeding.seed_for(0)));
                let pairs = Arc::new(workload::payload_pairs(size, seeding.seed_for(0)));
                (Arc::clone(&values), values, Arc::clone(&pairs), pairs)
            }
            Seeding::Independent => (
                Arc::new(workload::table_instrs(size, seeding.seed_for(0))),
                Arc::new(workload::table_instrs(size, seeding.seed_for(1))),
                Arc::new(workload::payload_pairs(size, seeding.seed_for(2))),
                Arc::new(workload::payload_pairs(size, seeding.seed_for(3))),
            ),
        };

        vec![
            Variant {
                name: "original",
                description: "Tagged-union match on the operand pair",
                run: Box::new(move || {
                    let (elapsed, result) =
                        crate::measure!(enum_match::run(&values_a, &mut Blackhole));
                    if let Err(e) = result {
                        panic!("combine dispatch fault in 'original': {e}");
                    }
                    (elapsed, None)
                }),
            },
            Variant {
                name: "op-table",
                description: "Indirect call through an opcode-indexed operator table",
                run: Box::new(move || {
                    let (elapsed, result) =
                        crate::measure!(op_table::run(&values_b, &mut Blackhole));
                    if let Err(e) = result {
                        panic!("combine dispatch fault in 'op-table': {e}");
                    }
                    (elapsed, None)
                }),
            },
            Variant {
                name: "type-test",
                description: "Chain of concrete-type probes with checked downcast",
                run: Box::new(move || {
                    let (elapsed, result) =
                        crate::measure!(type_test::run(&pairs_a, &mut Blackhole));
                    if let Err(e) = result {
                        panic!("combine dispatch fault in 'type-test': {e}");
                    }
                    (elapsed, None)
                }),
            },
            Variant {
                name: "virtual",
                description: "Trait-object call resolved by payload identity",
                run: Box::new(move || {
                    let (elapsed, result) =
                        crate::measure!(virtual_call::run(&pairs_b, &mut Blackhole));
                    if let Err(e) = result {
                        panic!("combine dispatch fault in 'virtual': {e}");
                    }
                    (elapsed, None)
                }),
            },
        ]
    }

    fn verify(&self) -> Result<(), String> {
        test::verify_all()
    }
}
