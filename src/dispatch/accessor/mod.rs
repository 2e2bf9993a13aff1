//! # Accessor Dispatch Comparison
//!
//! Measures the cost of reaching a per-variant accessor on a closed set of
//! instruction kinds, through four mechanisms:
//!
//! - `sealed-enum`: closed enum, discriminant stored once, exhaustive
//!   match (reference)
//! - `tag-switch`: virtual discriminant read, branch, checked downcast,
//!   static accessor call
//! - `type-test-chain`: sequential concrete-type probes, first match wins
//! - `virtual`: accessor invoked straight through the trait object
//!
//! The family and sealed workloads are generated from the same kind
//! sequence, so under shared seeding all four variants observe the same
//! accessor order and results.

pub mod code;
pub mod test;

use std::sync::Arc;

use crate::dispatch::sink::Blackhole;
use crate::dispatch::workload;
use crate::registry::{AlgorithmRunner, Seeding};
use crate::utils::timer::Variant;

use code::{sealed, tag_switch, type_test, virtual_call};

pub struct AccessorDispatchRunner;

impl AlgorithmRunner for AccessorDispatchRunner {
    fn name(&self) -> &'static str {
        "accessor_dispatch"
    }

    fn category(&self) -> &'static str {
        "dispatch"
    }

    fn description(&self) -> &'static str {
        "Reaching per-variant accessors through four dispatch mechanisms"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        vec!["sealed-enum", "tag-switch", "type-test-chain", "virtual"]
    }

    fn variant_closures<'a>(&'a self, size: usize, seeding: Seeding) -> Vec<Variant<'a>> {
        // Workload slots follow the variant order below. The three family
        // strategies share one array under shared seeding; the sealed
        // representation always needs its own.
        let (sealed_instrs, family_a, family_b, family_c) = match seeding {
            Seeding::Shared(_) => {
                let family = Arc::new(workload::family_instrs(size, seeding.seed_for(0)));
                (
                    Arc::new(workload::sealed_instrs(size, seeding.seed_for(0))),
                    Arc::clone(&family),
                    Arc::clone(&family),
                    family,
                )
            }
            Seeding::Independent => (
                Arc::new(workload::sealed_instrs(size, seeding.seed_for(0))),
                Arc::new(workload::family_instrs(size, seeding.seed_for(1))),
                Arc::new(workload::family_instrs(size, seeding.seed_for(2))),
                Arc::new(workload::family_instrs(size, seeding.seed_for(3))),
            ),
        };

        vec![
            Variant {
                name: "sealed-enum",
                description: "Closed enum match with centralized discriminant",
                run: Box::new(move || {
                    let (elapsed, _) =
                        crate::measure!(sealed::run(&sealed_instrs, &mut Blackhole));
                    (elapsed, None)
                }),
            },
            Variant {
                name: "tag-switch",
                description: "Discriminant read, branch, checked downcast",
                run: Box::new(move || {
                    let (elapsed, result) =
                        crate::measure!(tag_switch::run(&family_a, &mut Blackhole));
                    if let Err(e) = result {
                        panic!("accessor dispatch fault in 'tag-switch': {e}");
                    }
                    (elapsed, None)
                }),
            },
            Variant {
                name: "type-test-chain",
                description: "Sequential concrete-type probes, first match wins",
                run: Box::new(move || {
                    let (elapsed, result) =
                        crate::measure!(type_test::run(&family_b, &mut Blackhole));
                    if let Err(e) = result {
                        panic!("accessor dispatch fault in 'type-test-chain': {e}");
                    }
                    (elapsed, None)
                }),
            },
            Variant {
                name: "virtual",
                description: "Accessor call through the shared capability",
                run: Box::new(move || {
                    let (elapsed, _) =
                        crate::measure!(virtual_call::run(&family_c, &mut Blackhole));
                    (elapsed, None)
                }),
            },
        ]
    }

    fn verify(&self) -> Result<(), String> {
        test::verify_all()
    }
}
