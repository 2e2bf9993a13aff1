//! # Dispatch-Bench
//!
//! Microbenchmarks comparing polymorphic dispatch strategies over a small
//! closed set of tagged instruction and value types: tagged-union match,
//! opcode-table indirection, tag-switch with checked downcast, type-test
//! chains, and open virtual dispatch through trait objects.

pub mod dispatch;
pub mod registry;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export run_benchmarks from utils::runner
pub use utils::runner::run_benchmarks;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::dispatch::sink::{Blackhole, Recorder, Sink};
    pub use crate::dispatch::value::{Value, ValueKind};
    pub use crate::dispatch::workload;
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner, Seeding};
}

/// Time one expression with the configured measurement source (CPU cycles
/// by default, wall clock with the `use_time` feature). Expands to
/// `(measurement, result)`.
#[macro_export]
macro_rules! measure {
    ($e:expr) => {{
        let start = $crate::utils::bench::now();
        let result = $e;
        let elapsed = $crate::utils::bench::elapsed(start);
        (elapsed, result)
    }};
}

#[cfg(test)]
mod tests {
    use crate::registry::build_registry;

    #[test]
    fn test_all_algorithms_registry_verify() {
        let registry = build_registry();
        let algorithms = registry.all();

        for algo in algorithms {
            match algo.verify() {
                Ok(_) => println!("algorithm '{}' passed verification", algo.name()),
                Err(e) => panic!("algorithm '{}' failed verification: {}", algo.name(), e),
            }
        }
    }

    #[test]
    fn test_registry_closures_run_over_tiny_workloads() {
        use crate::registry::Seeding;
        use crate::utils::timer::{measure_variants, PinStrategy, TimingConfig};

        let config = TimingConfig {
            runs_per_variant: 2,
            warmup_iterations: 1,
            pin_strategy: PinStrategy::Global,
        };

        let registry = build_registry();
        for algo in registry.all() {
            for size in [0, 16] {
                let variants = algo.variant_closures(size, Seeding::Shared(1234));
                assert_eq!(variants.len(), algo.available_variants().len());
                let results = measure_variants(variants, &config);
                assert_eq!(results.len(), algo.available_variants().len());
            }
        }
    }
}
