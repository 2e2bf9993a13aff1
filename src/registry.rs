//! Algorithm registry for dynamic benchmark discovery and execution.
//!
//! A registered algorithm exposes a set of named strategy variants as
//! timed closures; the harness owns warmup, scheduling, timing, and
//! statistics. Building the closures is the session's setup hook (the
//! workload is materialized there), and dropping them is teardown.

use crate::utils::bench::time_seed;
use crate::utils::timer::{Variant, VariantResult};

/// Result from running a variant benchmark (alias for VariantResult)
pub type BenchmarkResult = VariantResult;

/// Workload seeding policy for one benchmark session.
#[derive(Clone, Copy, Debug)]
pub enum Seeding {
    /// All variants consume workloads generated from one seed, so results
    /// are apples-to-apples. This is the default everywhere.
    Shared(u64),
    /// Every variant materializes its own workload from a distinct
    /// time-derived seed. Cross-variant comparisons are then not
    /// apples-to-apples; this mode exists for interference experiments.
    Independent,
}

impl Seeding {
    /// Seed for the workload slot at `slot`.
    pub fn seed_for(&self, slot: usize) -> u64 {
        match self {
            Seeding::Shared(seed) => *seed,
            Seeding::Independent => {
                time_seed().wrapping_add((slot as u64).wrapping_mul(0x9E3779B97F4A7C15))
            }
        }
    }
}

/// Trait that all algorithm benchmarkers must implement
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm (e.g., "combine_dispatch")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "dispatch")
    fn category(&self) -> &'static str;

    /// Get list of available variant names
    fn available_variants(&self) -> Vec<&'static str>;

    /// Setup hook: materialize the workload(s) for `size` elements under
    /// the given seeding policy and return one timed closure per strategy.
    /// Each closure performs one full pass over its workload; the harness
    /// handles warmup, scheduling, and repetition.
    fn variant_closures<'a>(&'a self, size: usize, seeding: Seeding) -> Vec<Variant<'a>>;

    /// Verify correctness of all variants against the reference
    fn verify(&self) -> Result<(), String>;
}

/// Global registry of all algorithms
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    /// Register an algorithm
    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    /// Get all registered algorithms
    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    /// List algorithm names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::dispatch::combine::CombineDispatchRunner);
    registry.register(crate::dispatch::accessor::AccessorDispatchRunner);

    registry
}
