//! Benchmark session driver and raw CSV export.

use crate::registry::{AlgorithmRunner, Seeding};
use crate::utils::timer::{measure_variants, TimingConfig, VariantResult};

/// Results for one workload size
pub struct SizeResults {
    pub size: usize,
    pub results: Vec<VariantResult>,
}

/// Run one algorithm over each workload size.
///
/// One session per size: the runner materializes its workloads when the
/// closures are built and releases them when measurement finishes.
pub fn run_benchmarks(
    algo: &dyn AlgorithmRunner,
    sizes: &[usize],
    seeding: Seeding,
    config: &TimingConfig,
) -> Vec<SizeResults> {
    sizes
        .iter()
        .map(|&size| {
            let variants = algo.variant_closures(size, seeding);
            SizeResults {
                size,
                results: measure_variants(variants, config),
            }
        })
        .collect()
}

/// Raw timing data for a single variant (used for CSV export)
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub avg_nanos: u64,
    pub result_sample: Option<f64>,
}

/// Flatten per-size results into CSV rows
pub fn collect_raw(algo_name: &str, per_size: &[SizeResults]) -> Vec<RawTimingData> {
    per_size
        .iter()
        .flat_map(|size_results| {
            size_results.results.iter().map(|r| RawTimingData {
                algo_name: algo_name.to_string(),
                variant_name: r.name.clone(),
                input_size: size_results.size,
                avg_nanos: r.avg_time.as_nanos() as u64,
                result_sample: r.result_sample,
            })
        })
        .collect()
}

/// Export timing data to CSV file
pub fn export_csv(path: &str, data: &[RawTimingData]) -> std::io::Result<()> {
    use std::io::Write;

    let mut file = std::fs::File::create(path)?;

    writeln!(file, "algorithm,variant,input_size,avg_time_ns,result")?;

    for entry in data {
        writeln!(
            file,
            "{},{},{},{},{}",
            entry.algo_name,
            entry.variant_name,
            entry.input_size,
            entry.avg_nanos,
            entry
                .result_sample
                .map(|v| v.to_string())
                .unwrap_or_default()
        )?;
    }

    Ok(())
}
