//! Generic CLI for running the dispatch benchmarks.
//!
//! Usage:
//!   dispatch-bench                     # Run all comparisons
//!   dispatch-bench --list              # List available algorithms
//!   dispatch-bench accessor_dispatch   # Run a specific comparison
//!   dispatch-bench --help              # Show help

use std::env;

use dispatch_bench::registry::{build_registry, Seeding};
use dispatch_bench::tui;
use dispatch_bench::utils::bench::time_seed;
use dispatch_bench::utils::runner;
use dispatch_bench::utils::timer::TimingConfig;

fn main() {
    let args: Vec<String> = env::args().collect();
    let registry = build_registry();

    // Parse arguments
    let mut show_list = false;
    let mut show_help = false;
    let mut sizes: Vec<usize> = vec![1024, 16384, 262144];
    let mut runs: usize = 30;
    let mut seed: Option<u64> = None;
    let mut independent = false;
    let mut csv_path: Option<String> = None;
    let mut algorithm_filter: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--sizes" => {
                i += 1;
                if i < args.len() {
                    sizes = args[i]
                        .split(',')
                        .filter_map(|s| s.trim().parse().ok())
                        .collect();
                }
            }
            "--runs" | "-r" => {
                i += 1;
                if i < args.len() {
                    runs = args[i].parse().unwrap_or(30);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--independent" => independent = true,
            "--csv" => {
                i += 1;
                if i < args.len() {
                    csv_path = Some(args[i].clone());
                }
            }
            arg if !arg.starts_with('-') => {
                algorithm_filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if show_help {
        tui::print_help();
        return;
    }

    if show_list {
        tui::print_available_algorithms(&registry);
        return;
    }

    let seeding = if independent {
        Seeding::Independent
    } else {
        Seeding::Shared(seed.unwrap_or_else(time_seed))
    };
    let config = TimingConfig {
        runs_per_variant: runs.max(1),
        ..TimingConfig::default()
    };

    tui::print_header();
    if let Seeding::Shared(s) = seeding {
        println!("  Workload seed: {} (shared by all variants)", s);
        println!();
    }

    let selected: Vec<&dyn dispatch_bench::registry::AlgorithmRunner> = match &algorithm_filter {
        Some(name) => match registry.find(name) {
            Some(algo) => vec![algo],
            None => {
                eprintln!("Algorithm '{}' not found.", name);
                eprintln!("Available: {:?}", registry.list_names());
                std::process::exit(1);
            }
        },
        None => registry.all().iter().map(|a| a.as_ref()).collect(),
    };

    let mut raw = Vec::new();
    for algo in selected {
        raw.extend(tui::run_and_display(algo, &sizes, seeding, &config));
    }

    if let Some(path) = csv_path {
        match runner::export_csv(&path, &raw) {
            Ok(()) => println!("  Raw data exported to: {}", path),
            Err(e) => eprintln!("  Warning: Failed to export CSV: {}", e),
        }
        println!();
    }

    println!("Note: Speedup is relative to the first variant of each comparison.");
}
