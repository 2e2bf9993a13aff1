//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use terminal_size::{terminal_size, Width};

use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult, Seeding};
use crate::utils::runner::{self, RawTimingData};
use crate::utils::timer::TimingConfig;

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let variants_str = algo.available_variants().join(", ");
    let name_line = format!("Algorithm: {}", algo.name());
    let cat_line = format!("Category:  {}", algo.category());
    let desc_line = algo.description();
    let var_line = format!("Variants: {}", variants_str);

    let content_width = [
        name_line.len(),
        cat_line.len(),
        desc_line.len(),
        var_line.len(),
    ]
    .iter()
    .cloned()
    .max()
    .unwrap_or(60)
    .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    println!(
        "│ {:<width$} │",
        truncate(&name_line, content_width),
        width = content_width
    );
    println!(
        "│ {:<width$} │",
        truncate(&cat_line, content_width),
        width = content_width
    );
    println!(
        "│ {:<width$} │",
        truncate(desc_line, content_width),
        width = content_width
    );
    println!("├{}┤", border);
    println!(
        "│ {:<width$} │",
        truncate(&var_line, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

/// Print results table for a single size
pub fn print_results_table(results: &[BenchmarkResult], size: usize) {
    if results.is_empty() {
        return;
    }

    let term_width = get_term_width();
    // Compact columns: 12+12+12+9+9 = 54 chars + 5 spaces + 2 indent = 61
    let fixed_width = 61;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 54 + 5;

    let baseline_time = results
        .first()
        .map(|r| r.avg_time.as_nanos() as f64)
        .unwrap_or(1.0);

    let runs = results.first().map(|r| r.samples).unwrap_or(0);

    println!("  Size: {} ({} runs)", size, runs);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>9}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let avg_ns = result.avg_time.as_nanos() as f64;
        let speedup = baseline_time / avg_ns.max(1.0);
        let std_dev_ns = result.std_dev.as_nanos() as f64;
        let cv = if avg_ns > 0.0 { std_dev_ns / avg_ns } else { 0.0 };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}%",
            truncate(result.name.as_str(), variant_col_width),
            crate::utils::bench::format_measurement(result.avg_time),
            crate::utils::bench::format_measurement(result.min_time),
            crate::utils::bench::format_measurement(result.max_time),
            speedup,
            cv * 100.0,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Dispatch-Bench Microbenchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: dispatch-bench [OPTIONS] [ALGORITHM]");
    println!();
    println!("Options:");
    println!("  --list, -l      List all available algorithms");
    println!("  --help, -h      Show this help message");
    println!("  --sizes SIZES   Comma-separated workload sizes (default: 1024,16384,262144)");
    println!("  --runs N, -r    Number of measurement runs per variant (default: 30)");
    println!("  --seed N        Workload seed shared by all variants (default: time-based)");
    println!("  --independent   Give every variant its own workload seed");
    println!("                  (cross-variant comparisons stop being apples-to-apples)");
    println!("  --csv FILE      Export raw timings to CSV");
    println!();
    println!("Arguments:");
    println!("  ALGORITHM       Name of specific algorithm to run (omit for all)");
    println!();
    println!("Examples:");
    println!("  dispatch-bench                       # Run all dispatch comparisons");
    println!("  dispatch-bench accessor_dispatch     # Run only the accessor comparison");
    println!("  dispatch-bench --sizes 10000000      # One large workload");
    println!("  dispatch-bench --seed 1234           # Reproducible workloads");
    println!("  dispatch-bench --csv data.csv        # Export raw timings");
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<20} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
    }
}

/// Run a single algorithm benchmark, display results, and return the raw
/// rows for optional CSV export.
pub fn run_and_display(
    algo: &dyn AlgorithmRunner,
    sizes: &[usize],
    seeding: Seeding,
    config: &TimingConfig,
) -> Vec<RawTimingData> {
    print_algo_info_box(algo);

    let per_size = runner::run_benchmarks(algo, sizes, seeding, config);
    for size_results in &per_size {
        print_results_table(&size_results.results, size_results.size);
    }

    runner::collect_raw(algo.name(), &per_size)
}
