//! Run strategy comparisons for every scenario in a CSV definition file
//!
//! Usage: cargo run --bin run_batch [scenarios.csv] [output_prefix]
//!
//! Writes <prefix>.csv with one summary row per scenario and <prefix>.json
//! with the full comparison results.

use anyhow::{anyhow, Context};
use heloc_accelerator::scenario::{self, ScenarioOutcome, DEFAULT_SCENARIOS_PATH};
use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let scenarios_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_SCENARIOS_PATH);
    let output_prefix = args.get(2).map(String::as_str).unwrap_or("batch_results");

    let start = Instant::now();
    println!("Loading scenarios from {}...", scenarios_path);

    let scenarios = scenario::load_scenarios(Path::new(scenarios_path))
        .map_err(|e| anyhow!("failed to load {}: {}", scenarios_path, e))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    println!("Running comparisons...");
    let run_start = Instant::now();
    let outcomes = scenario::run_batch(&scenarios);
    log::info!(
        "{} comparisons finished in {:?}",
        outcomes.len(),
        run_start.elapsed()
    );

    let csv_path = format!("{}.csv", output_prefix);
    write_summary_csv(&csv_path, &outcomes)?;
    println!("Summary written to: {}", csv_path);

    let json_path = format!("{}.json", output_prefix);
    let json = serde_json::to_string_pretty(&outcomes)?;
    File::create(&json_path)
        .and_then(|mut f| f.write_all(json.as_bytes()))
        .with_context(|| format!("writing {}", json_path))?;
    println!("Full results written to: {}", json_path);

    // Console recap, best savings first
    let mut ranked: Vec<&ScenarioOutcome> = outcomes.iter().collect();
    ranked.sort_by(|a, b| {
        b.result
            .comparison
            .interest_saved
            .total_cmp(&a.result.comparison.interest_saved)
    });

    println!("\n{:<20} {:>8} {:>8} {:>12} {:>14} {:>8}", "Scenario", "TradMo", "HelocMo", "MonthsSaved", "InterestSaved", "Saved%");
    println!("{}", "-".repeat(74));
    for outcome in ranked {
        println!(
            "{:<20} {:>8} {:>8} {:>12} {:>14.2} {:>7.1}%",
            outcome.name,
            outcome.result.traditional.payoff_months,
            outcome.result.heloc.payoff_months,
            outcome.result.comparison.time_saved_months,
            outcome.result.comparison.interest_saved,
            outcome.result.comparison.percentage_interest_saved,
        );
    }

    println!("\nDone in {:?}", start.elapsed());
    Ok(())
}

fn write_summary_csv(path: &str, outcomes: &[ScenarioOutcome]) -> anyhow::Result<()> {
    let mut file = File::create(path).with_context(|| format!("creating {}", path))?;

    writeln!(file, "Name,TraditionalMonths,HelocMonths,TimeSavedMonths,TraditionalInterest,HelocInterest,InterestSaved,PctInterestSaved,MaxHelocUsed,AvgHelocBalance")?;
    for outcome in outcomes {
        let r = &outcome.result;
        writeln!(
            file,
            "{},{},{},{},{:.2},{:.2},{:.2},{:.4},{:.2},{:.2}",
            outcome.name,
            r.traditional.payoff_months,
            r.heloc.payoff_months,
            r.comparison.time_saved_months,
            r.traditional.total_interest,
            r.heloc.total_interest,
            r.comparison.interest_saved,
            r.comparison.percentage_interest_saved,
            r.heloc.max_heloc_used,
            r.heloc.average_heloc_balance,
        )?;
    }
    Ok(())
}
