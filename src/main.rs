//! HELOC Accelerator CLI
//!
//! Compares a traditional amortization payoff against the HELOC-accelerated
//! strategy for a single mortgage and prints the savings summary.

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use heloc_accelerator::{
    calculate_heloc_acceleration, compare_strategies, generate_amortization_schedule,
    comparison::payoff_date,
    CalculatorRequest,
};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Command-line arguments. Rates are whole-number percentages, matching how
/// people quote them (6.5 = 6.5%).
#[derive(Debug, Parser)]
#[command(name = "heloc-accelerator", version, about = "Mortgage payoff strategy comparison")]
struct Args {
    /// Original loan amount
    #[arg(long, default_value_t = 300_000.0)]
    principal: f64,

    /// Annual mortgage rate in percent
    #[arg(long, default_value_t = 6.5)]
    rate: f64,

    /// Loan term in months
    #[arg(long, default_value_t = 360)]
    term_months: u32,

    /// Outstanding balance today, if the loan is seasoned
    #[arg(long)]
    current_balance: Option<f64>,

    /// Override for the scheduled monthly payment
    #[arg(long)]
    monthly_payment: Option<f64>,

    /// HELOC credit limit
    #[arg(long, default_value_t = 25_000.0)]
    heloc_limit: f64,

    /// HELOC annual rate in percent
    #[arg(long, default_value_t = 8.0)]
    heloc_rate: f64,

    /// Monthly discretionary income swept into the strategy
    #[arg(long, default_value_t = 500.0)]
    discretionary: f64,

    /// Start date (YYYY-MM-DD) for projecting calendar payoff dates
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Write both monthly schedules as CSV files into this directory
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let request = CalculatorRequest {
        principal: args.principal,
        annual_interest_rate: args.rate,
        term_in_months: args.term_months,
        current_balance: args.current_balance,
        monthly_payment: args.monthly_payment,
        heloc_limit: args.heloc_limit,
        heloc_rate: args.heloc_rate,
        discretionary_income: args.discretionary,
    };
    let (mortgage, heloc) = request.to_inputs()?;

    let result = compare_strategies(&mortgage, &heloc);

    println!("HELOC Accelerator v{}", env!("CARGO_PKG_VERSION"));
    println!("=====================\n");
    println!("Mortgage: ${:.2} at {:.3}% over {} months", args.principal, args.rate, args.term_months);
    println!("HELOC:    ${:.2} limit at {:.3}%", args.heloc_limit, args.heloc_rate);
    println!("Surplus:  ${:.2}/month\n", args.discretionary);

    println!("{:<28} {:>14} {:>14}", "", "Traditional", "HELOC");
    println!("{}", "-".repeat(58));
    println!(
        "{:<28} {:>14} {:>14}",
        "Payoff months", result.traditional.payoff_months, result.heloc.payoff_months
    );
    println!(
        "{:<28} {:>14.2} {:>14.2}",
        "Total interest", result.traditional.total_interest, result.heloc.total_interest
    );
    println!(
        "{:<28} {:>14.2} {:>14.2}",
        "First-month payment", result.traditional.monthly_payment, result.heloc.first_month_payment
    );

    if let Some(start) = args.start_date {
        println!(
            "{:<28} {:>14} {:>14}",
            "Projected payoff date",
            payoff_date(start, result.traditional.payoff_months).to_string(),
            payoff_date(start, result.heloc.payoff_months).to_string(),
        );
    }

    println!("\nSavings:");
    println!(
        "  Time saved: {} months ({:.1} years)",
        result.comparison.time_saved_months, result.comparison.time_saved_years
    );
    println!(
        "  Interest saved: ${:.2} ({:.1}% of traditional interest)",
        result.comparison.interest_saved, result.comparison.percentage_interest_saved
    );
    println!(
        "  Monthly payment difference: ${:.2}",
        result.comparison.monthly_payment_difference
    );
    println!(
        "  Peak HELOC balance: ${:.2} (average ${:.2})",
        result.heloc.max_heloc_used, result.heloc.average_heloc_balance
    );

    if let Some(dir) = args.export_dir {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("creating export directory {}", dir.display()))?;
        export_traditional(&dir, &mortgage)?;
        export_heloc(&dir, &heloc)?;
        println!("\nSchedules written to: {}", dir.display());
    }

    Ok(())
}

fn export_traditional(
    dir: &std::path::Path,
    mortgage: &heloc_accelerator::MortgageInput,
) -> anyhow::Result<()> {
    let schedule = generate_amortization_schedule(mortgage);
    let path = dir.join("traditional_schedule.csv");
    let mut file = File::create(&path)
        .with_context(|| format!("creating {}", path.display()))?;

    writeln!(file, "Month,BeginningBalance,Payment,Principal,Interest,EndingBalance,CumulativePrincipal,CumulativeInterest")?;
    for row in &schedule.payments {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            row.month,
            row.beginning_balance,
            row.payment_amount,
            row.principal_payment,
            row.interest_payment,
            row.ending_balance,
            row.cumulative_principal,
            row.cumulative_interest,
        )?;
    }
    Ok(())
}

fn export_heloc(
    dir: &std::path::Path,
    heloc: &heloc_accelerator::HelocInput,
) -> anyhow::Result<()> {
    let result = calculate_heloc_acceleration(heloc);
    let path = dir.join("heloc_schedule.csv");
    let mut file = File::create(&path)
        .with_context(|| format!("creating {}", path.display()))?;

    writeln!(file, "Month,BeginningBalance,Payment,Principal,Interest,ExtraPrincipal,EndingBalance,HelocDraw,HelocInterest,HelocBalance,TotalPayment")?;
    for row in &result.schedule {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            row.month,
            row.beginning_balance,
            row.payment_amount,
            row.principal_payment,
            row.interest_payment,
            row.extra_principal,
            row.ending_balance,
            row.heloc_draw,
            row.heloc_interest,
            row.heloc_balance,
            row.total_monthly_payment,
        )?;
    }
    Ok(())
}
