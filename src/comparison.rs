//! Side-by-side comparison of traditional and HELOC-accelerated payoff

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::amortization::{generate_amortization_schedule, AmortizationSchedule};
use crate::heloc::{calculate_heloc_acceleration, HelocCalculationResult};
use crate::loan::{HelocInput, MortgageInput};

/// Summary of the traditional amortization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraditionalSummary {
    pub payoff_months: u32,
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_payments: f64,
}

impl From<&AmortizationSchedule> for TraditionalSummary {
    fn from(schedule: &AmortizationSchedule) -> Self {
        Self {
            payoff_months: schedule.payoff_months,
            monthly_payment: schedule.monthly_payment,
            total_interest: schedule.total_interest,
            total_payments: schedule.total_payments,
        }
    }
}

/// Summary of the HELOC acceleration run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelocSummary {
    pub payoff_months: u32,
    pub total_interest: f64,
    pub total_mortgage_interest: f64,
    pub total_heloc_interest: f64,
    pub max_heloc_used: f64,
    pub average_heloc_balance: f64,
    /// Out-of-pocket total in the first simulated month
    pub first_month_payment: f64,
}

impl From<&HelocCalculationResult> for HelocSummary {
    fn from(result: &HelocCalculationResult) -> Self {
        Self {
            payoff_months: result.payoff_months,
            total_interest: result.total_interest,
            total_mortgage_interest: result.total_mortgage_interest,
            total_heloc_interest: result.total_heloc_interest,
            max_heloc_used: result.max_heloc_used,
            average_heloc_balance: result.average_heloc_balance,
            first_month_payment: result.first_month_payment(),
        }
    }
}

/// Derived savings metrics. Signed throughout: a strategy that performs
/// worse shows up as negative savings, never clamped away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsMetrics {
    pub time_saved_months: i64,
    pub time_saved_years: f64,
    pub interest_saved: f64,
    /// Share of traditional interest avoided, in percent; 0 when the
    /// traditional run accrues no interest
    pub percentage_interest_saved: f64,
    /// First-month HELOC out-of-pocket minus the traditional payment
    pub monthly_payment_difference: f64,
}

/// Full comparison output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub traditional: TraditionalSummary,
    pub heloc: HelocSummary,
    pub comparison: SavingsMetrics,
}

/// Run both strategies on inputs describing the same underlying mortgage
/// and derive the savings metrics.
pub fn compare_strategies(mortgage: &MortgageInput, heloc: &HelocInput) -> ComparisonResult {
    let schedule = generate_amortization_schedule(mortgage);
    let acceleration = calculate_heloc_acceleration(heloc);

    let traditional = TraditionalSummary::from(&schedule);
    let heloc_summary = HelocSummary::from(&acceleration);

    let time_saved_months =
        traditional.payoff_months as i64 - heloc_summary.payoff_months as i64;
    let interest_saved = traditional.total_interest - heloc_summary.total_interest;
    let percentage_interest_saved = if traditional.total_interest.abs() < 1e-10 {
        0.0
    } else {
        interest_saved / traditional.total_interest * 100.0
    };

    let comparison = SavingsMetrics {
        time_saved_months,
        time_saved_years: time_saved_months as f64 / 12.0,
        interest_saved,
        percentage_interest_saved,
        monthly_payment_difference: heloc_summary.first_month_payment
            - traditional.monthly_payment,
    };

    ComparisonResult {
        traditional,
        heloc: heloc_summary,
        comparison,
    }
}

/// Calendar date `months_from_start` months after `start`. Saturates at the
/// calendar bounds for out-of-range projections.
pub fn payoff_date(start: NaiveDate, months_from_start: u32) -> NaiveDate {
    start
        .checked_add_months(Months::new(months_from_start))
        .unwrap_or(NaiveDate::MAX)
}
