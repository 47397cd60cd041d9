//! Output structures for HELOC acceleration runs

use serde::{Deserialize, Serialize};

/// A single simulated month of the combined mortgage + HELOC position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelocPaymentRecord {
    /// Month number, 1-indexed
    pub month: u32,

    // Mortgage side
    /// Mortgage balance at the start of the month
    pub beginning_balance: f64,
    /// Regular mortgage payment applied (principal + interest split)
    pub payment_amount: f64,
    /// Principal portion of the regular payment
    pub principal_payment: f64,
    /// Interest portion of the regular payment
    pub interest_payment: f64,
    /// Extra principal applied this month (HELOC draw + direct sweep)
    pub extra_principal: f64,
    /// Mortgage balance after all principal applied
    pub ending_balance: f64,

    // HELOC side
    /// Amount drawn from the line this month
    pub heloc_draw: f64,
    /// HELOC interest accrued this month
    pub heloc_interest: f64,
    /// HELOC interest actually paid from income this month
    pub heloc_interest_paid: f64,
    /// HELOC principal paid down from income this month
    pub heloc_principal_paid: f64,
    /// HELOC balance at the end of the month
    pub heloc_balance: f64,

    // Combined
    /// Combined outlay for the month: mortgage payment plus every
    /// discretionary dollar deployed into the strategy (line interest and
    /// paydown, income routed through the line to fund the sweep, and the
    /// direct sweep)
    pub total_monthly_payment: f64,

    // Running totals
    /// Mortgage principal retired through this month (regular + extra)
    pub cumulative_principal: f64,
    /// Mortgage interest accrued through this month
    pub cumulative_mortgage_interest: f64,
    /// HELOC interest accrued through this month
    pub cumulative_heloc_interest: f64,
}

/// Complete result of a HELOC acceleration simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelocCalculationResult {
    /// Months until the mortgage was retired (or the safety cap)
    pub payoff_months: u32,

    /// Combined mortgage + HELOC interest accrued
    pub total_interest: f64,

    /// Mortgage interest accrued
    pub total_mortgage_interest: f64,

    /// HELOC interest accrued
    pub total_heloc_interest: f64,

    /// Peak HELOC balance reached; never exceeds the credit limit
    pub max_heloc_used: f64,

    /// Mean end-of-month HELOC balance over the run (0 for an empty run)
    pub average_heloc_balance: f64,

    /// Monthly simulation rows, chronological
    pub schedule: Vec<HelocPaymentRecord>,
}

impl HelocCalculationResult {
    /// Out-of-pocket payment in the first simulated month, 0 for an empty run
    pub fn first_month_payment(&self) -> f64 {
        self.schedule
            .first()
            .map(|r| r.total_monthly_payment)
            .unwrap_or(0.0)
    }
}
