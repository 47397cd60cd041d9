//! Input value structures for the calculation engine
//!
//! Rates are decimal fractions (0.065 = 6.5%). Callers working in
//! whole-number percent units convert at the boundary (see `request`).

use serde::{Deserialize, Serialize};

/// Fixed-rate mortgage description for amortization runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageInput {
    /// Original loan amount
    pub principal: f64,

    /// Annual interest rate as a decimal fraction
    pub annual_interest_rate: f64,

    /// Loan term in months
    pub term_in_months: u32,

    /// Outstanding balance today, if different from the original principal
    #[serde(default)]
    pub current_balance: Option<f64>,

    /// Override for the scheduled payment; computed from the loan terms when absent
    #[serde(default)]
    pub monthly_payment: Option<f64>,
}

impl MortgageInput {
    /// Create an input with no overrides
    pub fn new(principal: f64, annual_interest_rate: f64, term_in_months: u32) -> Self {
        Self {
            principal,
            annual_interest_rate,
            term_in_months,
            current_balance: None,
            monthly_payment: None,
        }
    }

    /// Balance the schedule starts from
    pub fn starting_balance(&self) -> f64 {
        self.current_balance.unwrap_or(self.principal)
    }

    /// Scheduled payment: the override if supplied, otherwise the standard
    /// annuity payment for the original loan terms
    pub fn effective_payment(&self) -> f64 {
        self.monthly_payment.unwrap_or_else(|| {
            crate::amortization::calculate_monthly_payment(
                self.principal,
                self.annual_interest_rate,
                self.term_in_months,
            )
        })
    }
}

/// Parallel-debt inputs for the HELOC acceleration simulator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelocInput {
    /// Outstanding mortgage balance at simulation start
    pub mortgage_balance: f64,

    /// Mortgage annual rate, decimal fraction
    pub mortgage_rate: f64,

    /// Regular monthly mortgage payment
    pub mortgage_payment: f64,

    /// Credit limit of the line; 0 disables draws entirely
    pub heloc_limit: f64,

    /// HELOC annual rate, decimal fraction
    pub heloc_rate: f64,

    /// Monthly surplus available for acceleration
    pub discretionary_income: f64,
}

impl HelocInput {
    /// Build HELOC inputs describing the same underlying mortgage as
    /// `mortgage`, with the given line terms and monthly surplus
    pub fn for_mortgage(
        mortgage: &MortgageInput,
        heloc_limit: f64,
        heloc_rate: f64,
        discretionary_income: f64,
    ) -> Self {
        Self {
            mortgage_balance: mortgage.starting_balance(),
            mortgage_rate: mortgage.annual_interest_rate,
            mortgage_payment: mortgage.effective_payment(),
            heloc_limit,
            heloc_rate,
            discretionary_income,
        }
    }
}
