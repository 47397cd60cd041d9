//! Schedule output structures for amortization runs

use serde::{Deserialize, Serialize};

/// One month of an amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Month number, 1-indexed
    pub month: u32,

    /// Balance at the start of the month
    pub beginning_balance: f64,

    /// Amount actually paid this month (principal + interest; the final
    /// payment is smaller when the remaining balance caps the principal)
    pub payment_amount: f64,

    /// Portion applied to principal
    pub principal_payment: f64,

    /// Portion applied to interest
    pub interest_payment: f64,

    /// Balance after the payment
    pub ending_balance: f64,

    /// Running total of principal paid through this month
    pub cumulative_principal: f64,

    /// Running total of interest paid through this month
    pub cumulative_interest: f64,
}

/// Complete amortization schedule with summary figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Monthly payment rows, chronological
    pub payments: Vec<PaymentRecord>,

    /// Number of months until payoff (row count)
    pub payoff_months: u32,

    /// Scheduled monthly payment used for the run
    pub monthly_payment: f64,

    /// Total interest paid over the schedule
    pub total_interest: f64,

    /// Total of all payments made over the schedule
    pub total_payments: f64,
}

impl AmortizationSchedule {
    /// Assemble a schedule from its rows, deriving the summary fields
    pub fn from_payments(payments: Vec<PaymentRecord>, monthly_payment: f64) -> Self {
        let total_interest = payments.last().map(|r| r.cumulative_interest).unwrap_or(0.0);
        let total_payments: f64 = payments.iter().map(|r| r.payment_amount).sum();

        Self {
            payoff_months: payments.len() as u32,
            monthly_payment,
            total_interest,
            total_payments,
            payments,
        }
    }

    /// Final balance on the schedule, 0 for an empty schedule
    pub fn final_balance(&self) -> f64 {
        self.payments.last().map(|r| r.ending_balance).unwrap_or(0.0)
    }
}
