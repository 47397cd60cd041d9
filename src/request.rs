//! Caller-facing request shape and upstream validation
//!
//! JSON callers supply percentages as whole numbers (6.5 meaning 6.5%); the
//! engine always works in decimal fractions. The engine itself never
//! validates — these checks belong to the calling layer and run before any
//! engine function is invoked.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::loan::{HelocInput, MortgageInput};

/// Raw calculator request as submitted by a caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorRequest {
    /// Original loan amount
    pub principal: f64,

    /// Annual mortgage rate in percent (6.5 = 6.5%)
    pub annual_interest_rate: f64,

    /// Loan term in months
    pub term_in_months: u32,

    /// Outstanding balance today, if the loan is seasoned
    #[serde(default)]
    pub current_balance: Option<f64>,

    /// Override for the scheduled monthly payment
    #[serde(default)]
    pub monthly_payment: Option<f64>,

    /// HELOC credit limit
    #[serde(default)]
    pub heloc_limit: f64,

    /// HELOC annual rate in percent
    #[serde(default)]
    pub heloc_rate: f64,

    /// Monthly discretionary income
    #[serde(default)]
    pub discretionary_income: f64,
}

/// Why a request was rejected before reaching the engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("principal must be positive, got {0}")]
    NonPositivePrincipal(f64),

    #[error("annual interest rate must be between 0 and 100 percent, got {0}")]
    InterestRateOutOfRange(f64),

    #[error("term must be at least 1 month")]
    ZeroTerm,

    #[error("current balance cannot be negative, got {0}")]
    NegativeCurrentBalance(f64),

    #[error("monthly payment cannot be negative, got {0}")]
    NegativeMonthlyPayment(f64),

    #[error("HELOC limit cannot be negative, got {0}")]
    NegativeHelocLimit(f64),

    #[error("HELOC rate must be between 0 and 100 percent, got {0}")]
    HelocRateOutOfRange(f64),

    #[error("discretionary income cannot be negative, got {0}")]
    NegativeDiscretionaryIncome(f64),
}

impl CalculatorRequest {
    /// Check every upstream rule; the first violation wins
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.principal > 0.0) {
            return Err(ValidationError::NonPositivePrincipal(self.principal));
        }
        if !(0.0..=100.0).contains(&self.annual_interest_rate) {
            return Err(ValidationError::InterestRateOutOfRange(
                self.annual_interest_rate,
            ));
        }
        if self.term_in_months == 0 {
            return Err(ValidationError::ZeroTerm);
        }
        if let Some(balance) = self.current_balance {
            if balance < 0.0 {
                return Err(ValidationError::NegativeCurrentBalance(balance));
            }
        }
        if let Some(payment) = self.monthly_payment {
            if payment < 0.0 {
                return Err(ValidationError::NegativeMonthlyPayment(payment));
            }
        }
        if self.heloc_limit < 0.0 {
            return Err(ValidationError::NegativeHelocLimit(self.heloc_limit));
        }
        if !(0.0..=100.0).contains(&self.heloc_rate) {
            return Err(ValidationError::HelocRateOutOfRange(self.heloc_rate));
        }
        if self.discretionary_income < 0.0 {
            return Err(ValidationError::NegativeDiscretionaryIncome(
                self.discretionary_income,
            ));
        }
        Ok(())
    }

    /// Validate, then convert percent units to the engine's decimal
    /// fractions, producing both inputs over the same underlying mortgage
    pub fn to_inputs(&self) -> Result<(MortgageInput, HelocInput), ValidationError> {
        self.validate()?;

        let mortgage = MortgageInput {
            principal: self.principal,
            annual_interest_rate: self.annual_interest_rate / 100.0,
            term_in_months: self.term_in_months,
            current_balance: self.current_balance,
            monthly_payment: self.monthly_payment,
        };
        let heloc = HelocInput::for_mortgage(
            &mortgage,
            self.heloc_limit,
            self.heloc_rate / 100.0,
            self.discretionary_income,
        );

        Ok((mortgage, heloc))
    }
}
