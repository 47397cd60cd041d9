//! HELOC Accelerator - mortgage payoff simulation engine
//!
//! This library provides:
//! - Fixed-rate amortization schedules and closed-form remaining balances
//! - A month-by-month HELOC acceleration simulator
//! - Side-by-side strategy comparison with savings metrics
//! - Batch scenario runs and caller-facing request validation
//!
//! Every calculation is a pure function of its inputs: no I/O, no shared
//! state, bounded iteration, safe to call concurrently.

pub mod loan;
pub mod amortization;
pub mod heloc;
pub mod comparison;
pub mod scenario;
pub mod request;

// Re-export commonly used types
pub use loan::{HelocInput, MortgageInput};
pub use amortization::{
    calculate_monthly_payment, calculate_remaining_balance, generate_amortization_schedule,
    AmortizationSchedule, PaymentRecord,
};
pub use heloc::{calculate_heloc_acceleration, HelocCalculationResult, HelocPaymentRecord};
pub use comparison::{compare_strategies, ComparisonResult};
pub use request::CalculatorRequest;
pub use scenario::{Scenario, ScenarioOutcome};
