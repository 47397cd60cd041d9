//! Fixed-rate amortization: payment math and schedule generation

mod payment;
mod engine;
mod schedule;

pub use payment::{calculate_monthly_payment, calculate_remaining_balance};
pub use engine::{generate_amortization_schedule, PAYOFF_TOLERANCE};
pub use schedule::{AmortizationSchedule, PaymentRecord};
