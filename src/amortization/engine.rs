//! Month-by-month amortization schedule generation

use crate::loan::MortgageInput;
use super::schedule::{AmortizationSchedule, PaymentRecord};

/// Ending balance at or below this is treated as paid off
pub const PAYOFF_TOLERANCE: f64 = 0.005;

/// Starting balance at or below this produces an immediate-payoff schedule
const IMMEDIATE_PAYOFF_THRESHOLD: f64 = 0.5;

/// Generate a full amortization schedule for a mortgage.
///
/// Each month: `interest = balance * rate/12`, principal is the rest of the
/// payment capped at the remaining balance so the final payment never
/// overshoots. The loop ends when the ending balance drops to
/// [`PAYOFF_TOLERANCE`] or after `term_in_months` iterations — a payment too
/// small to cover interest walks the balance up until the cap stops it rather
/// than looping forever.
pub fn generate_amortization_schedule(input: &MortgageInput) -> AmortizationSchedule {
    let monthly_rate = input.annual_interest_rate / 12.0;
    let payment = input.effective_payment();
    let mut balance = input.starting_balance();

    if balance <= IMMEDIATE_PAYOFF_THRESHOLD {
        return immediate_payoff(balance, payment);
    }

    let mut payments = Vec::new();
    let mut cumulative_principal = 0.0;
    let mut cumulative_interest = 0.0;

    for month in 1..=input.term_in_months {
        let interest_payment = balance * monthly_rate;
        let principal_payment = (payment - interest_payment).min(balance);
        let ending_balance = balance - principal_payment;

        cumulative_principal += principal_payment;
        cumulative_interest += interest_payment;

        payments.push(PaymentRecord {
            month,
            beginning_balance: balance,
            payment_amount: principal_payment + interest_payment,
            principal_payment,
            interest_payment,
            ending_balance,
            cumulative_principal,
            cumulative_interest,
        });

        balance = ending_balance;
        if balance <= PAYOFF_TOLERANCE {
            break;
        }
    }

    AmortizationSchedule::from_payments(payments, payment)
}

/// Single-record schedule for a balance that is already effectively zero
fn immediate_payoff(balance: f64, payment: f64) -> AmortizationSchedule {
    let record = PaymentRecord {
        month: 1,
        beginning_balance: balance,
        payment_amount: balance,
        principal_payment: balance,
        interest_payment: 0.0,
        ending_balance: 0.0,
        cumulative_principal: balance,
        cumulative_interest: 0.0,
    };

    AmortizationSchedule::from_payments(vec![record], payment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_year_schedule_pays_off_exactly() {
        // 100k at 6% over 10 years
        let input = MortgageInput::new(100_000.0, 0.06, 120);
        let schedule = generate_amortization_schedule(&input);

        assert_eq!(schedule.payments.len(), 120);
        assert!(schedule.final_balance().abs() < 0.01);

        let last = schedule.payments.last().unwrap();
        assert!((last.cumulative_principal - 100_000.0).abs() < 0.01);
    }

    #[test]
    fn test_balance_is_non_increasing() {
        let input = MortgageInput::new(300_000.0, 0.065, 360);
        let schedule = generate_amortization_schedule(&input);

        for window in schedule.payments.windows(2) {
            assert!(window[1].ending_balance <= window[0].ending_balance);
        }
    }

    #[test]
    fn test_payment_splits_reconcile() {
        let input = MortgageInput::new(250_000.0, 0.055, 360);
        let schedule = generate_amortization_schedule(&input);

        for row in &schedule.payments {
            let split = row.principal_payment + row.interest_payment;
            assert!((row.payment_amount - split).abs() < 1e-9);
            assert!((row.ending_balance - (row.beginning_balance - row.principal_payment)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_extra_payment_shortens_payoff() {
        let base = MortgageInput::new(200_000.0, 0.06, 360);
        let accelerated = MortgageInput {
            monthly_payment: Some(base.effective_payment() + 400.0),
            ..base.clone()
        };

        let base_schedule = generate_amortization_schedule(&base);
        let fast_schedule = generate_amortization_schedule(&accelerated);

        assert!(fast_schedule.payoff_months < base_schedule.payoff_months);
        assert!(fast_schedule.total_interest < base_schedule.total_interest);
    }

    #[test]
    fn test_current_balance_override() {
        let input = MortgageInput {
            current_balance: Some(50_000.0),
            ..MortgageInput::new(200_000.0, 0.06, 360)
        };
        let schedule = generate_amortization_schedule(&input);

        // Payment stays the original-terms payment, so a smaller balance
        // retires much sooner than the full term
        assert_eq!(schedule.payments[0].beginning_balance, 50_000.0);
        assert!(schedule.payoff_months < 60);
    }

    #[test]
    fn test_insufficient_payment_stops_at_term_cap() {
        // Payment below interest-only: balance grows, loop is bounded
        let input = MortgageInput {
            monthly_payment: Some(100.0),
            ..MortgageInput::new(200_000.0, 0.06, 360)
        };
        let schedule = generate_amortization_schedule(&input);

        assert_eq!(schedule.payments.len(), 360);
        assert!(schedule.final_balance() > 200_000.0);
        assert!(schedule.final_balance().is_finite());
    }

    #[test]
    fn test_already_paid_off_single_record() {
        let input = MortgageInput {
            current_balance: Some(0.25),
            ..MortgageInput::new(200_000.0, 0.06, 360)
        };
        let schedule = generate_amortization_schedule(&input);

        assert_eq!(schedule.payments.len(), 1);
        assert_eq!(schedule.final_balance(), 0.0);
        assert_eq!(schedule.total_interest, 0.0);
    }

    #[test]
    fn test_zero_rate_schedule() {
        let input = MortgageInput::new(120_000.0, 0.0, 120);
        let schedule = generate_amortization_schedule(&input);

        assert_eq!(schedule.payments.len(), 120);
        assert_eq!(schedule.total_interest, 0.0);
        assert!((schedule.total_payments - 120_000.0).abs() < 0.01);
    }

    #[test]
    fn test_total_payments_track_scheduled_payment() {
        let input = MortgageInput::new(300_000.0, 0.065, 360);
        let schedule = generate_amortization_schedule(&input);

        // Final payment is capped at the residual, so totals agree to
        // within one scheduled payment
        let expected = schedule.monthly_payment * schedule.payoff_months as f64;
        assert!((schedule.total_payments - expected).abs() < schedule.monthly_payment);

        // Payments = principal returned + interest accrued
        assert!(
            (schedule.total_payments - (schedule.total_interest + 300_000.0)).abs() < 0.01
        );
    }

    #[test]
    fn test_repeat_runs_are_bit_identical() {
        let input = MortgageInput::new(300_000.0, 0.065, 360);
        let first = generate_amortization_schedule(&input);
        let second = generate_amortization_schedule(&input);

        assert_eq!(first.payoff_months, second.payoff_months);
        assert_eq!(first.total_interest.to_bits(), second.total_interest.to_bits());
        assert_eq!(first.total_payments.to_bits(), second.total_payments.to_bits());
    }
}
