//! Month-by-month HELOC acceleration simulator
//!
//! Models the parallel-debt strategy: discretionary income services the
//! line's interest first, then new draws are swept onto the mortgage as
//! extra principal, then the line itself is paid down. The interacting
//! balances make this path-dependent, so it stays an explicit bounded loop.

use crate::amortization::PAYOFF_TOLERANCE;
use crate::loan::HelocInput;
use super::records::{HelocCalculationResult, HelocPaymentRecord};
use super::state::SimulationState;

/// Hard iteration cap (50 years). Guarantees termination for any input,
/// including payments that never amortize.
pub const MAX_SIMULATION_MONTHS: u32 = 600;

/// Simulate the HELOC acceleration strategy until the mortgage is retired
/// or [`MAX_SIMULATION_MONTHS`] is reached.
///
/// Monthly order of operations:
/// 1. Apply the regular mortgage payment (same split/cap as amortization).
/// 2. Accrue HELOC interest on the balance carried into the month.
/// 3. Allocate discretionary income: HELOC interest, then a draw against
///    remaining line capacity swept onto the mortgage, then HELOC principal,
///    then any residual straight onto the mortgage. The residual step is what
///    makes a zero-limit line degenerate to plain extra-principal payments.
///
/// Interest the income cannot cover capitalizes onto the line, but the
/// balance is never allowed past `heloc_limit`, so `max_heloc_used` is
/// bounded by the limit unconditionally.
pub fn calculate_heloc_acceleration(input: &HelocInput) -> HelocCalculationResult {
    let mut state = SimulationState::from_input(input);
    let mut schedule = Vec::new();

    while state.mortgage_balance > PAYOFF_TOLERANCE && state.month < MAX_SIMULATION_MONTHS {
        state.advance_month();
        let row = simulate_month(input, &mut state);
        schedule.push(row);
    }

    let payoff_months = schedule.len() as u32;
    let average_heloc_balance = if payoff_months > 0 {
        state.heloc_balance_sum / payoff_months as f64
    } else {
        0.0
    };

    HelocCalculationResult {
        payoff_months,
        total_interest: state.cumulative_mortgage_interest + state.cumulative_heloc_interest,
        total_mortgage_interest: state.cumulative_mortgage_interest,
        total_heloc_interest: state.cumulative_heloc_interest,
        max_heloc_used: state.max_heloc_balance,
        average_heloc_balance,
        schedule,
    }
}

/// Run one month of the simulation and produce its output row
fn simulate_month(input: &HelocInput, state: &mut SimulationState) -> HelocPaymentRecord {
    let mortgage_rate = input.mortgage_rate / 12.0;
    let heloc_rate = input.heloc_rate / 12.0;

    // Regular mortgage payment, principal capped at the remaining balance
    let beginning_balance = state.mortgage_balance;
    let interest_payment = beginning_balance * mortgage_rate;
    let principal_payment = (input.mortgage_payment - interest_payment).min(beginning_balance);
    let mut mortgage_balance = beginning_balance - principal_payment;

    // HELOC interest accrues on the balance carried into the month
    let heloc_interest = state.heloc_balance * heloc_rate;

    let mut income = input.discretionary_income;

    // Interest on the line comes first; any shortfall capitalizes, but the
    // balance never grows past the credit limit
    let heloc_interest_paid = income.min(heloc_interest);
    income -= heloc_interest_paid;
    state.heloc_balance =
        (state.heloc_balance + heloc_interest - heloc_interest_paid).min(input.heloc_limit);

    // Draw against remaining capacity, swept onto the mortgage as a lump sum
    let capacity = (input.heloc_limit - state.heloc_balance).max(0.0);
    let heloc_draw = income.min(capacity).min(mortgage_balance);
    state.heloc_balance += heloc_draw;
    mortgage_balance -= heloc_draw;
    income -= heloc_draw;

    state.observe_heloc_peak();

    // Remaining income pays the line down
    let heloc_principal_paid = income.min(state.heloc_balance);
    state.heloc_balance -= heloc_principal_paid;
    income -= heloc_principal_paid;

    // Whatever is left goes straight onto the mortgage (zero-limit lines,
    // or months where the line is already clear)
    let direct_extra = income.min(mortgage_balance);
    mortgage_balance -= direct_extra;
    income -= direct_extra;

    let extra_principal = heloc_draw + direct_extra;
    let discretionary_deployed = input.discretionary_income - income;

    state.mortgage_balance = mortgage_balance;
    state.cumulative_principal += principal_payment + extra_principal;
    state.cumulative_mortgage_interest += interest_payment;
    state.cumulative_heloc_interest += heloc_interest;
    state.close_month();

    HelocPaymentRecord {
        month: state.month,
        beginning_balance,
        payment_amount: principal_payment + interest_payment,
        principal_payment,
        interest_payment,
        extra_principal,
        ending_balance: mortgage_balance,
        heloc_draw,
        heloc_interest,
        heloc_interest_paid,
        heloc_principal_paid,
        heloc_balance: state.heloc_balance,
        total_monthly_payment: principal_payment + interest_payment + discretionary_deployed,
        cumulative_principal: state.cumulative_principal,
        cumulative_mortgage_interest: state.cumulative_mortgage_interest,
        cumulative_heloc_interest: state.cumulative_heloc_interest,
    }
}
