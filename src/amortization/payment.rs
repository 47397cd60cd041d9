//! Closed-form payment and remaining-balance calculations
//!
//! These are total functions: degenerate inputs (zero term, negative
//! principal or rate) produce finite, documented values instead of panicking.
//! Input validation is the caller's job (see `request`).

/// Standard fixed-rate annuity payment for a loan.
///
/// Monthly rate `r = annual_rate / 12`. Edge policy:
/// - `term_months == 0` returns 0.0
/// - `r == 0` returns `principal / term_months`
///
/// Negative principal or rate is meaningless but non-crashing; the formula
/// simply yields a finite number.
pub fn calculate_monthly_payment(principal: f64, annual_rate: f64, term_months: u32) -> f64 {
    if term_months == 0 {
        return 0.0;
    }

    let monthly_rate = annual_rate / 12.0;
    if monthly_rate == 0.0 {
        return principal / term_months as f64;
    }

    let growth = (1.0 + monthly_rate).powi(term_months as i32);
    if growth == 1.0 {
        // Rate small enough to vanish in floating point; treat as zero-rate
        return principal / term_months as f64;
    }

    principal * monthly_rate * growth / (growth - 1.0)
}

/// Outstanding principal after `months_paid` scheduled payments, without
/// materializing a schedule.
///
/// `months_paid == 0` returns exactly `principal`; `months_paid >= term_months`
/// returns exactly 0. The result is clamped at 0.
pub fn calculate_remaining_balance(
    principal: f64,
    annual_rate: f64,
    term_months: u32,
    months_paid: u32,
) -> f64 {
    if months_paid == 0 {
        return principal;
    }
    if months_paid >= term_months {
        return 0.0;
    }

    let payment = calculate_monthly_payment(principal, annual_rate, term_months);
    let monthly_rate = annual_rate / 12.0;

    let balance = if monthly_rate == 0.0 {
        principal - payment * months_paid as f64
    } else {
        let growth = (1.0 + monthly_rate).powi(months_paid as i32);
        principal * growth - payment * (growth - 1.0) / monthly_rate
    };

    balance.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_thirty_year_payment() {
        // 300k at 6.5% over 30 years
        let payment = calculate_monthly_payment(300_000.0, 0.065, 360);
        assert!((payment - 1896.20).abs() < 0.01, "got {}", payment);
    }

    #[test]
    fn test_zero_rate_payment_is_linear() {
        let payment = calculate_monthly_payment(300_000.0, 0.0, 360);
        assert_relative_eq!(payment, 833.3333, epsilon = 0.001);
    }

    #[test]
    fn test_zero_term_returns_zero() {
        assert_eq!(calculate_monthly_payment(300_000.0, 0.065, 0), 0.0);
        assert_eq!(calculate_monthly_payment(300_000.0, 0.0, 0), 0.0);
    }

    #[test]
    fn test_extreme_inputs_stay_finite() {
        assert!(calculate_monthly_payment(10_000_000.0, 0.25, 360).is_finite());
        assert!(calculate_monthly_payment(-100_000.0, 0.05, 360).is_finite());
        assert!(calculate_monthly_payment(100_000.0, -0.05, 360).is_finite());
        assert!(calculate_monthly_payment(-100_000.0, -0.05, 12).is_finite());
    }

    #[test]
    fn test_remaining_balance_boundaries() {
        assert_eq!(calculate_remaining_balance(200_000.0, 0.06, 360, 0), 200_000.0);
        assert_eq!(calculate_remaining_balance(200_000.0, 0.06, 360, 360), 0.0);
        assert_eq!(calculate_remaining_balance(200_000.0, 0.06, 360, 400), 0.0);
    }

    #[test]
    fn test_remaining_balance_after_five_years() {
        // 200k at 6% over 30 years: roughly 186k left after 60 payments
        let balance = calculate_remaining_balance(200_000.0, 0.06, 360, 60);
        assert!((balance - 186_000.0).abs() < 1_000.0, "got {}", balance);
    }

    #[test]
    fn test_remaining_balance_zero_rate() {
        let balance = calculate_remaining_balance(120_000.0, 0.0, 120, 60);
        assert_relative_eq!(balance, 60_000.0, epsilon = 0.01);
    }

    #[test]
    fn test_remaining_balance_matches_schedule() {
        // Closed form should agree with the simulated schedule
        let input = crate::loan::MortgageInput::new(200_000.0, 0.06, 360);
        let schedule = crate::amortization::generate_amortization_schedule(&input);

        let closed_form = calculate_remaining_balance(200_000.0, 0.06, 360, 60);
        let simulated = schedule.payments[59].ending_balance;
        assert!((closed_form - simulated).abs() < 0.05);
    }
}
