//! Fixed-rate, fixed-term loan amortization.
//!
//! The periodic payment is the standard annuity payment
//!
//! ```text
//! PMT = P * r * (1 + r)^n / ((1 + r)^n - 1)
//! ```
//!
//! where `r` is the rate for one payment period and `n` the number of periods.
//! At `r = 0` the formula degenerates to 0/0, so that case is amortized
//! linearly as `P / n`. Nothing here rounds; callers format for display.

use serde::{Deserialize, Serialize};

use crate::error::MortgageError;
use crate::params::LoanParameters;
use crate::ExplorerResult;

/// Payment figures for the loan itself, before tax and rental income.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub loan_amount: f64,
    pub periodic_payment: f64,
    pub sum_of_payments: f64,
    pub interest_cost: f64,
}

/// One period of the amortization table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub period: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    /// Remaining balance after this period's payment.
    pub balance: f64,
}

/// Longest table [`amortization_schedule`] will build: 100 years of monthly payments.
pub const MAX_SCHEDULE_PERIODS: i32 = 1_200;

/// Rate for a single payment period from a nominal annual percentage.
pub fn period_rate(annual_rate_percent: f64, payments_per_year: i32) -> ExplorerResult<f64> {
    if payments_per_year <= 0 {
        return Err(MortgageError::invalid(
            "payments_per_year",
            format!("must be positive, got {payments_per_year}"),
        ));
    }
    Ok(annual_rate_percent / 100.0 / f64::from(payments_per_year))
}

/// Annuity payment per period for `principal` over `num_periods` at `period_rate`.
///
/// A positive rate small enough that `(1 + r)^n` rounds to exactly 1.0 is
/// treated as zero and returns `principal / n`, so for such rates the payments
/// sum to the principal rather than exceeding it.
pub fn compute_periodic_payment(
    period_rate: f64,
    num_periods: i32,
    principal: f64,
) -> ExplorerResult<f64> {
    if num_periods <= 0 {
        return Err(MortgageError::invalid(
            "num_periods",
            format!("must be positive, got {num_periods}"),
        ));
    }
    let n = f64::from(num_periods);
    let growth = (1.0 + period_rate).powf(n);

    // A rate too small to move (1 + r)^n off 1.0 is a zero rate as far as f64 can tell.
    if period_rate == 0.0 || growth == 1.0 {
        return Ok(principal / n);
    }

    Ok(principal * period_rate * growth / (growth - 1.0))
}

pub fn summarize_loan(params: &LoanParameters) -> ExplorerResult<LoanSummary> {
    let rate = period_rate(params.annual_interest_rate_percent, params.payments_per_year)?;
    let loan_amount = params.loan_amount();
    let periodic_payment = compute_periodic_payment(rate, params.total_payments, loan_amount)?;
    let sum_of_payments = periodic_payment * f64::from(params.total_payments);

    Ok(LoanSummary {
        loan_amount,
        periodic_payment,
        sum_of_payments,
        interest_cost: sum_of_payments - loan_amount,
    })
}

/// Period-by-period breakdown of the loan into interest and principal.
pub fn amortization_schedule(params: &LoanParameters) -> ExplorerResult<Vec<ScheduleRow>> {
    let rate = period_rate(params.annual_interest_rate_percent, params.payments_per_year)?;
    let loan_amount = params.loan_amount();
    let payment = compute_periodic_payment(rate, params.total_payments, loan_amount)?;
    if params.total_payments > MAX_SCHEDULE_PERIODS {
        return Err(MortgageError::invalid(
            "total_payments",
            format!(
                "schedule is limited to {MAX_SCHEDULE_PERIODS} periods, got {}",
                params.total_payments
            ),
        ));
    }

    let mut balance = loan_amount;
    let mut rows = Vec::with_capacity(params.total_payments as usize);

    for period in 1..=params.total_payments as u32 {
        let interest = balance * rate;
        let principal = payment - interest;
        balance -= principal;
        rows.push(ScheduleRow {
            period,
            payment,
            interest,
            principal,
            balance,
        });
    }

    Ok(rows)
}
