use serde::{Deserialize, Serialize};

/// Everything the calculator needs for one evaluation.
///
/// Monetary amounts and percentages are plain `f64`; percentages are given as
/// percent (6.06 means 6.06 %), not as fractions. The two counts are signed so
/// that a zero or negative value reaches the calculator and is rejected there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub house_cost: f64,
    pub down_payment: f64,
    pub renovation_cost: f64,
    pub monthly_rental_income: f64,
    pub annual_interest_rate_percent: f64,
    pub payments_per_year: i32,
    /// Number of periods over the life of the loan.
    pub total_payments: i32,
    pub property_tax_rate_percent: f64,
    pub monthly_budget: f64,
}

impl Default for LoanParameters {
    fn default() -> Self {
        Self {
            house_cost: 100_000.0,
            down_payment: 0.0,
            renovation_cost: 0.0,
            monthly_rental_income: 0.0,
            annual_interest_rate_percent: 6.06,
            payments_per_year: 12,
            total_payments: 300,
            property_tax_rate_percent: 1.505611,
            monthly_budget: 2_000.0,
        }
    }
}

impl LoanParameters {
    /// Amount financed. Negative when the down payment exceeds cost plus renovations.
    pub fn loan_amount(&self) -> f64 {
        self.house_cost - self.down_payment + self.renovation_cost
    }

    /// Sets the total number of payments from a loan life in whole years.
    pub fn with_term_years(mut self, years: i32) -> Self {
        self.total_payments = years.saturating_mul(self.payments_per_year);
        self
    }

    pub fn loan_years(&self) -> f64 {
        if self.payments_per_year == 0 {
            return 0.0;
        }
        f64::from(self.total_payments) / f64::from(self.payments_per_year)
    }
}

/// Turns raw text from an input control into an amount.
///
/// Reads the longest leading number, ignoring whatever follows it, so `"12abc"`
/// is 12 and `"1..2"` is 1. Text with no leading number, or one that is not
/// finite, becomes 0, so the calculator never sees malformed input.
pub fn coerce_amount(text: &str) -> f64 {
    let text = text.trim_start();
    text.char_indices()
        .map(|(start, c)| start + c.len_utf8())
        .rev()
        .find_map(|end| text[..end].parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
