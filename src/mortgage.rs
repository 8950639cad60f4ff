use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::affordability::{classify, AffordabilityCategory};
use crate::amortization::summarize_loan;
use crate::params::LoanParameters;
use crate::property_tax::compute_property_tax;
use crate::ExplorerResult;

/// Every figure the explorer screen displays, derived from one [`LoanParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageResult {
    pub loan_amount: f64,
    pub periodic_payment: f64,
    pub sum_of_payments: f64,
    pub interest_cost: f64,
    pub yearly_property_tax: f64,
    pub monthly_property_tax: f64,
    /// Payment less rental income plus monthly property tax.
    pub net_monthly_cost: f64,
    pub affordability_ratio: f64,
    pub affordability_category: AffordabilityCategory,
}

/// Recomputes all derived figures from scratch.
///
/// Pure: the same parameters always produce the same result.
pub fn evaluate(params: &LoanParameters) -> ExplorerResult<MortgageResult> {
    let loan = summarize_loan(params)?;
    if loan.loan_amount < 0.0 {
        warn!(
            loan_amount = loan.loan_amount,
            down_payment = params.down_payment,
            "down payment exceeds house cost plus renovations"
        );
    }

    let tax = compute_property_tax(params.house_cost, params.property_tax_rate_percent);
    let net_monthly_cost = loan.periodic_payment - params.monthly_rental_income + tax.monthly;
    let affordability = classify(net_monthly_cost, params.monthly_budget)?;

    debug!(
        loan_amount = loan.loan_amount,
        periodic_payment = loan.periodic_payment,
        net_monthly_cost,
        category = %affordability.category,
        "evaluated mortgage"
    );

    Ok(MortgageResult {
        loan_amount: loan.loan_amount,
        periodic_payment: loan.periodic_payment,
        sum_of_payments: loan.sum_of_payments,
        interest_cost: loan.interest_cost,
        yearly_property_tax: tax.yearly,
        monthly_property_tax: tax.monthly,
        net_monthly_cost,
        affordability_ratio: affordability.ratio,
        affordability_category: affordability.category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MortgageError;

    #[test]
    fn net_cost_subtracts_rent_and_adds_tax() {
        let params = LoanParameters {
            monthly_rental_income: 400.0,
            ..LoanParameters::default()
        };
        let r = evaluate(&params).unwrap();
        let expected = r.periodic_payment - 400.0 + r.monthly_property_tax;
        assert_eq!(r.net_monthly_cost, expected);
    }

    #[test]
    fn rent_covering_everything_is_profitable() {
        let params = LoanParameters {
            monthly_rental_income: 5_000.0,
            ..LoanParameters::default()
        };
        let r = evaluate(&params).unwrap();
        assert!(r.net_monthly_cost < 0.0);
        assert_eq!(r.affordability_ratio, 1.0);
        assert_eq!(r.affordability_category, AffordabilityCategory::Profitable);
    }

    #[test]
    fn zero_budget_is_rejected() {
        let params = LoanParameters {
            monthly_budget: 0.0,
            ..LoanParameters::default()
        };
        assert!(matches!(
            evaluate(&params),
            Err(MortgageError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn property_tax_uses_house_cost_not_loan() {
        let params = LoanParameters {
            down_payment: 50_000.0,
            renovation_cost: 20_000.0,
            ..LoanParameters::default()
        };
        let r = evaluate(&params).unwrap();
        assert_eq!(r.loan_amount, 70_000.0);
        assert!((r.yearly_property_tax - 1_505.611).abs() < 1e-9);
    }
}
