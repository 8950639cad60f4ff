use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertyTax {
    pub yearly: f64,
    pub monthly: f64,
}

/// Flat-rate property tax on the house value.
///
/// The monthly figure always uses a 12-month year, whatever the loan's
/// payment frequency.
pub fn compute_property_tax(house_cost: f64, rate_percent: f64) -> PropertyTax {
    let yearly = house_cost * rate_percent / 100.0;
    PropertyTax {
        yearly,
        monthly: yearly / 12.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stratford_rate_on_default_house() {
        let tax = compute_property_tax(100_000.0, 1.505611);
        assert!((tax.yearly - 1_505.611).abs() < 1e-9);
        assert!((tax.monthly - 125.467_583).abs() < 1e-6);
    }

    #[test]
    fn zero_rate_means_no_tax() {
        let tax = compute_property_tax(750_000.0, 0.0);
        assert_eq!(tax.yearly, 0.0);
        assert_eq!(tax.monthly, 0.0);
    }

    #[test]
    fn monthly_is_a_twelfth() {
        let tax = compute_property_tax(480_000.0, 2.0);
        assert_eq!(tax.yearly, 9_600.0);
        assert_eq!(tax.monthly, 800.0);
    }
}
