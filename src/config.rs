//! Starting values and slider ranges for the explorer controls.

use clap::Args;

use crate::params::LoanParameters;

/// Loan parameters as command-line flags. Defaults are the explorer's opening state.
#[derive(Debug, Clone, Args)]
pub struct LoanArgs {
    #[arg(long, global = true, default_value_t = LoanParameters::default().house_cost)]
    pub house_cost: f64,

    #[arg(long, global = true, default_value_t = LoanParameters::default().down_payment)]
    pub down_payment: f64,

    #[arg(long = "renovations", global = true, default_value_t = LoanParameters::default().renovation_cost)]
    pub renovation_cost: f64,

    #[arg(long = "rental-income", global = true, default_value_t = LoanParameters::default().monthly_rental_income)]
    pub monthly_rental_income: f64,

    /// Nominal annual rate in percent
    #[arg(long = "interest-rate", global = true, default_value_t = LoanParameters::default().annual_interest_rate_percent)]
    pub annual_interest_rate_percent: f64,

    #[arg(long, global = true, default_value_t = LoanParameters::default().payments_per_year)]
    pub payments_per_year: i32,

    /// Loan life in years
    #[arg(long, global = true, default_value_t = 25)]
    pub years: i32,

    /// Flat property tax rate in percent of house cost
    #[arg(long = "property-tax-rate", global = true, default_value_t = LoanParameters::default().property_tax_rate_percent)]
    pub property_tax_rate_percent: f64,

    #[arg(long = "budget", global = true, default_value_t = LoanParameters::default().monthly_budget)]
    pub monthly_budget: f64,
}

impl LoanArgs {
    pub fn to_params(&self) -> LoanParameters {
        LoanParameters {
            house_cost: self.house_cost,
            down_payment: self.down_payment,
            renovation_cost: self.renovation_cost,
            monthly_rental_income: self.monthly_rental_income,
            annual_interest_rate_percent: self.annual_interest_rate_percent,
            payments_per_year: self.payments_per_year,
            total_payments: 0,
            property_tax_rate_percent: self.property_tax_rate_percent,
            monthly_budget: self.monthly_budget,
        }
        .with_term_years(self.years)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderSpec {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn step_up(&self, value: f64) -> f64 {
        self.clamp(value + self.step)
    }

    pub fn step_down(&self, value: f64) -> f64 {
        self.clamp(value - self.step)
    }

    /// Position of `value` within the range, in `[0, 1]`.
    pub fn fraction(&self, value: f64) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// The adjustable controls, in screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    HouseCost,
    DownPayment,
    Renovations,
    RentalIncome,
    MonthlyBudget,
    InterestRate,
    TermYears,
}

impl Control {
    pub const ALL: [Control; 7] = [
        Control::HouseCost,
        Control::DownPayment,
        Control::Renovations,
        Control::RentalIncome,
        Control::MonthlyBudget,
        Control::InterestRate,
        Control::TermYears,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Control::HouseCost => "House Cost",
            Control::DownPayment => "Down Payment",
            Control::Renovations => "Renovation Cost",
            Control::RentalIncome => "Monthly Rental Income",
            Control::MonthlyBudget => "Monthly Budget",
            Control::InterestRate => "Annual Interest Rate",
            Control::TermYears => "Life Loan (years)",
        }
    }

    pub fn slider(self) -> SliderSpec {
        match self {
            Control::HouseCost => SliderSpec::new(100_000.0, 1_000_000.0, 10_000.0),
            Control::DownPayment => SliderSpec::new(0.0, 1_000_000.0, 5_000.0),
            Control::Renovations => SliderSpec::new(0.0, 250_000.0, 5_000.0),
            Control::RentalIncome => SliderSpec::new(0.0, 10_000.0, 50.0),
            Control::MonthlyBudget => SliderSpec::new(0.0, 20_000.0, 100.0),
            Control::InterestRate => SliderSpec::new(0.0, 20.0, 0.05),
            Control::TermYears => SliderSpec::new(1.0, 40.0, 1.0),
        }
    }

    pub fn is_currency(self) -> bool {
        !matches!(self, Control::InterestRate | Control::TermYears)
    }

    pub fn get(self, params: &LoanParameters) -> f64 {
        match self {
            Control::HouseCost => params.house_cost,
            Control::DownPayment => params.down_payment,
            Control::Renovations => params.renovation_cost,
            Control::RentalIncome => params.monthly_rental_income,
            Control::MonthlyBudget => params.monthly_budget,
            Control::InterestRate => params.annual_interest_rate_percent,
            Control::TermYears => params.loan_years(),
        }
    }

    /// Returns a copy of `params` with this control set to `value`.
    ///
    /// The loan term is clamped to its slider range; other values are taken as given.
    pub fn set(self, params: &LoanParameters, value: f64) -> LoanParameters {
        let mut next = *params;
        match self {
            Control::HouseCost => next.house_cost = value,
            Control::DownPayment => next.down_payment = value,
            Control::Renovations => next.renovation_cost = value,
            Control::RentalIncome => next.monthly_rental_income = value,
            Control::MonthlyBudget => next.monthly_budget = value,
            Control::InterestRate => next.annual_interest_rate_percent = value,
            Control::TermYears => {
                let years = self.slider().clamp(value.round());
                return next.with_term_years(years as i32);
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        loan: LoanArgs,
    }

    #[test]
    fn flag_defaults_match_parameter_defaults() {
        let cli = Cli::parse_from(["test"]);
        assert_eq!(cli.loan.to_params(), LoanParameters::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "test",
            "--house-cost",
            "450000",
            "--years",
            "30",
            "--budget",
            "3200",
        ]);
        let params = cli.loan.to_params();
        assert_eq!(params.house_cost, 450_000.0);
        assert_eq!(params.total_payments, 360);
        assert_eq!(params.monthly_budget, 3_200.0);
    }

    #[test]
    fn slider_steps_clamp_to_range() {
        let house = Control::HouseCost.slider();
        assert_eq!(house.step_up(990_000.0), 1_000_000.0);
        assert_eq!(house.step_up(1_000_000.0), 1_000_000.0);
        assert_eq!(house.step_down(100_000.0), 100_000.0);
        assert_eq!(house.step_down(250_000.0), 240_000.0);
    }

    #[test]
    fn slider_fraction() {
        let s = SliderSpec::new(0.0, 200.0, 10.0);
        assert_eq!(s.fraction(50.0), 0.25);
        assert_eq!(s.fraction(-10.0), 0.0);
        assert_eq!(s.fraction(500.0), 1.0);
    }

    #[test]
    fn term_control_rewrites_total_payments() {
        let params = LoanParameters::default();
        let next = Control::TermYears.set(&params, 30.0);
        assert_eq!(next.total_payments, 360);
        assert_eq!(Control::TermYears.get(&next), 30.0);
        assert_eq!(params.total_payments, 300);
    }

    #[test]
    fn typed_term_is_clamped_to_slider_range() {
        let params = LoanParameters::default();
        let huge = Control::TermYears.set(&params, 9_999_999_999.0);
        assert_eq!(huge.total_payments, 480);
        assert_eq!(Control::TermYears.get(&huge), 40.0);

        let zero = Control::TermYears.set(&params, 0.0);
        assert_eq!(zero.total_payments, 12);
    }

    #[test]
    fn every_control_round_trips_its_value() {
        let params = LoanParameters::default();
        for control in Control::ALL {
            let value = control.slider().step_up(control.get(&params));
            let next = control.set(&params, value);
            assert_eq!(control.get(&next), value, "{}", control.label());
        }
    }
}
