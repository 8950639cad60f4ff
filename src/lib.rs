//! Mortgage affordability calculations.
//!
//! A caller owns a [`LoanParameters`] value, hands it to [`evaluate`] whenever
//! any input changes, and renders the returned [`MortgageResult`]. There is no
//! hidden state between calls.
//!
//! ```
//! use mortgage_explorer::{evaluate, AffordabilityCategory, LoanParameters};
//!
//! let params = LoanParameters::default();
//! let result = evaluate(&params).unwrap();
//!
//! assert_eq!(result.loan_amount, 100_000.0);
//! assert_eq!(result.affordability_category, AffordabilityCategory::Affordable);
//! ```

pub mod affordability;
pub mod amortization;
pub mod config;
pub mod error;
pub mod mortgage;
pub mod params;
pub mod property_tax;

pub use affordability::{classify, Affordability, AffordabilityCategory};
pub use amortization::{
    amortization_schedule, compute_periodic_payment, period_rate, LoanSummary, ScheduleRow,
    MAX_SCHEDULE_PERIODS,
};
pub use error::MortgageError;
pub use mortgage::{evaluate, MortgageResult};
pub use params::{coerce_amount, LoanParameters};
pub use property_tax::{compute_property_tax, PropertyTax};

pub type ExplorerResult<T> = Result<T, MortgageError>;
