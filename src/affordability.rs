//! Budget headroom classification.
//!
//! The net monthly housing cost is compared against the monthly budget and
//! turned into a ratio in `[0, 1]`: 1 means the cost is fully covered (zero or
//! negative), 0 means the cost meets or exceeds the budget. The ratio is then
//! bucketed by [`THRESHOLDS`], checked top to bottom.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::MortgageError;
use crate::ExplorerResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AffordabilityCategory {
    /// Rental income covers the payment and tax entirely.
    Profitable,
    Affordable,
    BarelyAffordable,
    NotAffordable,
}

impl AffordabilityCategory {
    pub fn label(self) -> &'static str {
        match self {
            AffordabilityCategory::Profitable => "Profitable",
            AffordabilityCategory::Affordable => "Affordable",
            AffordabilityCategory::BarelyAffordable => "Barely affordable",
            AffordabilityCategory::NotAffordable => "Not affordable",
        }
    }
}

impl std::fmt::Display for AffordabilityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Affordability {
    pub ratio: f64,
    pub category: AffordabilityCategory,
}

/// Ordered (predicate, category) pairs; the first predicate that holds wins.
pub const THRESHOLDS: [(fn(f64) -> bool, AffordabilityCategory); 4] = [
    (|ratio: f64| ratio == 1.0, AffordabilityCategory::Profitable),
    (|ratio: f64| ratio >= 0.5, AffordabilityCategory::Affordable),
    (|ratio: f64| ratio > 0.0, AffordabilityCategory::BarelyAffordable),
    (|_: f64| true, AffordabilityCategory::NotAffordable),
];

fn category_for(ratio: f64) -> AffordabilityCategory {
    THRESHOLDS
        .iter()
        .find(|(predicate, _)| predicate(ratio))
        .map(|&(_, category)| category)
        .unwrap_or(AffordabilityCategory::NotAffordable)
}

pub fn classify(net_monthly_cost: f64, budget: f64) -> ExplorerResult<Affordability> {
    if budget.is_nan() || budget <= 0.0 {
        return Err(MortgageError::invalid(
            "monthly_budget",
            format!("must be positive, got {budget}"),
        ));
    }

    let raw = net_monthly_cost / budget;
    let ratio = if raw.is_nan() {
        0.0
    } else {
        1.0 - raw.clamp(0.0, 1.0)
    };
    let category = category_for(ratio);

    trace!(net_monthly_cost, budget, ratio, ?category, "classified affordability");

    Ok(Affordability { ratio, category })
}
