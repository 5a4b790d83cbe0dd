//! API response and query types.
//!
//! Field names follow the CSV export column names for consistency across
//! output formats.

use serde::{Deserialize, Serialize};

use crate::estimator::{LineItem, SavingsReport};

/// Savings figures for one utility (or the combined view).
#[derive(Debug, Serialize)]
pub struct ReportBody {
    /// Estimated bill under the entered tariff (dollars).
    pub new_bill: f64,
    /// Effective current bill minus the new bill (dollars).
    pub monthly_savings: f64,
    /// `monthly_savings * 3`.
    pub quarterly_savings: f64,
    /// `monthly_savings * 12`.
    pub annual_savings: f64,
}

impl From<&SavingsReport> for ReportBody {
    fn from(r: &SavingsReport) -> Self {
        Self {
            new_bill: r.new_bill,
            monthly_savings: r.monthly_savings,
            quarterly_savings: r.quarterly_savings,
            annual_savings: r.annual_savings,
        }
    }
}

/// Combined report response: both utilities plus the household view.
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    /// Electricity savings report.
    pub electricity: ReportBody,
    /// Gas savings report.
    pub gas: ReportBody,
    /// Sum of both utilities.
    pub combined: ReportBody,
}

/// Single breakdown row using the CSV export column names.
#[derive(Debug, Serialize)]
pub struct LineItemRecord {
    /// `"electricity"` or `"gas"`.
    pub utility: String,
    /// Component label (`"peak_energy"`, `"supply_charge"`, ...).
    pub component: &'static str,
    /// Consumed quantity, billed days, or exported kWh.
    pub quantity: f64,
    /// Unit rate as quoted on the bill.
    pub rate: f64,
    /// Signed cost contribution in dollars.
    pub cost_dollars: f64,
}

impl From<&LineItem> for LineItemRecord {
    fn from(item: &LineItem) -> Self {
        Self {
            utility: item.utility.to_string(),
            component: item.component,
            quantity: item.quantity,
            rate: item.rate,
            cost_dollars: item.cost_dollars,
        }
    }
}

/// Optional utility filter for the breakdown endpoint.
#[derive(Debug, Deserialize)]
pub struct BreakdownQuery {
    /// `"electricity"` or `"gas"`; absent means both.
    pub utility: Option<String>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
