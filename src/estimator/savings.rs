//! Savings report derived from a computed bill and the user's current bill.

use std::fmt;

/// Savings at the monthly, quarterly, and annual horizons, plus the newly
/// computed bill they are measured against.
///
/// Derived, never stored: recomputed from scratch whenever an input changes
/// so the figures can never drift apart. Quarterly and annual values are
/// exact multiples of the monthly value, including when savings are
/// negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsReport {
    /// The estimated bill under the entered tariff (dollars).
    pub new_bill: f64,
    /// Effective current bill minus the new bill (dollars).
    pub monthly_savings: f64,
    /// `monthly_savings * 3`.
    pub quarterly_savings: f64,
    /// `monthly_savings * 12`.
    pub annual_savings: f64,
}

impl SavingsReport {
    /// Builds a report from the computed bill and the concession-adjusted
    /// current bill.
    pub fn from_costs(new_bill: f64, effective_current_bill: f64) -> Self {
        let monthly_savings = effective_current_bill - new_bill;
        Self {
            new_bill,
            monthly_savings,
            quarterly_savings: monthly_savings * 3.0,
            annual_savings: monthly_savings * 12.0,
        }
    }

    /// Combines electricity and gas reports into household-level savings.
    ///
    /// Returns `None` when neither report exists; a missing report
    /// contributes zero, matching a household with only one utility.
    pub fn combined(
        electricity: Option<&SavingsReport>,
        gas: Option<&SavingsReport>,
    ) -> Option<SavingsReport> {
        if electricity.is_none() && gas.is_none() {
            return None;
        }
        let new_bill = electricity.map_or(0.0, |r| r.new_bill) + gas.map_or(0.0, |r| r.new_bill);
        let monthly = electricity.map_or(0.0, |r| r.monthly_savings)
            + gas.map_or(0.0, |r| r.monthly_savings);
        Some(SavingsReport {
            new_bill,
            monthly_savings: monthly,
            quarterly_savings: monthly * 3.0,
            annual_savings: monthly * 12.0,
        })
    }
}

impl fmt::Display for SavingsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "New bill:           ${:.2}", self.new_bill)?;
        writeln!(f, "Monthly savings:    ${:.2}", self.monthly_savings)?;
        writeln!(f, "Quarterly savings:  ${:.2}", self.quarterly_savings)?;
        write!(f, "Annual savings:     ${:.2}", self.annual_savings)
    }
}
