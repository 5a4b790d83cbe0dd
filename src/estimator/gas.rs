//! Gas bill validation and estimation.
//!
//! Gas pricing is a three-step block tariff: each step is an independent
//! usage/rate pair and the energy cost is the sum over all steps. There is
//! no solar or controlled-load equivalent on the gas side.

use super::savings::SavingsReport;
use super::types::{
    LineItem, SupplyCharge, UsageRate, Utility, ValidationError, check_non_negative,
};

/// Number of block-tariff steps on a gas bill.
pub const GAS_STEPS: usize = 3;

/// Complete gas bill inputs for one billing period.
#[derive(Debug, Clone, PartialEq)]
pub struct GasBill {
    /// Usage and rate per block step, in MJ and c/MJ.
    pub steps: [UsageRate; GAS_STEPS],
    pub supply: SupplyCharge,
    /// Fixed discount on the stated current bill (dollars).
    pub concession: Option<f64>,
    /// What the user currently pays per month (dollars).
    pub current_bill: f64,
}

impl GasBill {
    /// Checks every field for non-negativity, step fields first.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (i, step) in self.steps.iter().enumerate() {
            let n = i + 1;
            check_non_negative(&mut errors, &format!("step{n}.rate_cents"), step.rate_cents);
            check_non_negative(&mut errors, &format!("step{n}.quantity"), step.quantity);
        }
        check_non_negative(&mut errors, "supply_charge.rate_per_day", self.supply.rate_per_day);
        check_non_negative(&mut errors, "supply_charge.days", self.supply.days);
        check_non_negative(&mut errors, "current_bill", self.current_bill);
        if let Some(amount) = self.concession {
            check_non_negative(&mut errors, "concession.amount", amount);
        }

        errors
    }

    /// The estimated bill in dollars: step costs plus the supply charge.
    pub fn new_bill(&self) -> f64 {
        self.steps.iter().map(UsageRate::cost).sum::<f64>() + self.supply.cost()
    }

    /// Validates and, when clean, produces the savings report.
    ///
    /// # Errors
    ///
    /// Returns the full list of validation errors when any field is
    /// negative; no result is computed in that case.
    pub fn estimate(&self) -> Result<SavingsReport, Vec<ValidationError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let effective_current = self.current_bill - self.concession.unwrap_or(0.0);
        Ok(SavingsReport::from_costs(self.new_bill(), effective_current))
    }

    /// Itemized breakdown whose costs sum to [`Self::new_bill`].
    pub fn breakdown(&self) -> Vec<LineItem> {
        const STEP_LABELS: [&str; GAS_STEPS] = ["step1_energy", "step2_energy", "step3_energy"];

        let mut items: Vec<LineItem> = self
            .steps
            .iter()
            .zip(STEP_LABELS)
            .map(|(step, component)| LineItem {
                utility: Utility::Gas,
                component,
                quantity: step.quantity,
                rate: step.rate_cents,
                cost_dollars: step.cost(),
            })
            .collect();
        items.push(LineItem {
            utility: Utility::Gas,
            component: "supply_charge",
            quantity: self.supply.days,
            rate: self.supply.rate_per_day,
            cost_dollars: self.supply.cost(),
        });
        items
    }
}
