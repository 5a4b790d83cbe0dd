//! Gas form: three usage/rate steps, supply charge, concession.

use super::parse_field;
use crate::estimator::gas::GAS_STEPS;
use crate::estimator::{GasBill, SavingsReport, SupplyCharge, UsageRate, ValidationError};

/// Mutable state of the gas calculator form.
///
/// Same contract as the electricity form: public string fields, a
/// recompute pass after mutation, and a result that persists through
/// invalid intermediate states.
#[derive(Debug, Clone, Default)]
pub struct GasForm {
    /// Rate text per block step (c/MJ).
    pub step_rates: [String; GAS_STEPS],
    /// Usage text per block step (MJ).
    pub step_usages: [String; GAS_STEPS],

    pub supply_charge_rate: String,
    pub supply_charge_days: String,

    pub has_concession: bool,
    pub concession_amount: String,

    pub current_bill: String,

    errors: Vec<ValidationError>,
    result: Option<SavingsReport>,
}

impl GasForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validation errors from the last recompute.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Latest successfully computed result; persists while errors exist.
    pub fn result(&self) -> Option<&SavingsReport> {
        self.result.as_ref()
    }

    /// Builds estimator inputs from the current field values.
    pub fn to_bill(&self) -> GasBill {
        let mut steps = [UsageRate::default(); GAS_STEPS];
        for (i, step) in steps.iter_mut().enumerate() {
            *step = UsageRate::new(
                parse_field(&self.step_usages[i]),
                parse_field(&self.step_rates[i]),
            );
        }
        GasBill {
            steps,
            supply: SupplyCharge::new(
                parse_field(&self.supply_charge_rate),
                parse_field(&self.supply_charge_days),
            ),
            concession: self
                .has_concession
                .then(|| parse_field(&self.concession_amount)),
            current_bill: parse_field(&self.current_bill),
        }
    }

    /// Re-runs validation and estimation from the current field values.
    pub fn recompute(&mut self) {
        match self.to_bill().estimate() {
            Ok(report) => {
                self.result = Some(report);
                self.errors.clear();
            }
            Err(errors) => self.errors = errors,
        }
    }

    /// Restores every field to its default and clears errors and result.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
