//! Electricity form: tariff selector, optional sections, reactive result.

use super::{TariffOption, parse_field};
use crate::estimator::{
    ElectricityBill, SavingsReport, SolarFeedIn, SupplyCharge, Tariff, UsageRate, ValidationError,
};

/// Mutable state of the electricity calculator form.
///
/// Input fields are public strings holding whatever the user typed; call
/// [`ElectricityForm::recompute`] after any mutation to refresh the errors
/// and the result. Fields belonging to an unselected tariff or an inactive
/// toggle are ignored, not validated.
#[derive(Debug, Clone, Default)]
pub struct ElectricityForm {
    pub tariff_option: TariffOption,

    // Single rate
    pub single_rate: String,
    pub single_usage: String,

    // Time of use
    pub peak_rate: String,
    pub peak_usage: String,
    pub off_peak_rate: String,
    pub off_peak_usage: String,

    // Demand
    pub demand_rate: String,
    pub demand_usage: String,
    pub peak_demand: String,
    pub demand_charge: String,

    pub has_controlled_load: bool,
    pub controlled_load_rate: String,
    pub controlled_load_usage: String,

    pub supply_charge_rate: String,
    pub supply_charge_days: String,

    pub has_solar: bool,
    pub solar_export: String,
    pub solar_credit_rate: String,

    pub has_concession: bool,
    pub concession_amount: String,

    pub current_bill: String,

    errors: Vec<ValidationError>,
    result: Option<SavingsReport>,
}

impl ElectricityForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validation errors from the last recompute.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Latest successfully computed result.
    ///
    /// Stays at its previous value while the form has errors, so an invalid
    /// keystroke does not blank the display.
    pub fn result(&self) -> Option<&SavingsReport> {
        self.result.as_ref()
    }

    /// Builds estimator inputs from the currently active fields.
    pub fn to_bill(&self) -> ElectricityBill {
        let tariff = match self.tariff_option {
            TariffOption::SingleRate => Tariff::SingleRate {
                usage_kwh: parse_field(&self.single_usage),
                rate_cents: parse_field(&self.single_rate),
            },
            TariffOption::TimeOfUse => Tariff::TimeOfUse {
                peak_usage_kwh: parse_field(&self.peak_usage),
                peak_rate_cents: parse_field(&self.peak_rate),
                off_peak_usage_kwh: parse_field(&self.off_peak_usage),
                off_peak_rate_cents: parse_field(&self.off_peak_rate),
            },
            TariffOption::Demand => Tariff::Demand {
                usage_kwh: parse_field(&self.demand_usage),
                rate_cents: parse_field(&self.demand_rate),
                peak_demand_kw: parse_field(&self.peak_demand),
                charge_per_kw: parse_field(&self.demand_charge),
            },
        };

        ElectricityBill {
            tariff,
            controlled_load: self.has_controlled_load.then(|| {
                UsageRate::new(
                    parse_field(&self.controlled_load_usage),
                    parse_field(&self.controlled_load_rate),
                )
            }),
            supply: SupplyCharge::new(
                parse_field(&self.supply_charge_rate),
                parse_field(&self.supply_charge_days),
            ),
            solar: self.has_solar.then(|| {
                SolarFeedIn::new(
                    parse_field(&self.solar_export),
                    parse_field(&self.solar_credit_rate),
                )
            }),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_form_recomputes_to_zero_bill() {
        let mut form = ElectricityForm::new();
        form.recompute();
        assert!(form.errors().is_empty());
        let report = form.result().expect("blank form should estimate");
        assert_eq!(report.new_bill, 0.0);
    }

    #[test]
    fn single_rate_fields_flow_through() {
        let mut form = ElectricityForm::new();
        form.single_usage = "100".to_string();
        form.single_rate = "20".to_string();
        form.recompute();
        let report = form.result().expect("valid form should estimate");
        assert!((report.new_bill - 20.0).abs() < 1e-9);
    }

    #[test]
    fn blank_fields_are_zero_not_errors() {
        let mut form = ElectricityForm::new();
        form.tariff_option = TariffOption::TimeOfUse;
        form.peak_usage = "150".to_string();
        form.peak_rate = "42".to_string();
        // off-peak fields left blank
        form.recompute();
        assert!(form.errors().is_empty());
        let report = form.result().expect("partially blank form should estimate");
        assert!((report.new_bill - 63.0).abs() < 1e-9);
    }

    #[test]
    fn unselected_tariff_fields_are_ignored() {
        let mut form = ElectricityForm::new();
        form.tariff_option = TariffOption::SingleRate;
        // Garbage in the demand fields must not matter
        form.peak_demand = "-99".to_string();
        form.recompute();
        assert!(form.errors().is_empty());
    }

    #[test]
    fn negative_input_keeps_previous_result() {
        let mut form = ElectricityForm::new();
        form.single_usage = "100".to_string();
        form.single_rate = "20".to_string();
        form.recompute();
        let before = *form.result().expect("first recompute should succeed");

        form.single_usage = "-100".to_string();
        form.recompute();
        assert!(!form.errors().is_empty());
        let after = form.result().expect("prior result should persist");
        assert_eq!(*after, before);
    }

    #[test]
    fn toggled_off_solar_is_not_validated() {
        let mut form = ElectricityForm::new();
        form.solar_export = "-5".to_string();
        form.recompute();
        assert!(form.errors().is_empty());
    }

    #[test]
    fn toggled_on_solar_is_validated_and_applied() {
        let mut form = ElectricityForm::new();
        form.single_usage = "100".to_string();
        form.single_rate = "20".to_string();
        form.has_solar = true;
        form.solar_export = "200".to_string();
        form.solar_credit_rate = "7".to_string();
        form.recompute();
        let report = form.result().expect("valid form should estimate");
        assert!((report.new_bill - 6.0).abs() < 1e-9);

        form.solar_export = "-1".to_string();
        form.recompute();
        assert!(form.errors().iter().any(|e| e.field == "solar.export_kwh"));
    }

    #[test]
    fn reset_restores_defaults_and_clears_result() {
        let mut form = ElectricityForm::new();
        form.single_usage = "100".to_string();
        form.has_solar = true;
        form.recompute();
        assert!(form.result().is_some());

        form.reset();
        assert!(form.single_usage.is_empty());
        assert!(!form.has_solar);
        assert!(form.result().is_none());
        assert!(form.errors().is_empty());
    }
}
