//! Electricity bill validation and estimation.

use super::savings::SavingsReport;
use super::types::{
    LineItem, SolarFeedIn, SupplyCharge, Tariff, UsageRate, Utility, ValidationError,
    check_non_negative,
};

/// Complete electricity bill inputs for one billing period.
///
/// Optional components model the form toggles: a `None` controlled load,
/// solar, or concession contributes nothing and is not validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectricityBill {
    pub tariff: Tariff,
    /// Separately metered discounted circuit, e.g. water heating.
    pub controlled_load: Option<UsageRate>,
    pub supply: SupplyCharge,
    pub solar: Option<SolarFeedIn>,
    /// Fixed discount on the stated current bill (dollars).
    pub concession: Option<f64>,
    /// What the user currently pays per month (dollars).
    pub current_bill: f64,
}

impl ElectricityBill {
    /// Checks every active field for non-negativity.
    ///
    /// Returns one error per violated field, ordered common fields first,
    /// then tariff-specific fields, then controlled load. Fields behind an
    /// inactive toggle are not checked.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        check_non_negative(&mut errors, "supply_charge.rate_per_day", self.supply.rate_per_day);
        check_non_negative(&mut errors, "supply_charge.days", self.supply.days);
        check_non_negative(&mut errors, "current_bill", self.current_bill);
        if let Some(solar) = &self.solar {
            check_non_negative(&mut errors, "solar.export_kwh", solar.export_kwh);
            check_non_negative(&mut errors, "solar.credit_cents", solar.credit_cents);
        }
        if let Some(amount) = self.concession {
            check_non_negative(&mut errors, "concession.amount", amount);
        }

        match self.tariff {
            Tariff::SingleRate {
                usage_kwh,
                rate_cents,
            } => {
                check_non_negative(&mut errors, "tariff.rate_cents", rate_cents);
                check_non_negative(&mut errors, "tariff.usage_kwh", usage_kwh);
            }
            Tariff::TimeOfUse {
                peak_usage_kwh,
                peak_rate_cents,
                off_peak_usage_kwh,
                off_peak_rate_cents,
            } => {
                check_non_negative(&mut errors, "tariff.peak_rate_cents", peak_rate_cents);
                check_non_negative(&mut errors, "tariff.off_peak_rate_cents", off_peak_rate_cents);
                check_non_negative(&mut errors, "tariff.peak_usage_kwh", peak_usage_kwh);
                check_non_negative(&mut errors, "tariff.off_peak_usage_kwh", off_peak_usage_kwh);
            }
            Tariff::Demand {
                usage_kwh,
                rate_cents,
                peak_demand_kw,
                charge_per_kw,
            } => {
                check_non_negative(&mut errors, "tariff.rate_cents", rate_cents);
                check_non_negative(&mut errors, "tariff.usage_kwh", usage_kwh);
                check_non_negative(&mut errors, "tariff.peak_demand_kw", peak_demand_kw);
                check_non_negative(&mut errors, "tariff.charge_per_kw", charge_per_kw);
            }
        }

        if let Some(cl) = &self.controlled_load {
            check_non_negative(&mut errors, "controlled_load.rate_cents", cl.rate_cents);
            check_non_negative(&mut errors, "controlled_load.quantity", cl.quantity);
        }

        errors
    }

    /// The estimated bill in dollars, before savings comparison.
    ///
    /// Tariff cost, plus controlled load, plus supply charge, minus the
    /// solar credit. Call only after validation; negative inputs produce
    /// arithmetic garbage, not errors.
    pub fn new_bill(&self) -> f64 {
        let mut cost = self.tariff.cost();
        if let Some(cl) = &self.controlled_load {
            cost += cl.cost();
        }
        cost += self.supply.cost();
        if let Some(solar) = &self.solar {
            cost -= solar.credit();
        }
        cost
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

    /// Itemized breakdown whose signed costs sum to [`Self::new_bill`].
    pub fn breakdown(&self) -> Vec<LineItem> {
        let mut items = Vec::new();
        let u = Utility::Electricity;

        match self.tariff {
            Tariff::SingleRate {
                usage_kwh,
                rate_cents,
            } => items.push(LineItem {
                utility: u,
                component: "energy",
                quantity: usage_kwh,
                rate: rate_cents,
                cost_dollars: UsageRate::new(usage_kwh, rate_cents).cost(),
            }),
            Tariff::TimeOfUse {
                peak_usage_kwh,
                peak_rate_cents,
                off_peak_usage_kwh,
                off_peak_rate_cents,
            } => {
                items.push(LineItem {
                    utility: u,
                    component: "peak_energy",
                    quantity: peak_usage_kwh,
                    rate: peak_rate_cents,
                    cost_dollars: UsageRate::new(peak_usage_kwh, peak_rate_cents).cost(),
                });
                items.push(LineItem {
                    utility: u,
                    component: "off_peak_energy",
                    quantity: off_peak_usage_kwh,
                    rate: off_peak_rate_cents,
                    cost_dollars: UsageRate::new(off_peak_usage_kwh, off_peak_rate_cents).cost(),
                });
            }
            Tariff::Demand {
                usage_kwh,
                rate_cents,
                peak_demand_kw,
                charge_per_kw,
            } => {
                items.push(LineItem {
                    utility: u,
                    component: "energy",
                    quantity: usage_kwh,
                    rate: rate_cents,
                    cost_dollars: UsageRate::new(usage_kwh, rate_cents).cost(),
                });
                items.push(LineItem {
                    utility: u,
                    component: "demand_charge",
                    quantity: peak_demand_kw,
                    rate: charge_per_kw,
                    cost_dollars: peak_demand_kw * charge_per_kw,
                });
            }
        }

        if let Some(cl) = &self.controlled_load {
            items.push(LineItem {
                utility: u,
                component: "controlled_load",
                quantity: cl.quantity,
                rate: cl.rate_cents,
                cost_dollars: cl.cost(),
            });
        }
        items.push(LineItem {
            utility: u,
            component: "supply_charge",
            quantity: self.supply.days,
            rate: self.supply.rate_per_day,
            cost_dollars: self.supply.cost(),
        });
        if let Some(solar) = &self.solar {
            items.push(LineItem {
                utility: u,
                component: "solar_credit",
                quantity: solar.export_kwh,
                rate: solar.credit_cents,
                cost_dollars: -solar.credit(),
            });
        }

        items
    }
}
