//! Pure bill-estimation core: tariff arithmetic, validation, and savings.

/// Electricity bill inputs and estimation.
pub mod electricity;
/// Three-step gas bill inputs and estimation.
pub mod gas;
/// Simplified two-field estimate with a flat solar discount.
pub mod quick;
/// Savings report derivation.
pub mod savings;
pub mod types;

// Re-export the main types for convenience
pub use electricity::ElectricityBill;
pub use gas::GasBill;
pub use quick::QuickEstimate;
pub use savings::SavingsReport;
pub use types::{LineItem, SolarFeedIn, SupplyCharge, Tariff, UsageRate, Utility, ValidationError};
