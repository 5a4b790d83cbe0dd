//! File output for computed estimates.

/// CSV export of itemized breakdowns.
pub mod export;
