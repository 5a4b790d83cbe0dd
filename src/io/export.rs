//! CSV export for itemized bill breakdowns.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::estimator::LineItem;

/// Column header for CSV breakdown export.
const HEADER: &str = "utility,component,quantity,rate,cost_dollars";

/// Exports breakdown line items to a CSV file at the given path.
///
/// Writes a header row followed by one data row per line item. Produces
/// deterministic output for identical inputs.
///
/// # Arguments
///
/// * `items` - Breakdown rows, typically electricity followed by gas
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(items: &[LineItem], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(items, buf)
}

/// Writes breakdown line items as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(items: &[LineItem], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(','))?;

    // Data rows
    for item in items {
        wtr.write_record(&[
            item.utility.to_string(),
            item.component.to_string(),
            format!("{:.3}", item.quantity),
            format!("{:.3}", item.rate),
            format!("{:.2}", item.cost_dollars),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BillScenario;

    fn breakdown_rows() -> Vec<LineItem> {
        let scenario = BillScenario::solar_household();
        let mut items = scenario.electricity_bill().breakdown();
        items.extend(scenario.gas_bill().breakdown());
        items
    }

    #[test]
    fn header_row_is_first() {
        let mut buf = Vec::new();
        write_csv(&breakdown_rows(), &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let first_line = output.as_deref().unwrap_or("").lines().next().unwrap_or("");
        assert_eq!(first_line, "utility,component,quantity,rate,cost_dollars");
    }

    #[test]
    fn row_count_matches_item_count() {
        let items = breakdown_rows();
        let mut buf = Vec::new();
        write_csv(&items, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let lines = output.as_deref().unwrap_or("").lines().count();
        // 1 header + 1 row per item
        assert_eq!(lines, 1 + items.len());
    }

    #[test]
    fn deterministic_output() {
        let items = breakdown_rows();
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_csv(&items, &mut buf1).ok();
        write_csv(&items, &mut buf2).ok();
        assert_eq!(buf1, buf2);
    }

    #[test]
    fn round_trip_parseable() {
        let items = breakdown_rows();
        let mut buf = Vec::new();
        write_csv(&items, &mut buf).ok();

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let headers = rdr.headers().cloned().ok();
        assert_eq!(headers.as_ref().map(csv::StringRecord::len), Some(5));

        let mut credit_seen = false;
        let mut row_count = 0;
        for record in rdr.records() {
            let rec = record.ok();
            assert!(rec.is_some(), "every row should parse");
            let rec = rec.as_ref();
            // Numeric columns parse as f64
            for i in 2..5 {
                let val: Result<f64, _> = rec.unwrap()[i].parse();
                assert!(val.is_ok(), "column {i} should parse as f64");
            }
            if &rec.unwrap()[1] == "solar_credit" {
                credit_seen = true;
                let cost: f64 = rec.unwrap()[4].parse().unwrap_or(0.0);
                assert!(cost < 0.0, "solar credit row should be negative");
            }
            row_count += 1;
        }
        assert_eq!(row_count, items.len());
        assert!(credit_seen, "solar household breakdown should include a credit row");
    }
}
