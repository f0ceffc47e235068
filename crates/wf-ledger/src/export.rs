//! CSV export of the winner history

use std::path::Path;

use chrono::NaiveDate;

use wf_core::{Winner, WheelResult};

/// Byte-order mark spreadsheet importers expect on UTF-8 CSV.
const BOM: &str = "\u{feff}";

/// Render winners as `Name,Category,Time` CSV bytes, BOM-prefixed.
///
/// Every field is double-quoted with internal quotes doubled, so names
/// containing commas or quotes survive the trip.
pub fn export_csv(winners: &[Winner]) -> Vec<u8> {
    let mut out = String::from(BOM);
    out.push_str("Name,Category,Time");
    for winner in winners {
        let time = winner.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
        out.push('\n');
        out.push_str(&csv_field(&winner.name));
        out.push(',');
        out.push_str(&csv_field(&winner.category));
        out.push(',');
        out.push_str(&csv_field(&time));
    }
    out.into_bytes()
}

/// Write the winner history to `path` as CSV.
pub fn write_csv(path: &Path, winners: &[Winner]) -> WheelResult<()> {
    std::fs::write(path, export_csv(winners))?;
    log::info!("exported {} winner(s) to {}", winners.len(), path.display());
    Ok(())
}

/// File name for an export taken on `date`: `spin_winners_<ISO date>.csv`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("spin_winners_{}.csv", date.format("%Y-%m-%d"))
}

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
