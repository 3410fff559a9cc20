//! CSV export of the filtered campaign rows.

use crate::data::{CampaignStatus, CampaignTableRow};
use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// One exported line. Field names become the CSV header.
#[derive(Debug, Serialize)]
struct CsvRecord<'a> {
    #[serde(rename = "Campaign")]
    campaign: &'a str,
    #[serde(rename = "Status")]
    status: CampaignStatus,
    #[serde(rename = "Clicks")]
    clicks: u64,
    #[serde(rename = "Cost")]
    cost: f64,
    #[serde(rename = "ROI")]
    roi: f64,
}

impl<'a> From<&'a CampaignTableRow> for CsvRecord<'a> {
    fn from(row: &'a CampaignTableRow) -> Self {
        Self {
            campaign: row.campaign,
            status: row.status,
            clicks: row.clicks,
            cost: row.cost,
            roi: row.roi,
        }
    }
}

/// Export file name for the given day, e.g. `campaigns-2024-06-30.csv`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("campaigns-{}.csv", date.format("%Y-%m-%d"))
}

/// Serialize `rows` as CSV into `writer`. Returns the number of data rows written.
pub fn write_csv<W: io::Write>(writer: W, rows: &[&CampaignTableRow]) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if rows.is_empty() {
        csv_writer.write_record(["Campaign", "Status", "Clicks", "Cost", "ROI"])?;
    }
    for row in rows {
        csv_writer.serialize(CsvRecord::from(*row))?;
    }
    csv_writer.flush()?;
    Ok(rows.len())
}

/// Write `rows` to `<dir>/campaigns-<date>.csv`, creating `dir` if needed.
pub fn export_to_dir(
    dir: &Path,
    date: NaiveDate,
    rows: &[&CampaignTableRow],
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(date));
    let file = fs::File::create(&path)?;
    write_csv(io::BufWriter::new(file), rows)?;
    Ok(path)
}
