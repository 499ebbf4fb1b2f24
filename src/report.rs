use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::aggregate::MatchRow;

const SHEET_NAME: &str = "BTTS_Today";
const HEADERS: [&str; 5] = ["League", "Match", "Home BTTS%", "Away BTTS%", "Avg BTTS%"];

/// Writes the full filtered table to a single-sheet workbook.
pub fn export_report(path: &Path, rows: &[MatchRow]) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    write_table(sheet, rows)?;
    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;
    Ok(())
}

fn write_table(sheet: &mut Worksheet, rows: &[MatchRow]) -> Result<()> {
    for (col, header) in HEADERS.iter().enumerate() {
        sheet
            .write_string(0, col as u16, *header)
            .with_context(|| format!("write header {header}"))?;
    }
    for (idx, row) in rows.iter().enumerate() {
        let r = (idx + 1) as u32;
        sheet.write_string(r, 0, &row.league)?;
        sheet.write_string(r, 1, &row.match_label)?;
        sheet.write_number(r, 2, row.home_btts)?;
        sheet.write_number(r, 3, row.away_btts)?;
        sheet.write_number(r, 4, row.avg_btts)?;
    }
    Ok(())
}
