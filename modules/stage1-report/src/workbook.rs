use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use rust_xlsxwriter::Workbook;

use crate::report::ReportRow;

/// All run-date computations happen in this zone, so the filename rolls
/// over at local midnight regardless of where the job runs.
const REPORT_TZ: chrono_tz::Tz = chrono_tz::Asia::Jakarta;

const SHEET_NAME: &str = "Stage 1";

pub const COLUMNS: [&str; 8] = [
    "No",
    "Region",
    "Chapter Name",
    "13–17 Years (Submitted)",
    "13–17 Years (In Progress)",
    "Above 18 Years (Submitted)",
    "Above 18 Years (In Progress)",
    "Total",
];

/// Current calendar date in the reporting zone.
pub fn today_in_report_zone() -> NaiveDate {
    Utc::now().with_timezone(&REPORT_TZ).date_naive()
}

pub fn artifact_filename(date: NaiveDate) -> String {
    format!("award_force_stage1_{}.xlsx", date.format("%Y%m%d"))
}

/// Write the composed rows into a run-dated workbook under `dir`. A
/// same-day rerun overwrites the previous file.
pub fn write_workbook(rows: &[ReportRow], dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    let path = dir.join(artifact_filename(date));

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, title) in COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *title)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_number(r, 0, row.sequence as f64)?;
        sheet.write_string(r, 1, row.region.as_str())?;
        sheet.write_string(r, 2, row.chapter_name.as_str())?;
        sheet.write_number(r, 3, row.counts.teen_submitted as f64)?;
        sheet.write_number(r, 4, row.counts.teen_in_progress as f64)?;
        sheet.write_number(r, 5, row.counts.adult_submitted as f64)?;
        sheet.write_number(r, 6, row.counts.adult_in_progress as f64)?;
        sheet.write_number(r, 7, row.total as f64)?;
    }

    workbook.save(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::ChapterCounts;
    use crate::region::Region;

    #[test]
    fn filename_is_dated_yyyymmdd() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 22).unwrap();
        assert_eq!(artifact_filename(date), "award_force_stage1_20250722.xlsx");
    }

    #[test]
    fn writes_a_workbook_to_the_dated_path() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![ReportRow {
            sequence: 1,
            region: Region::Apj,
            chapter_name: "Indonesia".to_string(),
            counts: ChapterCounts {
                teen_submitted: 3,
                teen_in_progress: 1,
                adult_submitted: 2,
                adult_in_progress: 0,
            },
            total: 6,
        }];
        let date = NaiveDate::from_ymd_opt(2025, 7, 22).unwrap();

        let path = write_workbook(&rows, dir.path(), date).unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "award_force_stage1_20250722.xlsx"
        );
        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn same_day_rerun_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 7, 22).unwrap();

        let first = write_workbook(&[], dir.path(), date).unwrap();
        let second = write_workbook(&[], dir.path(), date).unwrap();

        assert_eq!(first, second);
        let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
    }
}
