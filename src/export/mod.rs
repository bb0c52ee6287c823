//! Report exports: delimited text and plain-text summaries.
//!
//! Both exports are pure functions of the in-memory queue; nothing is ever
//! read back in. The delimited format is minimal RFC4180-style CSV with a
//! UTF-8 byte-order mark so spreadsheet tools pick up the Persian text,
//! data fields individually double-quoted with internal quotes doubled.

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{ReportItem, ReportRange};
use crate::Result;

/// Byte-order mark prepended to CSV output.
pub const BOM: char = '\u{feff}';

/// CSV header row. Data fields are quoted; the header is not.
const CSV_HEADER: [&str; 8] = [
    "UTN",
    "عنوان",
    "مسئول",
    "مرحله",
    "کانال",
    "موعد",
    "درصد تکمیل",
    "سطح محرمانگی",
];

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Serialize a filtered queue view to CSV. Returns `None` for an empty
/// view: no document is produced, the caller shows a notice instead.
pub fn csv_document(items: &[&ReportItem]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    let rows = items
        .iter()
        .map(|item| {
            [
                item.external_ref.clone(),
                item.subject.clone(),
                item.owner.clone(),
                item.stage.label().to_string(),
                item.channel.label().to_string(),
                item.due_label.clone(),
                format!("{}%", item.completeness),
                item.sensitivity.label().to_string(),
            ]
            .iter()
            .map(|field| csv_field(field))
            .collect::<Vec<_>>()
            .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n");
    Some(format!("{}{}\n{}", BOM, CSV_HEADER.join(","), rows))
}

/// Export filename for a range: `report-desk-<range>.csv`.
pub fn csv_filename(range: ReportRange) -> String {
    format!("report-desk-{}.csv", range)
}

/// Plain-text summary of one report: newline-joined `Label: value` lines.
pub fn summary_text(item: &ReportItem) -> String {
    format!(
        "گزارش: {}\nUTN: {}\nمسئول: {}\nکانال: {}\nمرحله فعلی: {}\nموعد: {}\nدرصد تکمیل: {}%\nپیوست‌ها: {}\nسطح محرمانگی: {}",
        item.subject,
        item.external_ref,
        item.owner,
        item.channel.label(),
        item.stage.label(),
        item.due_label,
        item.completeness,
        item.attachments,
        item.sensitivity.label(),
    )
}

/// Summary filename: `<external-ref>-summary.txt`.
pub fn summary_filename(item: &ReportItem) -> String {
    format!("{}-summary.txt", item.external_ref)
}

/// Write an export document into a directory and return the full path.
pub fn write_export(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Channel, ReportStage, Sensitivity};
    use chrono::Utc;

    fn report(subject: &str, stage: ReportStage) -> ReportItem {
        let now = Utc::now();
        ReportItem {
            id: "rep-a1b2".to_string(),
            external_ref: "UTN-2045".to_string(),
            subject: subject.to_string(),
            owner: "ندا شریفی".to_string(),
            stage,
            due_label: "امروز · ۱۸:۰۰".to_string(),
            channel: Channel::Qa,
            completeness: 78,
            attachments: 6,
            sensitivity: Sensitivity::Confidential,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_empty_view_produces_no_document() {
        assert!(csv_document(&[]).is_none());
    }

    #[test]
    fn test_csv_starts_with_bom_and_header() {
        let item = report("ممیزی لرزش بدنه", ReportStage::ReadyToPublish);
        let csv = csv_document(&[&item]).unwrap();
        assert!(csv.starts_with(BOM));
        let mut lines = csv.trim_start_matches(BOM).lines();
        assert_eq!(
            lines.next().unwrap(),
            "UTN,عنوان,مسئول,مرحله,کانال,موعد,درصد تکمیل,سطح محرمانگی"
        );
        let row = lines.next().unwrap();
        assert!(row.contains("\"UTN-2045\""));
        assert!(row.contains("\"آماده انتشار\""));
        assert!(row.contains("\"78%\""));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_csv_doubles_internal_quotes() {
        let item = report("گزارش \"ویژه\" بدنه", ReportStage::Analyzing);
        let csv = csv_document(&[&item]).unwrap();
        assert!(csv.contains("\"گزارش \"\"ویژه\"\" بدنه\""));
    }

    #[test]
    fn test_csv_filename_carries_range() {
        assert_eq!(csv_filename(ReportRange::Month), "report-desk-month.csv");
        assert_eq!(csv_filename(ReportRange::Week), "report-desk-week.csv");
        assert_eq!(
            csv_filename(ReportRange::Quarter),
            "report-desk-quarter.csv"
        );
    }

    #[test]
    fn test_summary_text_lines() {
        let item = report("ممیزی لرزش بدنه", ReportStage::PendingApproval);
        let summary = summary_text(&item);
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "گزارش: ممیزی لرزش بدنه");
        assert_eq!(lines[1], "UTN: UTN-2045");
        assert_eq!(lines[4], "مرحله فعلی: در انتظار تایید");
        assert_eq!(lines[8], "سطح محرمانگی: محرمانه");
    }

    #[test]
    fn test_summary_filename() {
        let item = report("گزارش", ReportStage::Analyzing);
        assert_eq!(summary_filename(&item), "UTN-2045-summary.txt");
    }

    #[test]
    fn test_write_export_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_export(dir.path(), "report-desk-month.csv", "content").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "content");
    }
}
