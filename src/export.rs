//! CSV serialization of a record list.
//!
//! Format notes, fixed by the consumers of these files: the header row is
//! the wire field names, unquoted; every data cell is wrapped in double
//! quotes with embedded quotes doubled; rows are joined by a single
//! newline with no trailing newline and no BOM.

use crate::error::{Result, SectorscopeError};
use crate::record::{Mode, RecordSet, TabularRecord};
use crate::store;
use std::path::{Path, PathBuf};

/// A finished export: the conventional filename plus the CSV text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

impl CsvExport {
    /// Writes the export into `dir` under its own filename and returns
    /// the full path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.filename);
        tracing::debug!(path = %path.display(), bytes = self.content.len(), "writing CSV export");
        std::fs::write(&path, &self.content)?;
        Ok(path)
    }
}

/// Serializes `records` to CSV text. An empty list is an error, not an
/// empty string; callers surface it as a user-facing "no data" notice.
pub fn to_csv<R: TabularRecord>(records: &[R]) -> Result<String> {
    if records.is_empty() {
        return Err(SectorscopeError::EmptyExport);
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(R::FIELDS.join(","));
    for record in records {
        let row = record
            .field_values()
            .iter()
            .map(|value| format!("\"{}\"", value.replace('"', "\"\"")))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }
    Ok(lines.join("\n"))
}

/// Serializes the full dataset for `mode` under the
/// `all_sector_<slug>.csv` filename convention.
pub fn export_csv(mode: Mode) -> Result<CsvExport> {
    let content = match store::records(mode) {
        RecordSet::Basic(records) => to_csv(records)?,
        RecordSet::Advanced(records) => to_csv(records)?,
        RecordSet::Premium(records) => to_csv(records)?,
    };
    Ok(CsvExport {
        filename: format!("all_sector_{}.csv", mode.file_slug()),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::BasicRecord;

    struct Pair {
        a: &'static str,
        b: &'static str,
    }

    impl TabularRecord for Pair {
        const FIELDS: &'static [&'static str] = &["a", "b"];

        fn field_values(&self) -> Vec<&str> {
            vec![self.a, self.b]
        }
    }

    #[test]
    fn test_golden_output() {
        let records = [
            Pair { a: "1", b: "x,y" },
            Pair {
                a: "2",
                b: "say \"hi\"",
            },
        ];
        let csv = to_csv(&records).unwrap();
        assert_eq!(csv, "a,b\n\"1\",\"x,y\"\n\"2\",\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_empty_list_is_an_error() {
        let records: [Pair; 0] = [];
        assert!(matches!(
            to_csv(&records),
            Err(SectorscopeError::EmptyExport)
        ));
    }

    #[test]
    fn test_no_trailing_newline_or_bom() {
        let records = [Pair { a: "1", b: "2" }];
        let csv = to_csv(&records).unwrap();
        assert!(!csv.ends_with('\n'));
        assert!(!csv.starts_with('\u{feff}'));
    }

    #[test]
    fn test_header_order_is_stable() {
        let first = export_csv(Mode::Premium).unwrap();
        let second = export_csv(Mode::Premium).unwrap();
        assert_eq!(first.content, second.content);
        assert_eq!(
            first.content.lines().next().unwrap(),
            BasicRecord::FIELDS[..12].join(",")
                + ",numberOfEndpoints,numberOfServers,cloudFootprint,dataCenterDetails,networkSize,\
                   existingSecurityStack,itBudgetApprox,existingMSPVendor,currentSLAsAndSupportHours,\
                   painPointsWithExistingIT,averageDowntimeIncidents,existingMonitoringTools,\
                   currentITSpend,currentMSPContractValue,pricingPreferences,renewalContractTimeline,\
                   budgetAvailableForOutsourcing,customerBenchmarkingSummary,additionalCommercialNotes"
        );
    }

    #[test]
    fn test_export_filenames() {
        assert_eq!(
            export_csv(Mode::Basic).unwrap().filename,
            "all_sector_proposition1.csv"
        );
        assert_eq!(
            export_csv(Mode::Advanced).unwrap().filename,
            "all_sector_proposition2.csv"
        );
        assert_eq!(
            export_csv(Mode::Premium).unwrap().filename,
            "all_sector_proposition3.csv"
        );
    }

    #[test]
    fn test_export_line_counts() {
        for mode in Mode::ALL {
            let export = export_csv(mode).unwrap();
            // Header plus 20 data rows; no field value contains a newline.
            assert_eq!(export.content.lines().count(), 21, "mode {mode}");
            assert!(export.content.starts_with("customerName,companyName,"));
        }
    }
}
