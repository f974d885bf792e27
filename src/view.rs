//! UI-agnostic view models: plain headers and string cells, so any front
//! end can draw them without knowing about the record types.

use crate::record::Mode;
use crate::store;

/// A renderable table: title, column headers, and rows of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub title: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// One line of the mode overview (the tab bar of the original view, in
/// data form).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewRow {
    pub name: &'static str,
    pub title: &'static str,
    pub record_count: usize,
}

/// Compact prospect table for the selected mode: serial number plus the
/// identity and contact columns shared by every proposition. The full
/// field set is what the CSV export is for.
#[must_use]
pub fn prospect_table(mode: Mode) -> TableView {
    let headers = vec![
        "S.No.",
        "Company Name",
        "Company Size",
        "Industry Area",
        "Annual Revenue",
        "Key Contact",
        "Email Address",
    ];

    let rows = store::records(mode)
        .customers()
        .iter()
        .enumerate()
        .map(|(index, record)| {
            vec![
                (index + 1).to_string(),
                record.company_name().to_string(),
                record.company_size().to_string(),
                record.industry_area().to_string(),
                record.annual_revenue().to_string(),
                record.key_contact().to_string(),
                record.email_address().to_string(),
            ]
        })
        .collect();

    TableView {
        title: mode.title().to_string(),
        headers,
        rows,
    }
}

/// One overview row per mode, in mode order.
#[must_use]
pub fn mode_overview() -> Vec<OverviewRow> {
    Mode::ALL
        .iter()
        .map(|mode| OverviewRow {
            name: mode.cli_name(),
            title: mode.title(),
            record_count: store::records(*mode).len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prospect_table_shape() {
        for mode in Mode::ALL {
            let table = prospect_table(mode);
            assert_eq!(table.title, mode.title());
            assert_eq!(table.rows.len(), 20);
            for row in &table.rows {
                assert_eq!(row.len(), table.headers.len());
            }
        }
    }

    #[test]
    fn test_serial_column_starts_at_one() {
        let table = prospect_table(Mode::Basic);
        assert_eq!(table.rows[0][0], "1");
        assert_eq!(table.rows[19][0], "20");
        assert_eq!(table.rows[0][1], "Global Bank Corp");
    }

    #[test]
    fn test_mode_overview_rows() {
        let rows = mode_overview();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name, "basic");
        assert_eq!(rows[2].title, Mode::Premium.title());
        assert!(rows.iter().all(|row| row.record_count == 20));
    }
}
