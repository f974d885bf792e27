//! Plain-text rendering of the view models. The only place besides `run`
//! that prints.

use crate::aggregate::ChartSeries;
use crate::view::{OverviewRow, TableView};

const MAX_CELL_WIDTH: usize = 36;

pub fn print_overview(rows: &[OverviewRow]) {
    println!("ALL SECTOR IT MSP INDUSTRY DATABASE");
    println!("Potential Customer Database across all industry sectors");
    println!();
    for row in rows {
        println!("  {:<10} {} ({} records)", row.name, row.title, row.record_count);
    }
    println!();
}

pub fn print_table(view: &TableView) {
    println!("{}", view.title);

    if view.rows.is_empty() {
        println!("No data available");
        println!();
        return;
    }

    let widths = column_widths(view);
    let header_line = view
        .headers
        .iter()
        .zip(&widths)
        .map(|(header, &width)| format!("{header:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{header_line}");
    println!("{}", "-".repeat(header_line.chars().count()));

    for row in &view.rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:<width$}", clip(cell, width)))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{line}");
    }
    println!();
}

pub fn print_series(series: &ChartSeries) {
    println!("{}", series.title);

    let label_width = series
        .points
        .iter()
        .map(|point| point.label.chars().count())
        .max()
        .unwrap_or(0);

    for point in &series.points {
        let values = series
            .value_labels
            .iter()
            .zip(&point.values)
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {:<label_width$}  {values}", point.label);
    }
    println!();
}

fn column_widths(view: &TableView) -> Vec<usize> {
    view.headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            view.rows
                .iter()
                .map(|row| row[column].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
                .min(MAX_CELL_WIDTH)
        })
        .collect()
}

fn clip(cell: &str, max: usize) -> String {
    if cell.chars().count() <= max {
        cell.to_string()
    } else {
        let mut clipped: String = cell.chars().take(max.saturating_sub(1)).collect();
        clipped.push('…');
        clipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Mode;
    use crate::view::prospect_table;

    #[test]
    fn test_clip_short_and_long() {
        assert_eq!(clip("short", 10), "short");
        assert_eq!(clip("a very long cell value", 8), "a very …");
    }

    #[test]
    fn test_column_widths_are_bounded() {
        let table = prospect_table(Mode::Premium);
        for width in column_widths(&table) {
            assert!(width <= MAX_CELL_WIDTH);
            assert!(width >= 1);
        }
    }
}
