use sectorscope::aggregate::{chart_series, ChartKind};
use sectorscope::export::export_csv;
use sectorscope::record::{CustomerRecord, Mode};
use sectorscope::store;
use sectorscope::view::mode_overview;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("sectorscope Demo");
    println!("================");

    println!("Available dataset modes:");
    for row in mode_overview() {
        println!("  - {} ({}, {} records)", row.name, row.title, row.record_count);
    }

    let mode = Mode::Advanced;
    println!("\nFirst companies in the {mode} dataset:");
    for customer in store::records(mode).customers().iter().take(5) {
        println!(
            "  {} [{}] - {}",
            customer.company_name(),
            customer.company_size(),
            customer.industry_area()
        );
    }

    println!("\nAggregate chart series for {mode}:");
    for kind in ChartKind::ALL {
        let series = chart_series(mode, kind);
        println!("  {} ({} points)", series.title, series.points.len());
        for point in series.points.iter().take(2) {
            let values = series
                .value_labels
                .iter()
                .zip(&point.values)
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join(" ");
            println!("    {}: {}", point.label, values);
        }
    }

    let export = export_csv(mode)?;
    println!(
        "\nCSV export {} would hold {} bytes ({} lines)",
        export.filename,
        export.content.len(),
        export.content.lines().count()
    );

    Ok(())
}
