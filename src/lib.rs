//! # sectorscope
//!
//! An explorer for a fixed all-sector IT MSP prospect database: tabbed
//! dataset variants, size-bucket aggregates, and CSV export.
//!
//! ## Features
//!
//! - Three dataset propositions (basic, advanced, premium) over the same
//!   20 companies, each adding fields
//! - Best-effort numeric extraction from free-text fields
//! - Size-bucket averages and per-company chart series
//! - RFC-4180-style CSV export with the `all_sector_<mode>.csv` filename
//!   convention
//!
//! ## Example
//!
//! ```rust
//! use sectorscope::aggregate::{chart_series, ChartKind};
//! use sectorscope::record::Mode;
//!
//! let series = chart_series(Mode::Basic, ChartKind::EndpointAverages);
//! assert_eq!(series.points[0].label, "SME");
//! ```

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod extract;
pub mod record;
pub mod store;
pub mod view;

use anyhow::{Context, Result};
use cli::Args;
use config::Config;
use std::path::Path;

/// Main entry point for the sectorscope binary.
///
/// Loads the config file, applies CLI overrides, and dispatches on the
/// action flags. With no action flags it prints the overview, the
/// prospect table, and all four chart series for the selected mode.
pub fn run(args: Args) -> Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;
    config.apply_args(&args);
    let mode = config.get_mode()?;

    if args.list_modes {
        display::print_overview(&view::mode_overview());
        return Ok(());
    }

    let action_selected = args.table || args.charts || args.export;

    if !action_selected {
        display::print_overview(&view::mode_overview());
    }

    if args.table || !action_selected {
        display::print_table(&view::prospect_table(mode));
    }

    if args.charts || !action_selected {
        for kind in aggregate::ChartKind::ALL {
            display::print_series(&aggregate::chart_series(mode, kind));
        }
    }

    if args.export {
        let export = export::export_csv(mode)
            .with_context(|| format!("Failed to export {mode} dataset"))?;
        let path = export
            .write_to(Path::new(&config.export_dir))
            .with_context(|| format!("Failed to write {}", export.filename))?;
        println!(
            "Exported {} records to {}",
            store::records(mode).len(),
            path.display()
        );
    }

    Ok(())
}
