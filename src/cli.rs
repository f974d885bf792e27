use crate::record::Mode;
use clap::Parser;

#[derive(Parser, Default)]
#[command(name = "sectorscope", about = "An all-sector IT MSP prospect database explorer")]
#[command(version, long_about = None)]
pub struct Args {
    /// Dataset mode: basic, advanced, or premium (default from config)
    #[arg(short, long, value_parser = parse_mode)]
    pub mode: Option<Mode>,

    /// Print the prospect table and exit
    #[arg(short, long)]
    pub table: bool,

    /// Print the aggregate chart series and exit
    #[arg(short, long)]
    pub charts: bool,

    /// Write the CSV export file and exit
    #[arg(short, long)]
    pub export: bool,

    /// Directory for the CSV export file (default from config)
    #[arg(short, long)]
    pub output: Option<String>,

    /// List available dataset modes and exit
    #[arg(short, long)]
    pub list_modes: bool,
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    Mode::from_string(s)
        .ok_or_else(|| format!("unknown mode '{s}' (expected basic, advanced, or premium)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode_accepts_aliases() {
        assert_eq!(parse_mode("premium"), Ok(Mode::Premium));
        assert_eq!(parse_mode("Proposition1"), Ok(Mode::Basic));
        assert!(parse_mode("gold").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["sectorscope", "--mode", "advanced", "--export"]);
        assert_eq!(args.mode, Some(Mode::Advanced));
        assert!(args.export);
        assert!(!args.table);
    }
}
