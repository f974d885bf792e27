use crate::cli::Args;
use crate::error::{Result, SectorscopeError};
use crate::record::Mode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "DefaultMode")]
    pub default_mode: String,

    #[serde(rename = "ExportDir")]
    pub export_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_mode: "basic".to_string(),
            export_dir: ".".to_string(),
        }
    }
}

impl Config {
    /// Loads `~/.sectorscope`; a missing file falls back to defaults, a
    /// malformed one is an error.
    pub fn load() -> anyhow::Result<Self> {
        if let Some(home) = dirs::home_dir() {
            let config_path = home.join(".sectorscope");
            if config_path.exists() {
                let content = std::fs::read_to_string(config_path)?;
                return Ok(toml::from_str(&content)?);
            }
            tracing::debug!("no config file, using defaults");
        }

        Ok(Self::default())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(home) = dirs::home_dir() {
            let config_path = home.join(".sectorscope");
            let content = toml::to_string_pretty(self)?;
            std::fs::write(config_path, content)?;
        }
        Ok(())
    }

    /// CLI flags override the config file.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(mode) = args.mode {
            self.default_mode = mode.cli_name().to_string();
        }
        if let Some(output) = &args.output {
            self.export_dir = output.clone();
        }
    }

    pub fn get_mode(&self) -> Result<Mode> {
        Mode::from_string(&self.default_mode)
            .ok_or_else(|| SectorscopeError::UnknownMode(self.default_mode.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.get_mode().unwrap(), Mode::Basic);
        assert_eq!(config.export_dir, ".");
    }

    #[test]
    fn test_apply_args_overrides() {
        let mut config = Config::default();
        let args = Args {
            mode: Some(Mode::Premium),
            output: Some("/tmp/exports".to_string()),
            ..Default::default()
        };
        config.apply_args(&args);
        assert_eq!(config.get_mode().unwrap(), Mode::Premium);
        assert_eq!(config.export_dir, "/tmp/exports");
    }

    #[test]
    fn test_unknown_mode_is_an_error() {
        let config = Config {
            default_mode: "platinum".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.get_mode(),
            Err(SectorscopeError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config {
            default_mode: "advanced".to_string(),
            export_dir: "/data".to_string(),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("DefaultMode"));
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.default_mode, "advanced");
        assert_eq!(parsed.export_dir, "/data");
    }
}
