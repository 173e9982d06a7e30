use crate::error::ConfigError;
use crate::settings::Settings;
use clap::Args;
use std::path::PathBuf;

/// Command-line flags shared by every subcommand that needs settings.
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Path to a TOML settings file (defaults to `charging.toml` if present).
    #[arg(long, short = 'c', env = "CHARGING_CONFIG")]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    /// Loads the settings from the file named on the command line.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        crate::load_settings(self.config.as_deref())
    }
}
