use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "folio")]
#[command(about = "A small static portfolio site renderer")]
pub struct CliConfig {
    #[arg(long, help = "Fetch data documents from this base URL instead of the site root")]
    pub base_url: Option<String>,

    #[arg(long, default_value = ".")]
    pub site_root: String,

    #[arg(long, default_value = "./site")]
    pub output_path: String,

    #[arg(long, help = "Load settings from a TOML site config instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn site_root(&self) -> &str {
        &self.site_root
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.base_url {
            validation::validate_url("base_url", url)?;
        }
        validation::validate_path("site_root", &self.site_root)?;
        validation::validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
