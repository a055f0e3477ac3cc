pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "territory-helper")]
#[command(about = "Organize door-to-door canvassing territories and export them to xlsx")]
pub struct CliConfig {
    /// Directory the exported spreadsheet is written into
    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Territory name used for the export filename; editable in the session
    #[arg(long)]
    pub territory: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn territory_name(&self) -> Option<&str> {
        self.territory.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)
    }
}
