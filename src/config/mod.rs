pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use chrono::{DateTime, Utc};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "cinema-models")]
#[command(about = "Render cinema site components from a content export to JSON view models")]
pub struct CliConfig {
    #[arg(long, help = "TOML render configuration; overrides the other content options")]
    pub config: Option<String>,

    #[arg(long, default_value = "content.json", help = "JCR-style JSON content export")]
    pub content_file: String,

    #[arg(long, default_value = "/", help = "Repository path the export is mounted at")]
    pub mount_path: String,

    #[arg(long = "component", value_delimiter = ',', help = "Component paths to render")]
    pub components: Vec<String>,

    #[arg(long, help = "Directory for rendered JSON; stdout when omitted")]
    pub output_path: Option<String>,

    #[arg(long, value_parser = parse_timestamp, help = "Evaluation time (RFC 3339) for page visibility")]
    pub at: Option<DateTime<Utc>>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
fn parse_timestamp(value: &str) -> std::result::Result<DateTime<Utc>, String> {
    validation::validate_timestamp("at", value).map_err(|e| e.to_string())
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn content_file(&self) -> &str {
        &self.content_file
    }

    fn mount_path(&self) -> &str {
        &self.mount_path
    }

    fn component_paths(&self) -> &[String] {
        &self.components
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn evaluation_time(&self) -> Option<DateTime<Utc>> {
        self.at
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("content_file", &self.content_file)?;
        validation::validate_content_path("mount_path", &self.mount_path)?;
        validation::validate_non_empty_list("component", &self.components)?;
        for component in &self.components {
            validation::validate_content_path("component", component)?;
        }
        if let Some(output_path) = &self.output_path {
            validation::validate_path("output_path", output_path)?;
        }
        Ok(())
    }
}
