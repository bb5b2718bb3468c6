use crate::core::ConfigProvider;
use crate::utils::error::{ContentError, Result};
use crate::utils::validation::{self, Validate};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub store: StoreConfig,
    pub render: RenderSection,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub content_file: String,
    #[serde(default = "default_mount_path")]
    pub mount_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSection {
    pub components: Vec<String>,
    pub output_path: Option<String>,
    /// RFC 3339; defaults to the wall clock at render time.
    pub evaluation_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub log_level: Option<String>,
    pub json_logs: Option<bool>,
}

fn default_mount_path() -> String {
    "/".to_string()
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"))
}

impl RenderConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ContentError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ContentError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.json_logs)
            .unwrap_or(false)
    }
}

impl ConfigProvider for RenderConfig {
    fn content_file(&self) -> &str {
        &self.store.content_file
    }

    fn mount_path(&self) -> &str {
        &self.store.mount_path
    }

    fn component_paths(&self) -> &[String] {
        &self.render.components
    }

    fn output_path(&self) -> Option<&str> {
        self.render.output_path.as_deref()
    }

    fn evaluation_time(&self) -> Option<DateTime<Utc>> {
        self.render.evaluation_time
    }
}

impl Validate for RenderConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("store.content_file", &self.store.content_file)?;
        validation::validate_content_path("store.mount_path", &self.store.mount_path)?;

        validation::validate_non_empty_list("render.components", &self.render.components)?;
        for component in &self.render.components {
            validation::validate_content_path("render.components", component)?;
        }

        if let Some(output_path) = &self.render.output_path {
            validation::validate_path("render.output_path", output_path)?;
        }

        if let Some(level) = self.log_level() {
            validation::validate_log_level("monitoring.log_level", level)?;
        }

        Ok(())
    }
}
