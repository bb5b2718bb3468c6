pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{
    cli::{LocalStorage, StdoutStorage},
    toml_config::RenderConfig,
};

pub use adapters::JsonContentStore;
pub use core::{
    engine::RenderEngine,
    renderer::{ComponentModel, ComponentRenderer, RenderContext},
};
pub use utils::error::{ContentError, MissingData, Result};
