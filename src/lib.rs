pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::run_job;
pub use config::{toml_config::TomlConfig, RunConfig};
pub use crate::core::{builder::SkylineBuilder, engine::SkylineEngine};
pub use domain::model::{InputFormat, OutputFormat, Point, SkylineReport, SkylineStrategy};
pub use utils::error::{Result, SkylineError};
