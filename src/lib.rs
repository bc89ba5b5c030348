pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::ScriptConfig};
pub use core::{etl::EtlEngine, pipeline::SqlScriptPipeline, render::render};
pub use domain::model::{DailyDrawRecord, GameType, TableNames};
pub use domain::ports::LoadOutcome;
pub use utils::error::{Result, ScriptError};
