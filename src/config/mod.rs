pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use self::cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::toml_config::ScriptConfig;
    use crate::core::{ConfigProvider, TableNames};
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "daily-million-sql")]
    #[command(version)]
    #[command(about = "Convert Daily Million draw results (JSON) into a PostgreSQL import script")]
    pub struct CliConfig {
        /// JSON file with daily draw records, newest first
        pub input: String,

        /// Write the SQL here instead of printing it to stdout
        pub output: Option<String>,

        /// Optional TOML configuration (table names, default output path)
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        /// Only read and summarize the input
        #[arg(long)]
        pub dry_run: bool,

        #[arg(skip)]
        pub tables: TableNames,
    }

    impl CliConfig {
        /// 套用 TOML 配置；命令列指定的輸出路徑優先
        pub fn apply_script_config(&mut self, script_config: ScriptConfig) {
            self.tables = script_config.tables;
            if self.output.is_none() {
                self.output = script_config.output.path;
            }
        }

        pub fn load_script_config(&mut self) -> Result<()> {
            if let Some(path) = self.config.clone() {
                tracing::debug!("Loading configuration from: {}", path);
                let script_config = ScriptConfig::from_file(&path)?;
                script_config.validate()?;
                self.apply_script_config(script_config);
            }
            Ok(())
        }
    }

    impl ConfigProvider for CliConfig {
        fn input_path(&self) -> &str {
            &self.input
        }

        fn output_path(&self) -> Option<&str> {
            self.output.as_deref()
        }

        fn table_names(&self) -> &TableNames {
            &self.tables
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("input", &self.input)?;
            if let Some(output) = &self.output {
                validate_path("output", output)?;
            }
            ScriptConfig {
                tables: self.tables.clone(),
                ..Default::default()
            }
            .validate()
        }
    }

}
