#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::builder::SkylineBuilder;
use crate::domain::model::{InputFormat, OutputFormat, SkylineStrategy};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_required_field, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Effective settings for one run, after layering flags over the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub input_path: Option<String>,
    pub input_format: Option<InputFormat>,
    pub output_format: OutputFormat,
    pub output_path: Option<String>,
    pub strategy: SkylineStrategy,
    pub y_floor: Option<i64>,
    pub verify: bool,
    pub monitor: bool,
}

impl RunConfig {
    pub fn from_provider<C: ConfigProvider>(provider: &C) -> Self {
        Self {
            input_path: provider.input_path().map(str::to_string),
            input_format: Some(provider.input_format()),
            output_format: provider.output_format(),
            output_path: provider.output_path().map(str::to_string),
            strategy: provider.strategy(),
            y_floor: provider.y_floor(),
            verify: provider.verify(),
            monitor: provider.monitoring_enabled(),
        }
    }

    /// 命令列參數優先於 TOML 設定
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        let base = file.map(Self::from_provider).unwrap_or_default();
        let input_path = cli.single_input().map(str::to_string).or(base.input_path);
        // 只有在 TOML 明確指定格式時才沿用，否則依副檔名推斷
        let file_format = file
            .and_then(|f| f.input.format.as_ref())
            .and_then(|_| base.input_format);

        Self {
            input_path,
            input_format: cli.input_format.or(file_format),
            output_format: cli.output_format.unwrap_or(base.output_format),
            output_path: cli.output.clone().or(base.output_path),
            strategy: cli.strategy.unwrap_or(base.strategy),
            y_floor: cli.y_floor.or(base.y_floor),
            verify: cli.verify || base.verify,
            monitor: cli.monitor || base.monitor,
        }
    }

    pub fn builder(&self) -> SkylineBuilder {
        builder_from(self)
    }

    pub fn with_input(mut self, path: impl Into<String>) -> Self {
        self.input_path = Some(path.into());
        self
    }
}

/// Loads and validates a TOML file in one step.
pub fn load_toml(path: &str) -> Result<TomlConfig> {
    let config = TomlConfig::from_file(path)?;
    config.validate()?;
    Ok(config)
}

pub fn builder_from<C: ConfigProvider + ?Sized>(config: &C) -> SkylineBuilder {
    let builder = SkylineBuilder::new().with_strategy(config.strategy());
    match config.y_floor() {
        Some(floor) => builder.with_y_floor(floor),
        None => builder,
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> Option<&str> {
        self.input_path.as_deref()
    }

    fn input_format(&self) -> InputFormat {
        match (self.input_format, self.input_path.as_deref()) {
            (Some(format), _) => format,
            (None, Some(path)) => InputFormat::infer(path),
            (None, None) => InputFormat::default(),
        }
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn strategy(&self) -> SkylineStrategy {
        self.strategy
    }

    fn y_floor(&self) -> Option<i64> {
        self.y_floor
    }

    fn verify(&self) -> bool {
        self.verify
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitor
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        let input = validate_required_field("input_path", &self.input_path)?;
        validate_path("input_path", input)?;
        if let Some(output) = &self.output_path {
            validate_path("output_path", output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SkylineError;

    #[test]
    fn test_input_format_inferred_from_path() {
        let config = RunConfig::default().with_input("data/points.csv");
        assert_eq!(config.input_format(), InputFormat::Csv);

        let config = RunConfig::default().with_input("data/points.txt");
        assert_eq!(config.input_format(), InputFormat::Text);
    }

    #[test]
    fn test_validation_requires_input() {
        assert!(matches!(
            RunConfig::default().validate(),
            Err(SkylineError::MissingConfigError { .. })
        ));
        assert!(RunConfig::default().with_input("p.txt").validate().is_ok());
    }

    #[test]
    fn test_builder_from_config() {
        let config = RunConfig {
            strategy: SkylineStrategy::Iterative,
            y_floor: Some(0),
            ..RunConfig::default()
        };
        let builder = config.builder();
        assert_eq!(builder.strategy(), SkylineStrategy::Iterative);
        assert_eq!(builder.y_floor(), Some(0));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_toml() {
        use clap::Parser;

        let file = TomlConfig::from_toml_str(
            r#"
[output]
format = "json"
path = "from-file.json"

[algorithm]
strategy = "iterative"
y_floor = 1
"#,
        )
        .unwrap();
        let cli = CliConfig::parse_from(["skyline", "points.csv", "-f", "csv", "--verify"]);

        let resolved = RunConfig::resolve(&cli, Some(&file));
        assert_eq!(resolved.input_path.as_deref(), Some("points.csv"));
        assert_eq!(resolved.input_format(), InputFormat::Csv);
        assert_eq!(resolved.output_format, OutputFormat::Csv);
        assert_eq!(resolved.output_path.as_deref(), Some("from-file.json"));
        assert_eq!(resolved.strategy, SkylineStrategy::Iterative);
        assert_eq!(resolved.y_floor, Some(1));
        assert!(resolved.verify);
        assert!(!resolved.monitor);
    }
}
