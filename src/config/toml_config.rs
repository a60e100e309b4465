use crate::domain::model::{InputFormat, OutputFormat, SkylineStrategy};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SkylineError};
use crate::utils::validation::{validate_choice, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub algorithm: AlgorithmConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Used when the config drives `run_job` directly (or through
    /// `RunConfig::from_provider`). The binary always takes its input from
    /// the positional argument.
    pub path: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlgorithmConfig {
    pub strategy: Option<String>,
    pub y_floor: Option<i64>,
    pub verify: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

const INPUT_FORMATS: [&str; 3] = ["text", "txt", "csv"];
const OUTPUT_FORMATS: [&str; 4] = ["text", "txt", "csv", "json"];
const STRATEGIES: [&str; 2] = ["recursive", "iterative"];

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SkylineError::ConfigError {
                    message: format!("config file '{}' not found", path.display()),
                }
            } else {
                SkylineError::IoError(e)
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SkylineError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SKYLINE_OUTPUT})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SkylineError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(path) = &self.input.path {
            validate_path("input.path", path)?;
        }
        if let Some(format) = &self.input.format {
            validate_choice("input.format", &format.to_ascii_lowercase(), &INPUT_FORMATS)?;
        }
        if let Some(path) = &self.output.path {
            validate_path("output.path", path)?;
        }
        if let Some(format) = &self.output.format {
            validate_choice("output.format", &format.to_ascii_lowercase(), &OUTPUT_FORMATS)?;
        }
        if let Some(strategy) = &self.algorithm.strategy {
            validate_choice("algorithm.strategy", &strategy.to_ascii_lowercase(), &STRATEGIES)?;
        }
        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.path.as_deref()
    }

    fn input_format(&self) -> InputFormat {
        match (&self.input.format, &self.input.path) {
            (Some(format), _) => format.parse().unwrap_or_default(),
            (None, Some(path)) => InputFormat::infer(path),
            (None, None) => InputFormat::default(),
        }
    }

    fn output_format(&self) -> OutputFormat {
        self.output
            .format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }

    fn strategy(&self) -> SkylineStrategy {
        self.algorithm
            .strategy
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    fn y_floor(&self) -> Option<i64> {
        self.algorithm.y_floor
    }

    fn verify(&self) -> bool {
        self.algorithm.verify.unwrap_or(false)
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
