// ==========================================
// 学生成绩看板 - 配置管理器
// ==========================================
// 职责: 配置加载、环境变量覆写、快照导出
// 优先级: 环境变量 > 配置文件 > 默认值
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 显示精度上限（小数位）
const MAX_DISPLAY_PRECISION: usize = 4;

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    // ===== 文件字段 =====
    pub const SEED_SAMPLE_DATA: &str = "seed_sample_data";
    pub const DISPLAY_PRECISION: &str = "display_precision";
    pub const IMPORT_PATH: &str = "import_path";
    pub const LOG_FILTER: &str = "logging.filter";
    pub const LOG_JSON: &str = "logging.json";

    // ===== 环境变量 =====
    pub const ENV_CONFIG_PATH: &str = "STUDENT_RECORDS_CONFIG";
    pub const ENV_SEED_SAMPLE_DATA: &str = "STUDENT_RECORDS_SEED";
    pub const ENV_DISPLAY_PRECISION: &str = "STUDENT_RECORDS_PRECISION";
    pub const ENV_IMPORT_PATH: &str = "STUDENT_RECORDS_IMPORT";
    pub const ENV_LOG_FILTER: &str = "STUDENT_RECORDS_LOG";
    pub const ENV_LOG_JSON: &str = "STUDENT_RECORDS_LOG_JSON";
}

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config file ({path}): {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config value (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ==========================================
// 配置结构
// ==========================================

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// EnvFilter 语法,RUST_LOG 存在时以 RUST_LOG 为准
    pub filter: String,
    /// 是否输出 JSON 格式日志
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

/// 看板会话配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// 启动时是否预置演示学生（默认空花名册启动）
    pub seed_sample_data: bool,
    /// 分数显示的小数位
    pub display_precision: usize,
    /// 启动时导入的 CSV 花名册（可选）
    pub import_path: Option<PathBuf>,
    pub logging: LoggingConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: false,
            display_precision: 1,
            import_path: None,
            logging: LoggingConfig::default(),
        }
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    source_path: Option<PathBuf>,
    config: DashboardConfig,
}

impl ConfigManager {
    /// 使用默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 文件加载
    ///
    /// # 返回
    /// - 文件不存在: 默认配置（source_path 为 None）
    /// - 格式错误/取值非法: ConfigError
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "配置文件不存在,使用默认配置");
            return Ok(Self::new());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config: DashboardConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        let manager = Self {
            source_path: Some(path.to_path_buf()),
            config,
        };
        manager.validate()?;

        tracing::info!(path = %path.display(), "配置文件已加载");
        Ok(manager)
    }

    /// 从默认位置加载
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(default_config_path())
    }

    /// 应用进程环境变量覆写
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_with(|key| std::env::var(key).ok())
    }

    /// 应用覆写（lookup 按环境变量名取值）
    pub fn apply_overrides_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(config_keys::ENV_SEED_SAMPLE_DATA) {
            self.config.seed_sample_data =
                parse_bool(config_keys::ENV_SEED_SAMPLE_DATA, &value)?;
        }

        if let Some(value) = lookup(config_keys::ENV_DISPLAY_PRECISION) {
            self.config.display_precision = value.trim().parse::<usize>().map_err(|e| {
                ConfigError::InvalidValue {
                    key: config_keys::ENV_DISPLAY_PRECISION.to_string(),
                    value: value.clone(),
                    message: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup(config_keys::ENV_IMPORT_PATH) {
            let trimmed = value.trim();
            self.config.import_path = if trimmed.is_empty() {
                None
            } else {
                Some(PathBuf::from(trimmed))
            };
        }

        if let Some(value) = lookup(config_keys::ENV_LOG_FILTER) {
            if !value.trim().is_empty() {
                self.config.logging.filter = value.trim().to_string();
            }
        }

        if let Some(value) = lookup(config_keys::ENV_LOG_JSON) {
            self.config.logging.json = parse_bool(config_keys::ENV_LOG_JSON, &value)?;
        }

        self.validate()
    }

    /// 取值合法性检查
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.config.display_precision > MAX_DISPLAY_PRECISION {
            return Err(ConfigError::InvalidValue {
                key: config_keys::DISPLAY_PRECISION.to_string(),
                value: self.config.display_precision.to_string(),
                message: format!("must not exceed {} decimal places", MAX_DISPLAY_PRECISION),
            });
        }
        Ok(())
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn into_config(self) -> DashboardConfig {
        self.config
    }

    /// 实际加载的配置文件
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// 配置快照（JSON）,用于启动日志
    pub fn snapshot_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(&self.config)?)
    }
}

/// 解析布尔开关
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            message: "expected a boolean (true/false)".to_string(),
        }),
    }
}

/// 默认配置文件路径
///
/// 顺序: STUDENT_RECORDS_CONFIG → 用户配置目录 → 当前目录
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(config_keys::ENV_CONFIG_PATH) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match dirs::config_dir() {
        Some(config_dir) => config_dir.join("student-records").join("config.json"),
        None => PathBuf::from("./student_records.json"),
    }
}
