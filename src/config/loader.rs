//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（tome.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;
use crate::domain::manuscript::RuleOverrides;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["tome", "tome.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `TOME_`，层级分隔符 `__`）
/// 2. 配置文件（tome.toml 或 tome.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `TOME_LOG__LEVEL=debug`
/// - `TOME_OUTPUT__FORMAT=json`
/// - `TOME_OUTPUT__AUTHOR=佚名`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）；rules 不设默认，缺省即使用内置规则
    builder = builder
        .set_default("log.level", "info")?
        .set_default("log.json", false)?
        .set_default("output.format", "outline")?
        .set_default("output.author", "Unknown")?
        .set_default("output.language", "zh-CN")?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级），例如 TOME_OUTPUT__FORMAT=json
    builder = builder.add_source(
        Environment::with_prefix("TOME")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 加载独立的规则文件（顶层即六个规则键）
pub fn load_rules_file(path: &Path) -> Result<RuleOverrides, ConfigError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::LoadError(format!("{}: {}", path.display(), e)))?;

    let rules: RuleOverrides = toml::from_str(&text)
        .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;

    rules
        .validate_patterns()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

    Ok(rules)
}

/// 验证配置有效性
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.log.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Log level cannot be empty".to_string(),
        ));
    }

    // 正则必须在进入解析前校验
    config
        .rules
        .validate_patterns()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

    Ok(())
}

/// 打印配置信息
pub fn print_config(config: &AppConfig) {
    tracing::debug!("=== Application Configuration ===");
    tracing::debug!("Log Level: {}", config.log.level);
    tracing::debug!("Log JSON: {}", config.log.json);
    tracing::debug!("Output Format: {}", config.output.format);
    tracing::debug!("Author: {}", config.output.author);
    tracing::debug!("Language: {}", config.output.language);
    if config.rules.is_empty() {
        tracing::debug!("Rules: built-in defaults");
    } else {
        tracing::debug!("Rules: {:?}", config.rules);
    }
    tracing::debug!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ExportFormat;
    use crate::domain::manuscript::ContentType;
    use tempfile::tempdir;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_empty_log_level() {
        let mut config = AppConfig::default();
        config.log.level = "  ".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_error_for_bad_regex() {
        let mut config = AppConfig::default();
        config.rules.volume_patterns = Some(vec!["^第(".to_string()]);
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("tome.toml");
        std::fs::write(
            &path,
            r#"
[output]
format = "json"
author = "佚名"

[rules]
chapter_patterns = ["^第.+回"]

[rules.content_keywords]
notice = ["公告"]
extra = ["番外"]
"#,
        )
        .unwrap();

        let config = load_config_from_path(Some(&path)).unwrap();
        assert_eq!(config.output.format, ExportFormat::Json);
        assert_eq!(config.output.author, "佚名");
        assert_eq!(config.output.language, "zh-CN");
        assert_eq!(config.rules.chapter_patterns, Some(vec!["^第.+回".to_string()]));

        let keywords = config.rules.content_keywords.unwrap();
        assert_eq!(keywords[0].0, ContentType::Notice);
        assert_eq!(keywords[1].0, ContentType::Extra);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("absent.toml");
        assert!(matches!(
            load_config_from_path(Some(&path)),
            Err(ConfigError::LoadError(_))
        ));
    }

    #[test]
    fn test_load_rules_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("rules.toml");
        std::fs::write(
            &path,
            r#"
volume_patterns = ["^Book \\d+"]

[single_word_types]
"Epilogue" = "postscript"
"#,
        )
        .unwrap();

        let rules = load_rules_file(&path).unwrap();
        assert_eq!(rules.volume_patterns, Some(vec![r"^Book \d+".to_string()]));
        assert_eq!(
            rules.single_word_types,
            Some(vec![("Epilogue".to_string(), ContentType::Postscript)])
        );
    }

    #[test]
    fn test_rules_file_with_bad_regex() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("rules.toml");
        std::fs::write(&path, "exclude_patterns = [\"[\"]\n").unwrap();

        assert!(matches!(
            load_rules_file(&path),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
