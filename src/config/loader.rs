use crate::config::config::AppConfig;
use crate::error::Result as AppResult;
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use std::path::PathBuf;

/// 环境变量前缀
pub const ENV_PREFIX: &str = "SESSION_MOCK_";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 搜索路径：
    /// 1. ./session-mock.toml
    /// 2. 环境变量（如 SESSION_MOCK_FETCH__SHOULD_ERROR=true）
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// 从指定路径加载配置
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        let figment = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract()
    }

    /// 加载并验证配置
    pub fn load_validated() -> AppResult<AppConfig> {
        let config = Self::load()?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.app_name.trim().is_empty() {
            return Err(ConfigValidationError::MissingAppName);
        }

        let level = config.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigValidationError::InvalidLogLevel(
                config.logging.level.clone(),
            ));
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("应用名称未配置")]
    MissingAppName,

    #[error("日志级别无效: {0}")]
    InvalidLogLevel(String),
}

impl From<ConfigValidationError> for crate::error::AppError {
    fn from(e: ConfigValidationError) -> Self {
        crate::error::AppError::Config(e.to_string())
    }
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("session-mock.toml")
}

/// 检查配置文件是否存在
pub fn config_exists() -> bool {
    default_config_path().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::FetchOptions;
    use figment::Jail;

    #[test]
    fn test_defaults_without_file_or_env() {
        Jail::expect_with(|_jail| {
            let config = ConfigLoader::load()?;

            assert_eq!(config.app_name, "session-mock");
            assert_eq!(config.logging.level, "info");
            assert!(!config.fetch.should_error);
            assert!(!config_exists());
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "session-mock.toml",
                r#"
                    app_name = "demo"

                    [logging]
                    level = "warn"
                    structured = true

                    [fetch]
                    should_error = false
                "#,
            )?;
            jail.set_env("SESSION_MOCK_FETCH__SHOULD_ERROR", "true");

            let config = ConfigLoader::load()?;

            assert_eq!(config.app_name, "demo");
            assert_eq!(config.logging.level, "warn");
            assert!(config.logging.structured);
            assert!(config.fetch.should_error);
            Ok(())
        });
    }

    #[test]
    fn test_validate() {
        assert!(ConfigLoader::validate(&AppConfig::default()).is_ok());

        let mut config = AppConfig::default();
        config.logging.level = "loud".into();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidLogLevel(_))
        ));

        let mut config = AppConfig::default();
        config.app_name = "  ".into();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::MissingAppName)
        ));
    }

    #[test]
    fn test_load_validated_rejects_bad_level() {
        Jail::expect_with(|jail| {
            jail.set_env("SESSION_MOCK_LOGGING__LEVEL", "chatty");

            let err = ConfigLoader::load_validated().unwrap_err();

            assert!(matches!(err, crate::error::AppError::Config(_)));
            assert!(err.to_string().contains("chatty"));
            Ok(())
        });
    }

    #[test]
    fn test_fetch_section_converts_to_options() {
        Jail::expect_with(|jail| {
            jail.set_env("SESSION_MOCK_FETCH__SHOULD_ERROR", "true");

            let config = ConfigLoader::load_validated().unwrap();

            assert_eq!(config.fetch.options(), FetchOptions::failing());
            Ok(())
        });
    }
}
