use serde::Deserialize;

use crate::services::FetchOptions;

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            structured: false,
        }
    }
}

/// 拉取配置
///
/// 字段使用 snake_case，对应环境变量 SESSION_MOCK_FETCH__SHOULD_ERROR。
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct FetchConfig {
    /// 强制模拟失败
    pub should_error: bool,
}

impl FetchConfig {
    /// 转换为拉取选项
    pub fn options(&self) -> FetchOptions {
        FetchOptions::new(self.should_error)
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 应用名称
    pub app_name: String,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 拉取配置
    pub fetch: FetchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "session-mock".into(),
            logging: LoggingConfig::default(),
            fetch: FetchConfig::default(),
        }
    }
}
