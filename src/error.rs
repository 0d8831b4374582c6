//! 错误处理模块
//!
//! 定义应用程序的错误类型和错误处理逻辑。

use thiserror::Error;

/// 模拟拉取失败时返回给调用方的固定提示
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load sessions. Please try again.";

/// 模拟拉取失败
///
/// 由调用方通过 `should_error` 主动触发，不可重试，也不携带部分结果。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{}", FETCH_FAILED_MESSAGE)]
pub struct FetchError;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum AppError {
    /// 模拟拉取失败
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 序列化错误
    #[error("序列化错误: {0}")]
    Serialization(String),
}

impl AppError {
    /// 是否为模拟拉取失败
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, AppError::Fetch(_))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e.to_string())
    }
}

impl From<figment::Error> for AppError {
    fn from(e: figment::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, AppError>;
