//! Session Mock - 模拟会话拉取
//!
//! 在没有真实后端的测试、演示和离线开发环境中，模拟网络请求的延迟与失败，
//! 返回内置会话数据集的独立副本。

pub mod config;
pub mod data;
pub mod error;
pub mod observability;
pub mod services;

pub use error::{AppError, FETCH_FAILED_MESSAGE, FetchError, Result};
pub use services::{FetchOptions, SessionFetcher, SimulatedFetcher, fetch_sessions};
