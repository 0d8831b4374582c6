//! 会话拉取服务
//!
//! 模拟一次网络请求：固定等待后，要么返回内置数据集的深拷贝，要么返回模拟失败。
//! 用于没有真实后端的测试、演示和离线开发环境。

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::data::Dataset;
use crate::error::{FetchError, Result};

/// 模拟网络延迟
pub const FETCH_DELAY: Duration = Duration::from_millis(500);

/// 会话列表，结构对调用方之外不透明
pub type SessionList = Value;

/// 拉取选项
///
/// 未识别的字段会被忽略。
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct FetchOptions {
    /// 为 true 时强制失败
    pub should_error: bool,
}

impl FetchOptions {
    /// 创建新选项
    pub fn new(should_error: bool) -> Self {
        Self { should_error }
    }

    /// 强制失败的选项
    pub fn failing() -> Self {
        Self::new(true)
    }
}

/// 会话拉取服务 trait
#[async_trait]
pub trait SessionFetcher: Send + Sync {
    /// 拉取会话列表
    async fn fetch_sessions(&self, options: FetchOptions) -> Result<SessionList>;
}

/// 基于内置数据集的模拟实现
#[derive(Debug, Clone)]
pub struct SimulatedFetcher {
    dataset: Arc<Dataset>,
}

impl SimulatedFetcher {
    /// 使用指定数据集创建实例
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// 使用内置数据集创建实例
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(Dataset::bundled()?))
    }

    /// 底层数据集
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

#[async_trait]
impl SessionFetcher for SimulatedFetcher {
    async fn fetch_sessions(&self, options: FetchOptions) -> Result<SessionList> {
        tokio::time::sleep(FETCH_DELAY).await;

        if options.should_error {
            return Err(FetchError.into());
        }

        Ok(self.dataset.snapshot())
    }
}

/// 创建会话拉取服务
pub fn create_session_fetcher() -> Result<Box<dyn SessionFetcher>> {
    Ok(Box::new(SimulatedFetcher::bundled()?))
}

/// 使用内置数据集拉取会话列表
pub async fn fetch_sessions(options: FetchOptions) -> Result<SessionList> {
    SimulatedFetcher::bundled()?.fetch_sessions(options).await
}
