//! 内置会话数据集
//!
//! 数据集随二进制一同打包，首次访问时解析，之后在进程生命周期内只读共享。
//! 数据结构对本模块不透明，只做整体复制，不做字段校验。

use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::Arc;

use crate::error::{AppError, Result};

const BUNDLED_SESSIONS: &str = include_str!("sessions.json");

static BUNDLED: Lazy<std::result::Result<Arc<Dataset>, String>> = Lazy::new(|| {
    Dataset::from_json(BUNDLED_SESSIONS)
        .map(Arc::new)
        .map_err(|e| e.to_string())
});

/// 只读数据集
#[derive(Debug, PartialEq)]
pub struct Dataset {
    root: Value,
}

impl Dataset {
    /// 从 JSON 文本构建数据集
    pub fn from_json(json: &str) -> Result<Self> {
        let root = serde_json::from_str(json)?;
        Ok(Self { root })
    }

    /// 获取内置数据集
    pub fn bundled() -> Result<Arc<Dataset>> {
        BUNDLED
            .as_ref()
            .map(Arc::clone)
            .map_err(|e| AppError::Serialization(e.clone()))
    }

    /// 数据集根节点的只读视图
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// 生成一份独立的深拷贝
    pub fn snapshot(&self) -> Value {
        self.root.clone()
    }
}

impl From<Value> for Dataset {
    fn from(root: Value) -> Self {
        Self { root }
    }
}
