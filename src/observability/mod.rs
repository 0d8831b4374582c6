//! 可观测性模块
//!
//! 提供结构化日志初始化。

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// 构建日志过滤器
///
/// 优先使用 `RUST_LOG`，未设置时回退到配置中的级别。
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    resolve_filter(directives.as_deref(), config)
}

fn resolve_filter(directives: Option<&str>, config: &LoggingConfig) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(&config.level))
}

/// 初始化全局日志订阅者
///
/// 重复调用不会报错，已初始化时返回 false。
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let builder = tracing_subscriber::fmt().with_env_filter(build_filter(config));

    let result = if config.structured {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.is_ok()
}
