// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量配置日志级别
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// 初始化日志系统
///
/// # 过滤规则
/// - RUST_LOG 存在时优先使用（例如: RUST_LOG=student_records=debug）
/// - 否则使用配置中的 filter（默认: info）
///
/// # 示例
/// ```no_run
/// use student_records::{config::LoggingConfig, logging};
/// logging::init(&LoggingConfig::default()).unwrap();
/// ```
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // 日志写 stderr,stdout 留给控制台输出
    let result = if config.json {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .try_init()
    };

    result.map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别,便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
