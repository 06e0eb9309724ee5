// ==========================================
// 学生成绩看板 - 配置层
// ==========================================
// 职责: 会话配置加载,支持 文件 → 环境变量 两级覆写
// 存储: JSON 文件（只读）
// ==========================================

pub mod config_manager;

// 重导出核心配置管理器
pub use config_manager::{
    config_keys, default_config_path, ConfigError, ConfigManager, DashboardConfig, LoggingConfig,
};
