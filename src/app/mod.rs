// ==========================================
// 学生成绩看板 - 应用层
// ==========================================
// 职责: 展示层适配,连接控制台/命令与后端 API
// ==========================================

pub mod commands;
pub mod console;
pub mod state;

// 重导出
pub use console::{ConsoleCommand, ConsoleSession};
pub use state::AppState;
