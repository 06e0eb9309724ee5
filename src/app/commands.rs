// ==========================================
// 学生成绩看板 - 展示层命令（按域拆分）
// ==========================================
// 职责: 命令定义,入参为原始文本,出参为 JSON 字符串
// 错误: 统一为 ErrorResponse JSON
// ==========================================

mod common;
mod dashboard;
mod roster;

pub use common::ErrorResponse;
pub use dashboard::*;
pub use roster::*;
