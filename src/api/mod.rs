// ==========================================
// 学生成绩看板 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供展示层（控制台/命令）调用
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod roster_api;

// 重导出核心类型
pub use dashboard_api::{DashboardApi, DashboardSummary};
pub use error::{ApiError, ApiResult};
pub use roster_api::RosterApi;
