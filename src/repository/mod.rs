// ==========================================
// 学生成绩看板 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 会话内记录的有序存储
// 约束: 仅内存,会话结束即销毁,不落盘
// ==========================================

pub mod error;
pub mod record_store;

// 重导出核心仓储
pub use error::{RepositoryError, RepositoryResult};
pub use record_store::RecordStore;
