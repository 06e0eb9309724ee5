// ==========================================
// 学生成绩看板 - 核心库
// ==========================================
// 职责: 成绩录入校验、等级判定、会话内记录存储与班级统计
// 系统定位: 单会话内存看板（不持久化）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 会话内记录存储
pub mod repository;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - CSV 花名册
pub mod importer;

// 配置层 - 会话配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 控制台与命令
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Grade, ScoreField};

// 领域实体
pub use domain::{ImportReport, RawSubmission, RejectedRow, StudentRecord, ValidatedSubmission};

// 引擎
pub use engine::{
    derive_grade, FieldError, FieldErrorKind, GradeEngine, PassFailStats, SubmissionValidator,
    ValidationReport,
};

// 仓储
pub use repository::{RecordStore, RepositoryError};

// API
pub use api::{ApiError, ApiResult, DashboardApi, DashboardSummary, RosterApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Student Records Dashboard";
