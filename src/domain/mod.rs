// ==========================================
// 学生成绩看板 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含存储逻辑,不含引擎逻辑
// ==========================================

pub mod import;
pub mod student;
pub mod types;

// 重导出核心类型
pub use import::{ImportReport, RejectedRow};
pub use student::{
    sample_submissions, RawSubmission, StudentRecord, ValidatedSubmission, CAT_MAX, EXAM_MAX,
    SCORE_MIN,
};
pub use types::{Grade, ScoreField};
