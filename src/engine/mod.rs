// ==========================================
// 学生成绩看板 - 引擎层
// ==========================================
// 职责: 字段校验、等级判定、统计查询
// 红线: 引擎无状态,所有规则必须输出 reason
// ==========================================

pub mod grade;
pub mod statistics;
pub mod validation;

// 重导出核心引擎
pub use grade::{derive_grade, score_submission, GradeEngine};
pub use statistics::{
    class_average, highlight_set, pass_fail_counts, sort_by_total_descending, top_performer,
    PassFailStats, StatsError,
};
pub use validation::{FieldError, FieldErrorKind, SubmissionValidator, ValidationReport};
