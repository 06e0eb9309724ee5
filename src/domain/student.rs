// ==========================================
// 学生成绩看板 - 学生记录领域模型
// ==========================================
// 红线: total/grade 在创建时一次性派生,之后只读
// 红线: 记录只允许删除和重排,不允许修改分数
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::Grade;

/// 分数下限（CAT 与期末考试相同）
pub const SCORE_MIN: f64 = 0.0;
/// CAT 满分
pub const CAT_MAX: f64 = 30.0;
/// 期末考试满分
pub const EXAM_MAX: f64 = 70.0;

// ==========================================
// RawSubmission - 原始录入
// ==========================================
// 表单提交的原始文本,可能为空/含空白/非数字
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSubmission {
    pub name: String,
    pub reg_no: String,
    pub cat: String,
    pub exam: String,
}

impl RawSubmission {
    pub fn new(
        name: impl Into<String>,
        reg_no: impl Into<String>,
        cat: impl Into<String>,
        exam: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            reg_no: reg_no.into(),
            cat: cat.into(),
            exam: exam.into(),
        }
    }
}

// ==========================================
// ValidatedSubmission - 校验通过的录入
// ==========================================
// 只能由校验器构造: 姓名/学号已去空白,分数已在合法区间内
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSubmission {
    name: String,
    reg_no: String,
    cat_score: f64,
    exam_score: f64,
}

impl ValidatedSubmission {
    pub(crate) fn new(name: String, reg_no: String, cat_score: f64, exam_score: f64) -> Self {
        Self {
            name,
            reg_no,
            cat_score,
            exam_score,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reg_no(&self) -> &str {
        &self.reg_no
    }

    pub fn cat_score(&self) -> f64 {
        self.cat_score
    }

    pub fn exam_score(&self) -> f64 {
        self.exam_score
    }

    pub(crate) fn into_parts(self) -> (String, String, f64, f64) {
        (self.name, self.reg_no, self.cat_score, self.exam_score)
    }
}

// ==========================================
// StudentRecord - 学生成绩记录
// ==========================================
// 字段私有: 外部只能读取,无法篡改派生值
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    // ===== 主键 =====
    record_id: String, // 稳定标识 (UUID v4),删除时可按 ID 定位

    // ===== 录入信息 =====
    name: String,   // 姓名 (已去空白)
    reg_no: String, // 学号 (已去空白,不强制唯一)

    // ===== 分数 =====
    cat_score: f64,  // [0, 30]
    exam_score: f64, // [0, 70]

    // ===== 派生字段 =====
    total: f64,   // cat_score + exam_score
    grade: Grade, // 由 total 分段派生

    // ===== 审计 =====
    created_at: NaiveDateTime,
}

impl StudentRecord {
    /// 仅供评分引擎调用,保证 total/grade 与分数一致
    pub(crate) fn new_scored(
        record_id: String,
        submission: ValidatedSubmission,
        total: f64,
        grade: Grade,
        created_at: NaiveDateTime,
    ) -> Self {
        let (name, reg_no, cat_score, exam_score) = submission.into_parts();
        Self {
            record_id,
            name,
            reg_no,
            cat_score,
            exam_score,
            total,
            grade,
            created_at,
        }
    }

    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reg_no(&self) -> &str {
        &self.reg_no
    }

    pub fn cat_score(&self) -> f64 {
        self.cat_score
    }

    pub fn exam_score(&self) -> f64 {
        self.exam_score
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn is_pass(&self) -> bool {
        self.grade.is_pass()
    }
}

// ==========================================
// 演示数据
// ==========================================

/// 会话启动时的演示学生（与看板首屏示例一致）
pub fn sample_submissions() -> Vec<RawSubmission> {
    vec![
        RawSubmission::new("John Doe", "BIT-001-2025", "25", "60"),
        RawSubmission::new("Jane Smith", "BIT-002-2025", "18", "45"),
        RawSubmission::new("Bob Johnson", "BIT-003-2025", "12", "30"),
    ]
}
