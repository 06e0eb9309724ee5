// ==========================================
// 学生成绩看板 - 等级判定引擎
// ==========================================
// 职责: 由两项分数派生总分与等级
// 输入: 校验通过的录入
// 输出: StudentRecord (total/grade 一次性写入)
// ==========================================

use chrono::Local;
use uuid::Uuid;

use crate::domain::student::{StudentRecord, ValidatedSubmission};
use crate::domain::types::Grade;

/// 由总分判定等级
///
/// 分段（从高到低依次判断,命中即返回）:
/// - [70, 100] → A
/// - [60, 70)  → B
/// - [50, 60)  → C
/// - [40, 50)  → D
/// - 其他      → Fail
///
/// 调用方保证 total 已在 [0, 100] 内
pub fn derive_grade(total: f64) -> Grade {
    match total {
        t if (70.0..=100.0).contains(&t) => Grade::A,
        t if (60.0..70.0).contains(&t) => Grade::B,
        t if (50.0..60.0).contains(&t) => Grade::C,
        t if (40.0..50.0).contains(&t) => Grade::D,
        _ => Grade::Fail,
    }
}

/// 总分 = CAT + Exam,等级由总分派生
pub fn score_submission(cat_score: f64, exam_score: f64) -> (f64, Grade) {
    let total = cat_score + exam_score;
    (total, derive_grade(total))
}

// ==========================================
// GradeEngine - 评分引擎
// ==========================================
pub struct GradeEngine {
    // 无状态引擎
}

impl GradeEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 计算总分与等级
    pub fn score(&self, cat_score: f64, exam_score: f64) -> (f64, Grade) {
        score_submission(cat_score, exam_score)
    }

    /// 生成学生记录
    ///
    /// 分配新的 record_id 与创建时间; total/grade 在此处一次性派生
    pub fn build_record(&self, submission: ValidatedSubmission) -> StudentRecord {
        let (total, grade) = self.score(submission.cat_score(), submission.exam_score());
        let record = StudentRecord::new_scored(
            Uuid::new_v4().to_string(),
            submission,
            total,
            grade,
            Local::now().naive_local(),
        );

        tracing::debug!(
            record_id = record.record_id(),
            total = record.total(),
            grade = %record.grade(),
            "学生记录已评分"
        );

        record
    }
}

impl Default for GradeEngine {
    fn default() -> Self {
        Self::new()
    }
}
