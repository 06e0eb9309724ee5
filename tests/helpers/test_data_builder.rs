// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use student_records::domain::student::{RawSubmission, StudentRecord};
use student_records::engine::{GradeEngine, SubmissionValidator};

// ==========================================
// StudentRecord 构建器
// ==========================================

pub struct StudentBuilder {
    name: String,
    reg_no: String,
    cat: String,
    exam: String,
}

impl StudentBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            reg_no: format!("REG-{}", name.replace(' ', "-").to_uppercase()),
            cat: "15".to_string(),
            exam: "35".to_string(),
        }
    }

    pub fn reg_no(mut self, reg_no: &str) -> Self {
        self.reg_no = reg_no.to_string();
        self
    }

    pub fn cat(mut self, cat: f64) -> Self {
        self.cat = cat.to_string();
        self
    }

    pub fn exam(mut self, exam: f64) -> Self {
        self.exam = exam.to_string();
        self
    }

    /// 按总分拆分为 CAT/Exam（CAT 优先填满 30）
    pub fn total(self, total: f64) -> Self {
        let cat = total.min(30.0);
        self.cat(cat).exam(total - cat)
    }

    pub fn raw(&self) -> RawSubmission {
        RawSubmission::new(
            self.name.as_str(),
            self.reg_no.as_str(),
            self.cat.as_str(),
            self.exam.as_str(),
        )
    }

    /// 经过校验与评分的完整记录
    pub fn build(self) -> StudentRecord {
        let submission = SubmissionValidator::new()
            .validate(&self.raw())
            .into_result()
            .expect("构建器数据必须合法");
        GradeEngine::new().build_record(submission)
    }
}

/// 按总分批量构建记录（名字为 S0, S1, ...）
pub fn records_with_totals(totals: &[f64]) -> Vec<StudentRecord> {
    totals
        .iter()
        .enumerate()
        .map(|(i, total)| StudentBuilder::new(&format!("S{}", i)).total(*total).build())
        .collect()
}
