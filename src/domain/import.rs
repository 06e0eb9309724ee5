// ==========================================
// 学生成绩看板 - 批量导入结果
// ==========================================

use serde::Serialize;

use crate::domain::student::StudentRecord;
use crate::engine::validation::FieldError;

/// 被拒绝的导入行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRow {
    pub row_number: usize,       // 数据行号（从 1 开始,不含表头）
    pub errors: Vec<FieldError>, // 该行全部字段错误
}

/// 导入结果汇总
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportReport {
    pub total_rows: usize,              // 非空数据行数
    pub imported: Vec<StudentRecord>,   // 已追加的记录（文件顺序）
    pub rejected: Vec<RejectedRow>,     // 校验失败的行
}

impl ImportReport {
    pub fn imported_count(&self) -> usize {
        self.imported.len()
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }
}
