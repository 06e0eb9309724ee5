// ==========================================
// 学生成绩看板 - 字段映射器
// ==========================================
// 职责: 源表头 → 录入字段映射（支持别名）
// 说明: 只做映射,不做校验; 校验统一走录入校验器
// ==========================================

use std::collections::HashMap;

use crate::domain::student::RawSubmission;
use crate::domain::types::ScoreField;
use crate::importer::error::{ImportError, ImportResult};

/// 各字段可接受的表头（已归一化）
fn aliases(field: ScoreField) -> &'static [&'static str] {
    match field {
        ScoreField::Name => &["name", "full_name", "fullname", "student_name"],
        ScoreField::RegNo => &["reg_no", "regno", "registration_number", "reg_number"],
        ScoreField::Cat => &["cat", "cat_marks", "cat_score"],
        ScoreField::Exam => &["exam", "exam_marks", "exam_score"],
    }
}

pub struct FieldMapper {
    columns: HashMap<ScoreField, String>,
}

impl FieldMapper {
    /// 根据表头建立映射,缺列时报错
    pub fn from_headers(headers: &[String]) -> ImportResult<Self> {
        let mut columns = HashMap::new();

        for field in ScoreField::ALL {
            let column = aliases(field)
                .iter()
                .find(|alias| headers.iter().any(|h| h == *alias))
                .ok_or_else(|| ImportError::MissingColumn(field.to_string()))?;
            columns.insert(field, (*column).to_string());
        }

        Ok(Self { columns })
    }

    /// 行映射为原始录入（缺失单元格视为空串）
    pub fn map_row(&self, cells: &HashMap<String, String>) -> RawSubmission {
        let get = |field: ScoreField| -> String {
            self.columns
                .get(&field)
                .and_then(|column| cells.get(column))
                .cloned()
                .unwrap_or_default()
        };

        RawSubmission {
            name: get(ScoreField::Name),
            reg_no: get(ScoreField::RegNo),
            cat: get(ScoreField::Cat),
            exam: get(ScoreField::Exam),
        }
    }
}
