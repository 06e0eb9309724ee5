// ==========================================
// 学生成绩看板 - 花名册导入器
// ==========================================
// 流程: 文件解析 → 字段映射 → 原始录入列表（文件顺序）
// ==========================================

use std::path::Path;

use crate::domain::student::RawSubmission;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::CsvParser;

/// 带行号的原始录入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub row_number: usize,
    pub submission: RawSubmission,
}

pub struct RosterCsvImporter {
    parser: CsvParser,
}

impl RosterCsvImporter {
    pub fn new() -> Self {
        Self { parser: CsvParser }
    }

    /// 读取花名册文件
    pub fn read_rows(&self, file_path: &Path) -> ImportResult<Vec<RosterRow>> {
        let (headers, rows) = self.parser.parse(file_path)?;
        let mapper = FieldMapper::from_headers(&headers)?;

        Ok(rows
            .into_iter()
            .map(|row| RosterRow {
                row_number: row.row_number,
                submission: mapper.map_row(&row.cells),
            })
            .collect())
    }
}

impl Default for RosterCsvImporter {
    fn default() -> Self {
        Self::new()
    }
}
