// ==========================================
// 学生成绩看板 - 导入层
// ==========================================
// 职责: 从 CSV 批量读取学生录入,交由 API 层逐行校验入库
// 约束: 只读文件,不回写
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod roster_importer;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ParsedRow};
pub use roster_importer::{RosterCsvImporter, RosterRow};
