// ==========================================
// 学生成绩看板 - 文件解析器
// ==========================================
// 支持: CSV (.csv)
// 输出: 每行一个 表头 → 单元格 映射,保留数据行号
// ==========================================

use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use crate::importer::error::{ImportError, ImportResult};

/// 解析后的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    pub row_number: usize, // 数据行号（从 1 开始,不含表头）
    pub cells: HashMap<String, String>,
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// 解析 CSV 文件
    ///
    /// 表头统一为小写并去空白; 完全空白的行跳过（行号仍计入）
    pub fn parse(&self, file_path: &Path) -> ImportResult<(Vec<String>, Vec<ParsedRow>)> {
        // 检查文件存在
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        // 检查扩展名
        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(normalize_header)
            .collect();

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;

            let cells: HashMap<String, String> = headers
                .iter()
                .enumerate()
                .map(|(col_idx, header)| {
                    let value = record.get(col_idx).unwrap_or("").to_string();
                    (header.clone(), value)
                })
                .collect();

            // 跳过完全空白的行
            if cells.values().all(|v| v.trim().is_empty()) {
                continue;
            }

            rows.push(ParsedRow {
                row_number: row_idx + 1,
                cells,
            });
        }

        tracing::debug!(
            file = %file_path.display(),
            rows = rows.len(),
            "CSV 解析完成"
        );

        Ok((headers, rows))
    }
}

/// 表头归一化: 去空白、小写、空格/连字符转下划线
pub(crate) fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_start_matches('\u{feff}')
        .to_lowercase()
        .replace(|c: char| c == ' ' || c == '-', "_")
}
