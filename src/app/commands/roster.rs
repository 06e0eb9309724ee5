use std::path::Path;

use crate::app::state::AppState;

use super::common::{map_api_error, parse_index, to_json};

// ==========================================
// 花名册相关命令
// ==========================================

/// 录入学生
pub fn submit_student(
    state: &mut AppState,
    name: &str,
    reg_no: &str,
    cat: &str,
    exam: &str,
) -> Result<String, String> {
    let record = state
        .roster
        .submit(name, reg_no, cat, exam)
        .map_err(map_api_error)?;

    to_json(&record)
}

/// 查询学生列表（当前顺序）
pub fn list_students(state: &AppState) -> Result<String, String> {
    to_json(&state.roster.records())
}

/// 按位置删除学生
pub fn delete_student(state: &mut AppState, index: &str) -> Result<String, String> {
    let index = parse_index(index)?;

    let removed = state.roster.delete_at(index).map_err(map_api_error)?;

    to_json(&removed)
}

/// 按 record_id 删除学生
pub fn delete_student_by_id(state: &mut AppState, record_id: &str) -> Result<String, String> {
    let removed = state
        .roster
        .delete_by_id(record_id)
        .map_err(map_api_error)?;

    to_json(&removed)
}

/// 按总分降序重排,返回重排后的列表
pub fn sort_students(state: &mut AppState) -> Result<String, String> {
    state.roster.sort_descending().map_err(map_api_error)?;

    to_json(&state.roster.records())
}

/// 导入 CSV 花名册
pub fn import_students(state: &mut AppState, file_path: &str) -> Result<String, String> {
    let report = state
        .roster
        .import_csv(Path::new(file_path.trim()))
        .map_err(map_api_error)?;

    to_json(&report)
}
