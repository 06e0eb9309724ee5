use crate::app::state::AppState;

use super::common::{map_api_error, to_json};

// ==========================================
// 看板统计相关命令
// ==========================================

/// 班级平均分
pub fn get_class_average(state: &AppState) -> Result<String, String> {
    let average = state.roster.average().map_err(map_api_error)?;

    to_json(&serde_json::json!({
        "average": average,
        "student_count": state.roster.len(),
    }))
}

/// 最高分学生
pub fn get_top_performer(state: &AppState) -> Result<String, String> {
    let top = state.roster.top_performer().map_err(map_api_error)?;

    to_json(&top)
}

/// 及格/不及格统计
pub fn get_pass_fail_stats(state: &AppState) -> Result<String, String> {
    let stats = state.roster.pass_fail_stats().map_err(map_api_error)?;

    to_json(&stats)
}

/// 高亮位置
pub fn get_highlight_set(state: &AppState) -> Result<String, String> {
    to_json(&state.roster.highlight_set())
}

/// 看板汇总
pub fn get_dashboard_summary(state: &AppState) -> Result<String, String> {
    to_json(&state.roster.dashboard().summary())
}
