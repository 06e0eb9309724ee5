// ==========================================
// 学生成绩看板 - 看板统计 API
// ==========================================
// 职责: 基于记录快照的只读统计查询
// 架构: API 层 → 统计引擎 (engine::statistics)
// ==========================================

use serde::Serialize;
use std::collections::BTreeSet;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::student::StudentRecord;
use crate::engine::statistics::{self, PassFailStats};

/// 空集合时各查询的描述（拼接为 "No students to ..."）
pub const QUERY_AVERAGE: &str = "calculate average";
pub const QUERY_TOP_PERFORMER: &str = "highlight";
pub const QUERY_PASS_FAIL: &str = "analyze";

/// 看板汇总（一次渲染所需的全部统计）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub student_count: usize,
    pub class_average: Option<f64>,
    pub top_performer: Option<StudentRecord>,
    pub pass_fail: Option<PassFailStats>,
    pub highlighted: Vec<usize>,
}

// ==========================================
// DashboardApi - 看板统计 API
// ==========================================

/// 看板统计API
///
/// 借用记录快照,生命周期内仓储不可被修改
pub struct DashboardApi<'a> {
    records: &'a [StudentRecord],
}

impl<'a> DashboardApi<'a> {
    pub fn new(records: &'a [StudentRecord]) -> Self {
        Self { records }
    }

    /// 按总分降序的新序列（不修改仓储）
    pub fn sorted_by_total(&self) -> Vec<StudentRecord> {
        statistics::sort_by_total_descending(self.records)
    }

    /// 班级平均分
    pub fn class_average(&self) -> ApiResult<f64> {
        statistics::class_average(self.records)
            .map_err(|_| ApiError::empty_collection(QUERY_AVERAGE))
    }

    /// 最高分学生（同分取最靠前）
    pub fn top_performer(&self) -> ApiResult<&'a StudentRecord> {
        statistics::top_performer(self.records)
            .map_err(|_| ApiError::empty_collection(QUERY_TOP_PERFORMER))
    }

    /// 及格/不及格统计
    pub fn pass_fail_stats(&self) -> ApiResult<PassFailStats> {
        statistics::pass_fail_counts(self.records)
            .map_err(|_| ApiError::empty_collection(QUERY_PASS_FAIL))
    }

    /// 高亮位置（所有并列最高分）
    pub fn highlight_set(&self) -> BTreeSet<usize> {
        statistics::highlight_set(self.records)
    }

    /// 汇总; 空集合时各统计项为 None
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            student_count: self.records.len(),
            class_average: self.class_average().ok(),
            top_performer: self.top_performer().ok().cloned(),
            pass_fail: self.pass_fail_stats().ok(),
            highlighted: self.highlight_set().into_iter().collect(),
        }
    }
}
