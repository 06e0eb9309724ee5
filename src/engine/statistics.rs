// ==========================================
// 学生成绩看板 - 统计查询引擎
// ==========================================
// 职责: 排序、平均分、最高分、及格率、高亮集合
// 红线: 所有查询只读,不修改输入
// ==========================================

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use thiserror::Error;

use crate::domain::student::StudentRecord;

/// 统计查询错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    #[error("No students in the system")]
    EmptyCollection,
}

/// 及格/不及格统计
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PassFailStats {
    pub pass_count: usize,
    pub fail_count: usize,
    pub pass_pct: f64, // 保留 1 位小数
    pub fail_pct: f64, // 100 - pass_pct（取舍后的补数）
}

/// 按 1 位小数四舍五入
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// 按总分降序排序（稳定排序,同分保持原相对顺序）
pub fn sort_by_total_descending(records: &[StudentRecord]) -> Vec<StudentRecord> {
    let mut sorted = records.to_vec();
    // total 均为有限值,partial_cmp 不会返回 None
    sorted.sort_by(|a, b| b.total().partial_cmp(&a.total()).unwrap_or(Ordering::Equal));
    sorted
}

/// 班级平均分
pub fn class_average(records: &[StudentRecord]) -> Result<f64, StatsError> {
    if records.is_empty() {
        return Err(StatsError::EmptyCollection);
    }

    let sum: f64 = records.iter().map(|r| r.total()).sum();
    Ok(sum / records.len() as f64)
}

/// 最高分学生（同分取最靠前的一条）
pub fn top_performer(records: &[StudentRecord]) -> Result<&StudentRecord, StatsError> {
    records
        .iter()
        .fold(None, |best: Option<&StudentRecord>, current| match best {
            Some(b) if b.total() >= current.total() => Some(b),
            _ => Some(current),
        })
        .ok_or(StatsError::EmptyCollection)
}

/// 及格/不及格统计
///
/// 说明: fail_pct 由取舍后的 pass_pct 求补得到,而不是独立计算
/// fail_count / size * 100 后取舍; 两种算法在 .x5 边界上可能相差 0.1
pub fn pass_fail_counts(records: &[StudentRecord]) -> Result<PassFailStats, StatsError> {
    if records.is_empty() {
        return Err(StatsError::EmptyCollection);
    }

    let pass_count = records.iter().filter(|r| r.is_pass()).count();
    let fail_count = records.len() - pass_count;
    let pass_pct = round1(pass_count as f64 / records.len() as f64 * 100.0);
    let fail_pct = round1(100.0 - pass_pct);

    Ok(PassFailStats {
        pass_count,
        fail_count,
        pass_pct,
        fail_pct,
    })
}

/// 高亮集合: 所有总分等于最高分的位置（空集合返回空集）
pub fn highlight_set(records: &[StudentRecord]) -> BTreeSet<usize> {
    let max_total = match top_performer(records) {
        Ok(top) => top.total(),
        Err(_) => return BTreeSet::new(),
    };

    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.total() == max_total)
        .map(|(idx, _)| idx)
        .collect()
}
