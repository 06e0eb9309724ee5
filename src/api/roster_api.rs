// ==========================================
// 学生成绩看板 - 花名册 API
// ==========================================
// 职责: 对展示层提供的唯一入口
//   录入(校验 → 评分 → 追加) / 删除 / 排序 / 统计 / 导入
// 约束: 单线程同步调用; 写操作需要 &mut self
// ==========================================

use std::collections::BTreeSet;
use std::path::Path;
use tracing::instrument;

use crate::api::dashboard_api::DashboardApi;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::import::{ImportReport, RejectedRow};
use crate::domain::student::{sample_submissions, RawSubmission, StudentRecord};
use crate::engine::grade::GradeEngine;
use crate::engine::statistics::PassFailStats;
use crate::engine::validation::{SubmissionValidator, ValidationReport};
use crate::importer::RosterCsvImporter;
use crate::repository::RecordStore;

// ==========================================
// RosterApi - 花名册 API
// ==========================================

/// 花名册API
///
/// 独占持有会话内的 RecordStore,不对外暴露可变引用
pub struct RosterApi {
    store: RecordStore,
    validator: SubmissionValidator,
    grade_engine: GradeEngine,
    importer: RosterCsvImporter,
}

impl RosterApi {
    /// 创建空花名册
    pub fn new() -> Self {
        Self::with_store(RecordStore::new())
    }

    /// 使用已有仓储创建
    pub fn with_store(store: RecordStore) -> Self {
        Self {
            store,
            validator: SubmissionValidator::new(),
            grade_engine: GradeEngine::new(),
            importer: RosterCsvImporter::new(),
        }
    }

    /// 创建并预置演示学生
    pub fn with_sample_data() -> ApiResult<Self> {
        let mut api = Self::new();
        api.seed_sample_data()?;
        Ok(api)
    }

    // ==========================================
    // 录入
    // ==========================================

    /// 只校验,不入库（用于表单逐字段提示）
    pub fn validate(&self, raw: &RawSubmission) -> ValidationReport {
        self.validator.validate(raw)
    }

    /// 录入学生
    ///
    /// # 返回
    /// - Ok(StudentRecord): 新追加的记录
    /// - Err(ApiError::ValidationFailed): 全部字段错误,仓储不变
    pub fn submit(
        &mut self,
        raw_name: &str,
        raw_reg_no: &str,
        raw_cat: &str,
        raw_exam: &str,
    ) -> ApiResult<StudentRecord> {
        self.submit_raw(&RawSubmission::new(raw_name, raw_reg_no, raw_cat, raw_exam))
    }

    /// 录入学生（结构体形式）
    #[instrument(skip(self, raw), fields(store_len = self.store.len()))]
    pub fn submit_raw(&mut self, raw: &RawSubmission) -> ApiResult<StudentRecord> {
        let submission = match self.validator.validate(raw).into_result() {
            Ok(submission) => submission,
            Err(violations) => {
                tracing::warn!(count = violations.len(), "录入被拒绝");
                return Err(ApiError::validation_failed(violations));
            }
        };

        let record = self.grade_engine.build_record(submission);
        self.store.append(record.clone());

        tracing::info!(
            record_id = record.record_id(),
            total = record.total(),
            grade = %record.grade(),
            "学生已录入"
        );
        Ok(record)
    }

    /// 追加演示学生
    ///
    /// # 返回
    /// - Ok(usize): 追加的条数
    pub fn seed_sample_data(&mut self) -> ApiResult<usize> {
        let samples = sample_submissions();
        for raw in &samples {
            self.submit_raw(raw)?;
        }
        tracing::info!(count = samples.len(), "演示学生已预置");
        Ok(samples.len())
    }

    /// 从 CSV 导入
    ///
    /// 每行独立校验: 合法行按文件顺序追加,非法行记入 rejected,不中断导入
    #[instrument(skip(self))]
    pub fn import_csv(&mut self, path: &Path) -> ApiResult<ImportReport> {
        let rows = self.importer.read_rows(path)?;
        let mut report = ImportReport {
            total_rows: rows.len(),
            ..ImportReport::default()
        };

        for row in rows {
            match self.validator.validate(&row.submission).into_result() {
                Ok(submission) => {
                    let record = self.grade_engine.build_record(submission);
                    self.store.append(record.clone());
                    report.imported.push(record);
                }
                Err(errors) => {
                    tracing::warn!(row = row.row_number, count = errors.len(), "导入行被拒绝");
                    report.rejected.push(RejectedRow {
                        row_number: row.row_number,
                        errors,
                    });
                }
            }
        }

        tracing::info!(
            file = %path.display(),
            imported = report.imported_count(),
            rejected = report.rejected_count(),
            "花名册导入完成"
        );
        Ok(report)
    }

    // ==========================================
    // 删除 / 排序
    // ==========================================

    /// 按位置删除
    ///
    /// 越界返回 NotFound,仓储不变
    pub fn delete_at(&mut self, index: usize) -> ApiResult<StudentRecord> {
        let removed = self.store.delete_at(index)?;
        tracing::info!(index, record_id = removed.record_id(), "学生已删除");
        Ok(removed)
    }

    /// 按 record_id 删除
    pub fn delete_by_id(&mut self, record_id: &str) -> ApiResult<StudentRecord> {
        let removed = self.store.delete_by_id(record_id)?;
        tracing::info!(record_id, "学生已删除");
        Ok(removed)
    }

    /// 按总分降序重排仓储（稳定,同分保持原顺序）
    pub fn sort_descending(&mut self) -> ApiResult<()> {
        let sorted = self.dashboard().sorted_by_total();
        self.store.replace_all(sorted)?;
        tracing::info!(count = self.store.len(), "花名册已按总分降序排列");
        Ok(())
    }

    // ==========================================
    // 查询
    // ==========================================

    /// 全部记录快照
    pub fn get_all(&self) -> Vec<StudentRecord> {
        self.store.to_list()
    }

    /// 只读视图
    pub fn records(&self) -> &[StudentRecord] {
        self.store.as_slice()
    }

    pub fn find_by_id(&self, record_id: &str) -> Option<&StudentRecord> {
        self.store.find_by_id(record_id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// 统计视图
    pub fn dashboard(&self) -> DashboardApi<'_> {
        DashboardApi::new(self.store.as_slice())
    }

    pub fn average(&self) -> ApiResult<f64> {
        let average = self.dashboard().class_average()?;
        tracing::debug!(average, "班级平均分");
        Ok(average)
    }

    pub fn top_performer(&self) -> ApiResult<StudentRecord> {
        self.dashboard().top_performer().cloned()
    }

    pub fn pass_fail_stats(&self) -> ApiResult<PassFailStats> {
        self.dashboard().pass_fail_stats()
    }

    pub fn highlight_set(&self) -> BTreeSet<usize> {
        self.dashboard().highlight_set()
    }
}

impl Default for RosterApi {
    fn default() -> Self {
        Self::new()
    }
}
