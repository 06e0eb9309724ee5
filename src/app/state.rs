// ==========================================
// 学生成绩看板 - 应用状态
// ==========================================
// 职责: 持有会话配置与花名册 API
// 生命周期: 进程启动创建,退出即销毁（不持久化）
// ==========================================

use crate::api::{ApiResult, RosterApi};
use crate::config::DashboardConfig;

/// 应用状态
///
/// 单线程独占,写操作通过 &mut AppState 进行
pub struct AppState {
    /// 会话配置
    pub config: DashboardConfig,

    /// 花名册API
    pub roster: RosterApi,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 按配置预置演示学生
    /// 2. 按配置导入 CSV 花名册（非法行跳过并记录警告）
    pub fn new(config: DashboardConfig) -> ApiResult<Self> {
        tracing::info!(
            seed_sample_data = config.seed_sample_data,
            import_path = ?config.import_path,
            "初始化AppState"
        );

        let mut roster = RosterApi::new();

        if config.seed_sample_data {
            roster.seed_sample_data()?;
        }

        if let Some(path) = &config.import_path {
            let report = roster.import_csv(path)?;
            if report.rejected_count() > 0 {
                tracing::warn!(
                    rejected = report.rejected_count(),
                    "启动导入存在被拒绝的行"
                );
            }
        }

        tracing::info!(students = roster.len(), "AppState初始化成功");
        Ok(Self { config, roster })
    }

    /// 分数显示小数位
    pub fn precision(&self) -> usize {
        self.config.display_precision
    }
}
