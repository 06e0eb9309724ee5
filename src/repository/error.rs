// ==========================================
// 学生成绩看板 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    // ===== 定位错误 =====
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    // ===== 重排错误 =====
    #[error("Reordered sequence is not a permutation of the stored records: expected={expected}, actual={actual}")]
    NotAPermutation { expected: usize, actual: usize },
}

impl RepositoryError {
    /// 按位置查找失败
    pub fn index_not_found(index: usize, len: usize) -> Self {
        RepositoryError::NotFound {
            entity: "StudentRecord".to_string(),
            id: format!("index={} (len={})", index, len),
        }
    }

    /// 按 record_id 查找失败
    pub fn id_not_found(record_id: &str) -> Self {
        RepositoryError::NotFound {
            entity: "StudentRecord".to_string(),
            id: record_id.to_string(),
        }
    }
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
