// ==========================================
// 学生成绩看板 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,转换下层错误为用户可读的消息
// 约束: 所有错误均可恢复,以结构化结果返回,不 panic
// ==========================================

use thiserror::Error;

use crate::config::ConfigError;
use crate::engine::validation::FieldError;
use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    /// 录入校验失败（带全部字段错误）
    #[error("{reason}")]
    ValidationFailed {
        reason: String,
        violations: Vec<FieldError>,
    },

    /// 空集合上的统计查询
    #[error("No students to {query}")]
    EmptyCollection { query: String },

    #[error("Student not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ==========================================
    // 外部资源错误
    // ==========================================
    #[error("Import failed: {0}")]
    ImportError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("Internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 由字段错误列表构造校验失败
    pub fn validation_failed(violations: Vec<FieldError>) -> Self {
        ApiError::ValidationFailed {
            reason: format!("{} field(s) failed validation", violations.len()),
            violations,
        }
    }

    /// 空集合错误（query 描述被拒绝的查询）
    pub fn empty_collection(query: &str) -> Self {
        ApiError::EmptyCollection {
            query: query.to_string(),
        }
    }
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { id, .. } => ApiError::NotFound(id),
            other @ RepositoryError::NotAPermutation { .. } => {
                ApiError::InternalError(other.to_string())
            }
        }
    }
}

// ==========================================
// 从 ImportError 转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportError(err.to_string())
    }
}

// ==========================================
// 从 ConfigError 转换
// ==========================================
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
