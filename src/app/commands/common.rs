use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;

// ==========================================
// 公共工具：错误映射、序列化
// ==========================================

/// 错误响应（返回给展示层）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,

    /// 详细信息（可选）
    pub details: Option<serde_json::Value>,
}

/// 将ApiError转换为JSON字符串
pub(super) fn map_api_error(err: ApiError) -> String {
    let error_response = ErrorResponse {
        code: match &err {
            ApiError::ValidationFailed { .. } => "VALIDATION_FAILED",
            ApiError::EmptyCollection { .. } => "EMPTY_COLLECTION",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::ImportError(_) => "IMPORT_ERROR",
            ApiError::ConfigError(_) => "CONFIG_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
            ApiError::Other(_) => "OTHER_ERROR",
        }
        .to_string(),
        message: err.to_string(),
        details: match &err {
            ApiError::ValidationFailed { violations, .. } => {
                Some(serde_json::json!({ "violations": violations }))
            }
            _ => None,
        },
    };

    serde_json::to_string(&error_response).unwrap_or_else(|_| err.to_string())
}

/// 序列化成功结果
pub(super) fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization failed: {}", e))
}

/// 解析位置参数
pub(super) fn parse_index(raw: &str) -> Result<usize, String> {
    raw.trim().parse::<usize>().map_err(|_| {
        map_api_error(ApiError::InvalidInput(format!(
            "index must be a non-negative integer, got '{}'",
            raw
        )))
    })
}
