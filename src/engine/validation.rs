// ==========================================
// 学生成绩看板 - 录入校验器
// ==========================================
// 职责: 姓名/学号/CAT/期末分数的字段级校验
// 红线: 四个字段独立校验,不跨字段短路,一次返回全部错误
// ==========================================

use serde::Serialize;
use thiserror::Error;

use crate::domain::student::{RawSubmission, ValidatedSubmission, CAT_MAX, EXAM_MAX, SCORE_MIN};
use crate::domain::types::ScoreField;

// ==========================================
// FieldErrorKind / FieldError - 字段级错误
// ==========================================

/// 字段错误类型
#[derive(Error, Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldErrorKind {
    #[error("is required")]
    RequiredField,

    #[error("must be a number")]
    NotANumber,

    #[error("must be between {min} and {max}")]
    OutOfRange { min: f64, max: f64 },
}

/// 字段错误（带面向用户的消息）
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{message}")]
pub struct FieldError {
    pub field: ScoreField,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: ScoreField, kind: FieldErrorKind) -> Self {
        Self {
            field,
            kind,
            message: format!("{} {}", field.label(), kind),
        }
    }
}

// ==========================================
// 单字段校验规则
// ==========================================

/// 去除首尾空白（含 U+FEFF）
fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// 取最长的前导十进制数字面量并解析
///
/// 语法: [+-] ( "Infinity" | 数字 [. 数字] [(e|E) [+-] 数字] )
/// 尾部多余文本忽略（"25abc" → 25, "20.5.1" → 20.5, "7e" → 7）;
/// 没有任何数字时返回 None
fn parse_leading_float(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let int_digits = digits(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // 指数部分必须带至少一位数字,否则不计入
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

/// 校验必填文本,通过时返回去空白后的值
fn validate_required(field: ScoreField, raw: &str) -> Result<String, FieldError> {
    let trimmed = trim_input(raw);
    if trimmed.is_empty() {
        return Err(FieldError::new(field, FieldErrorKind::RequiredField));
    }
    Ok(trimmed.to_string())
}

/// 校验分数: 前导数字可解析为浮点数且落在 [SCORE_MIN, max]
///
/// 边界处理:
/// - 空串/无前导数字/NaN → NotANumber
/// - Infinity/-Infinity 及溢出 → OutOfRange
/// - -0 归一化为 0
fn validate_score(field: ScoreField, raw: &str, max: f64) -> Result<f64, FieldError> {
    let value = match parse_leading_float(trim_input(raw)) {
        Some(v) if !v.is_nan() => v,
        _ => return Err(FieldError::new(field, FieldErrorKind::NotANumber)),
    };

    if value < SCORE_MIN || value > max {
        return Err(FieldError::new(
            field,
            FieldErrorKind::OutOfRange {
                min: SCORE_MIN,
                max,
            },
        ));
    }

    Ok(value + 0.0)
}

pub fn validate_name(raw: &str) -> Result<String, FieldError> {
    validate_required(ScoreField::Name, raw)
}

pub fn validate_reg_no(raw: &str) -> Result<String, FieldError> {
    validate_required(ScoreField::RegNo, raw)
}

pub fn validate_cat_score(raw: &str) -> Result<f64, FieldError> {
    validate_score(ScoreField::Cat, raw, CAT_MAX)
}

pub fn validate_exam_score(raw: &str) -> Result<f64, FieldError> {
    validate_score(ScoreField::Exam, raw, EXAM_MAX)
}

// ==========================================
// ValidationReport - 整单校验结果
// ==========================================

/// 四个字段各自的校验结果
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub name: Result<String, FieldError>,
    pub reg_no: Result<String, FieldError>,
    pub cat: Result<f64, FieldError>,
    pub exam: Result<f64, FieldError>,
}

impl ValidationReport {
    /// 全部字段通过
    pub fn is_valid(&self) -> bool {
        self.name.is_ok() && self.reg_no.is_ok() && self.cat.is_ok() && self.exam.is_ok()
    }

    /// 指定字段是否通过
    pub fn is_field_valid(&self, field: ScoreField) -> bool {
        self.error_for(field).is_none()
    }

    /// 指定字段的错误
    pub fn error_for(&self, field: ScoreField) -> Option<&FieldError> {
        match field {
            ScoreField::Name => self.name.as_ref().err(),
            ScoreField::RegNo => self.reg_no.as_ref().err(),
            ScoreField::Cat => self.cat.as_ref().err(),
            ScoreField::Exam => self.exam.as_ref().err(),
        }
    }

    /// 全部错误（按表单字段顺序）
    pub fn errors(&self) -> Vec<FieldError> {
        ScoreField::ALL
            .iter()
            .filter_map(|field| self.error_for(*field).cloned())
            .collect()
    }

    /// 转换为校验通过的录入,或全部字段错误
    pub fn into_result(self) -> Result<ValidatedSubmission, Vec<FieldError>> {
        match (self.name, self.reg_no, self.cat, self.exam) {
            (Ok(name), Ok(reg_no), Ok(cat), Ok(exam)) => {
                Ok(ValidatedSubmission::new(name, reg_no, cat, exam))
            }
            (name, reg_no, cat, exam) => Err([
                name.err(),
                reg_no.err(),
                cat.err(),
                exam.err(),
            ]
            .into_iter()
            .flatten()
            .collect()),
        }
    }
}

// ==========================================
// SubmissionValidator - 录入校验器
// ==========================================
pub struct SubmissionValidator;

impl SubmissionValidator {
    pub fn new() -> Self {
        Self
    }

    /// 校验整单录入（四个字段全部执行）
    pub fn validate(&self, raw: &RawSubmission) -> ValidationReport {
        let report = ValidationReport {
            name: validate_name(&raw.name),
            reg_no: validate_reg_no(&raw.reg_no),
            cat: validate_cat_score(&raw.cat),
            exam: validate_exam_score(&raw.exam),
        };

        if !report.is_valid() {
            tracing::debug!(errors = ?report.errors(), "录入校验未通过");
        }

        report
    }
}

impl Default for SubmissionValidator {
    fn default() -> Self {
        Self::new()
    }
}
