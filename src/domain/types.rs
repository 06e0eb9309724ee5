// ==========================================
// 学生成绩看板 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 成绩等级 (Grade)
// ==========================================
// 红线: 等级由总分分段唯一确定,录入后不再变化
// 序列化格式: "A" / "B" / "C" / "D" / "Fail"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,    // [70, 100]
    B,    // [60, 70)
    C,    // [50, 60)
    D,    // [40, 50)
    Fail, // [0, 40)
}

impl Grade {
    /// 所有等级（从高到低）
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::Fail];

    /// 是否及格（Fail 以外均视为及格）
    pub fn is_pass(self) -> bool {
        self != Grade::Fail
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::Fail => "Fail",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 录入字段 (Score Field)
// ==========================================
// 用于定位字段级校验错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreField {
    Name,  // 姓名
    RegNo, // 学号
    Cat,   // 平时测验 (CAT)
    Exam,  // 期末考试
}

impl ScoreField {
    /// 按表单顺序排列
    pub const ALL: [ScoreField; 4] = [
        ScoreField::Name,
        ScoreField::RegNo,
        ScoreField::Cat,
        ScoreField::Exam,
    ];

    /// 面向用户的字段名（用于拼接错误消息）
    pub fn label(&self) -> &'static str {
        match self {
            ScoreField::Name => "Full name",
            ScoreField::RegNo => "Registration number",
            ScoreField::Cat => "CAT marks",
            ScoreField::Exam => "Exam marks",
        }
    }
}

impl fmt::Display for ScoreField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreField::Name => write!(f, "name"),
            ScoreField::RegNo => write!(f, "reg_no"),
            ScoreField::Cat => write!(f, "cat"),
            ScoreField::Exam => write!(f, "exam"),
        }
    }
}
