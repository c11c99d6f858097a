//! # 分数模型
//!
//! 将一行用户输入解析并校验为有效分数。
//!
//! `Score` 只能通过校验构造，持有 `Score` 即保证其位于 [0, 100]。
//! 校验失败返回 `ScoreError`，由调用方匹配后决定输出分支。
//!
//! ## 依赖关系
//! - 被 `commands/grade.rs` 使用
//! - 使用 `models/grade.rs` 进行分类

use super::grade::{classify, LetterGrade};
use std::num::IntErrorKind;
use std::str::FromStr;
use thiserror::Error;

/// 有效分数下限（含）
pub const MIN_SCORE: i64 = 0;

/// 有效分数上限（含）
pub const MAX_SCORE: i64 = 100;

/// 分数校验失败原因
///
/// `Display` 即为展示给用户的提示文本。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("Grade must be between 0 and 100.")]
    OutOfRange { input: String },

    #[error("Grade must be a whole number, got '{input}'.")]
    NotANumber { input: String },
}

impl ScoreError {
    /// 被拒绝的原始输入（已去除首尾空白）
    pub fn input(&self) -> &str {
        match self {
            ScoreError::OutOfRange { input } | ScoreError::NotANumber { input } => input,
        }
    }
}

/// 已校验的分数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(i64);

impl Score {
    pub fn new(value: i64) -> Result<Self, ScoreError> {
        if (MIN_SCORE..=MAX_SCORE).contains(&value) {
            Ok(Score(value))
        } else {
            Err(ScoreError::OutOfRange {
                input: value.to_string(),
            })
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn letter_grade(&self) -> LetterGrade {
        classify(self.0)
    }
}

impl FromStr for Score {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        match text.parse::<i64>() {
            Ok(value) => Score::new(value),
            // 超出整数表示范围的数字仍是数字，只是不在有效范围内
            Err(e)
                if matches!(
                    e.kind(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                ) =>
            {
                Err(ScoreError::OutOfRange {
                    input: text.to_string(),
                })
            }
            Err(_) => Err(ScoreError::NotANumber {
                input: text.to_string(),
            }),
        }
    }
}
