//! # 数据模型模块
//!
//! 定义分数和字母等级数据模型。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 子模块: score, grade

pub mod grade;
pub mod score;

pub use grade::{grading_scale, LetterGrade};
pub use score::{Score, ScoreError};
