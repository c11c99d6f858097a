//! # 统一错误处理模块
//!
//! 定义 gradecalc 的致命错误类型，使用 `thiserror` 派生。
//!
//! 分数校验失败 (`ScoreError`) 属于可恢复情况，不在此列，
//! 见 `models/score.rs`。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `main.rs` 使用
//! - 无外部模块依赖

use thiserror::Error;

/// gradecalc 统一错误类型
#[derive(Error, Debug)]
pub enum GradeCalcError {
    // ─────────────────────────────────────────────────────────────
    // 输入错误
    // ─────────────────────────────────────────────────────────────
    #[error("No input received: standard input was closed before a grade was entered")]
    InputClosed,

    #[error("Failed to read from standard input: {0}")]
    ReadInput(#[source] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write to standard output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, GradeCalcError>;
