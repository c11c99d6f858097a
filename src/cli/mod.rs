//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - （无子命令）: 同 `grade`
//! - `grade`: 从标准输入读取分数并输出字母等级
//! - `scale`: 打印评分标准
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/mod.rs` 使用

use clap::{Parser, Subcommand};

/// gradecalc - 分数转字母等级
#[derive(Parser, Debug)]
#[command(name = "gradecalc")]
#[command(version)]
#[command(about = "Convert a numeric score (0-100) into a letter grade", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 可用的子命令
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Prompt for a score on standard input and print its letter grade (default)
    Grade,

    /// Print the grading scale used to assign letter grades
    Scale,
}
