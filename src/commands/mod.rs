//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `models/`, `utils/`
//! - 子模块: grade, scale

pub mod grade;
pub mod scale;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令；未指定子命令时进入交互评分
pub fn run(cmd: Option<Commands>) -> Result<()> {
    match cmd.unwrap_or(Commands::Grade) {
        Commands::Grade => grade::execute(),
        Commands::Scale => scale::execute(),
    }
}
