//! # 终端输出工具
//!
//! 固定的交互文本（提示、结果、告别语）写入任意 `Write`，
//! 便于在测试中捕获；诊断信息使用 `colored` 着色并写到 stderr。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块和 `utils/farewell.rs` 使用
//! - 使用 `colored` crate

use crate::models::LetterGrade;
use colored::Colorize;
use std::io::{self, Write};

pub const PROMPT: &str = "Enter your grade (0–100): ";
pub const SUCCESS_MARKER: &str = "✅";
pub const WARNING_MARKER: &str = "⚠️";
pub const GOODBYE: &str = "🎓 Thank you for using the Grade Calculator. Goodbye!";

/// 输出提示（不换行）并立即刷新
pub fn write_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}", PROMPT)?;
    out.flush()
}

/// 输出等级结果
pub fn write_grade<W: Write>(out: &mut W, grade: LetterGrade) -> io::Result<()> {
    writeln!(out, "{} Your letter grade is: {}", SUCCESS_MARKER, grade)
}

/// 输出可恢复的校验警告
pub fn write_warning<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "{} {}", WARNING_MARKER, msg)
}

/// 输出告别语
pub fn write_goodbye<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", GOODBYE)?;
    out.flush()
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 标题栏文本
pub fn header(title: &str) -> String {
    let line = "─".repeat(40);
    format!("{}\n  {}\n{}", line.dimmed(), title.bold(), line.dimmed())
}
