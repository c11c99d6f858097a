//! # grade 命令实现
//!
//! 交互式评分：提示 → 读取一行 → 解析校验 → 分类 → 输出结果。
//!
//! ## 功能
//! - 只读取一行输入，不重试
//! - 范围错误和非数字输入均为可恢复情况，输出警告后正常结束
//! - 告别语由 `Farewell` 守卫保证在所有退出路径上输出
//!
//! ## 依赖关系
//! - 使用 `models/` 中的 `Score` 和 `LetterGrade`
//! - 使用 `utils/output.rs`, `utils/farewell.rs`

use crate::error::{GradeCalcError, Result};
use crate::models::{LetterGrade, Score, ScoreError};
use crate::utils::farewell::Farewell;
use crate::utils::output;

use std::io::{self, BufRead, Write};
use tracing::debug;

/// 一次会话的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Graded(LetterGrade),
    Rejected(ScoreError),
}

/// 执行 grade 命令
pub fn execute() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute_with(stdin.lock(), stdout.lock())
}

/// 在给定的输入输出流上执行 grade 命令，只保留致命错误
pub fn execute_with<R: BufRead, W: Write>(input: R, out: W) -> Result<()> {
    run_session(input, out).map(|_| ())
}

/// 在给定的输入输出流上运行一次评分会话
pub fn run_session<R: BufRead, W: Write>(mut input: R, out: W) -> Result<Outcome> {
    let mut out = Farewell::new(out);

    output::write_prompt(&mut out).map_err(GradeCalcError::WriteOutput)?;
    let line = read_line(&mut input)?;
    debug!(input = line.trim(), "received score input");

    let outcome = match line.parse::<Score>() {
        Ok(score) => {
            let grade = score.letter_grade();
            debug!(score = score.value(), %grade, "classified score");
            output::write_grade(&mut out, grade).map_err(GradeCalcError::WriteOutput)?;
            Outcome::Graded(grade)
        }
        Err(err) => {
            debug!(error = %err, input = err.input(), "rejected score input");
            output::write_warning(&mut out, &err.to_string())
                .map_err(GradeCalcError::WriteOutput)?;
            Outcome::Rejected(err)
        }
    };

    Ok(outcome)
}

/// 读取一行；输入流已关闭时视为致命错误
///
/// 按字节读取，非法 UTF-8 以替换字符保留，交由解析阶段作为非数字输入拒绝。
fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut raw = Vec::new();
    let n = input
        .read_until(b'\n', &mut raw)
        .map_err(GradeCalcError::ReadInput)?;
    if n == 0 {
        return Err(GradeCalcError::InputClosed);
    }
    Ok(String::from_utf8_lossy(&raw).into_owned())
}
