//! # scale 命令实现
//!
//! 以表格形式打印评分标准。
//!
//! ## 依赖关系
//! - 使用 `models/grade.rs` 的评分区间
//! - 使用 `utils/output.rs`

use crate::error::{GradeCalcError, Result};
use crate::models::{grading_scale, LetterGrade};
use crate::utils::output;

use std::io::{self, Write};
use tabled::{Table, Tabled};

/// 评分标准表格行
#[derive(Debug, Clone, Tabled)]
struct ScaleRow {
    #[tabled(rename = "Grade")]
    grade: LetterGrade,
    #[tabled(rename = "Score range")]
    range: String,
}

/// 执行 scale 命令
pub fn execute() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", output::header("Grading Scale")).map_err(GradeCalcError::WriteOutput)?;
    writeln!(out, "{}", Table::new(&scale_rows())).map_err(GradeCalcError::WriteOutput)?;
    Ok(())
}

fn scale_rows() -> Vec<ScaleRow> {
    grading_scale()
        .into_iter()
        .map(|band| ScaleRow {
            grade: band.grade,
            range: format!("{}–{}", band.min, band.max),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_rows() {
        let rows = scale_rows();
        let ranges: Vec<_> = rows
            .iter()
            .map(|r| (r.grade, r.range.as_str()))
            .collect();
        assert_eq!(
            ranges,
            vec![
                (LetterGrade::A, "90–100"),
                (LetterGrade::B, "80–89"),
                (LetterGrade::C, "70–79"),
                (LetterGrade::D, "60–69"),
                (LetterGrade::F, "0–59"),
            ]
        );
    }

    #[test]
    fn test_scale_table_renders_every_grade() {
        let table = Table::new(&scale_rows()).to_string();
        assert!(table.contains("Grade"));
        assert!(table.contains("Score range"));
        for grade in ["A", "B", "C", "D", "F"] {
            assert!(table.contains(grade));
        }
    }
}
