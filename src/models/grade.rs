//! # 字母等级模型
//!
//! 定义五档字母等级 (A/B/C/D/F) 以及分数到等级的映射。
//!
//! ## 依赖关系
//! - 被 `models/score.rs` 和 `commands/` 使用
//! - 无外部模块依赖

use super::score::MIN_SCORE;
use std::fmt;

/// 字母等级，A 最高，F 最低
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 等级区间（闭区间）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeBand {
    pub grade: LetterGrade,
    pub min: i64,
    pub max: i64,
}

impl GradeBand {
    const fn new(grade: LetterGrade, min: i64, max: i64) -> Self {
        GradeBand { grade, min, max }
    }

    pub fn contains(&self, score: i64) -> bool {
        (self.min..=self.max).contains(&score)
    }
}

/// 及格等级的区间，按顺序匹配，首个命中者生效
pub const PASSING_BANDS: [GradeBand; 4] = [
    GradeBand::new(LetterGrade::A, 90, 100),
    GradeBand::new(LetterGrade::B, 80, 89),
    GradeBand::new(LetterGrade::C, 70, 79),
    GradeBand::new(LetterGrade::D, 60, 69),
];

/// 将分数映射为字母等级
///
/// 对所有整数都有定义：不落在任何及格区间内的分数（包括负数和超过 100 的分数）
/// 一律为 F。范围校验由调用方在分类前完成。
pub fn classify(score: i64) -> LetterGrade {
    PASSING_BANDS
        .iter()
        .find(|band| band.contains(score))
        .map(|band| band.grade)
        .unwrap_or(LetterGrade::F)
}

/// 完整的评分标准（含有效分数范围内的 F 区间），A 在前
pub fn grading_scale() -> Vec<GradeBand> {
    let lowest_pass = PASSING_BANDS
        .iter()
        .map(|band| band.min)
        .min()
        .unwrap_or(MIN_SCORE);

    let mut scale = PASSING_BANDS.to_vec();
    scale.push(GradeBand::new(LetterGrade::F, MIN_SCORE, lowest_pass - 1));
    scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_passing_ranges() {
        for s in 90..=100 {
            assert_eq!(classify(s), LetterGrade::A, "score {}", s);
        }
        for s in 80..=89 {
            assert_eq!(classify(s), LetterGrade::B, "score {}", s);
        }
        for s in 70..=79 {
            assert_eq!(classify(s), LetterGrade::C, "score {}", s);
        }
        for s in 60..=69 {
            assert_eq!(classify(s), LetterGrade::D, "score {}", s);
        }
    }

    #[test]
    fn test_classify_failing_and_out_of_range() {
        for s in -200..60 {
            assert_eq!(classify(s), LetterGrade::F, "score {}", s);
        }
        for s in 101..=300 {
            assert_eq!(classify(s), LetterGrade::F, "score {}", s);
        }
        assert_eq!(classify(i64::MIN), LetterGrade::F);
        assert_eq!(classify(i64::MAX), LetterGrade::F);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for s in [-1, 0, 59, 60, 69, 70, 79, 80, 89, 90, 100, 101] {
            assert_eq!(classify(s), classify(s));
        }
    }

    #[test]
    fn test_grading_scale_matches_classifier() {
        let scale = grading_scale();
        assert_eq!(scale.len(), 5);
        assert_eq!(scale[0].grade, LetterGrade::A);
        assert_eq!(scale[4], GradeBand::new(LetterGrade::F, 0, 59));

        // 每个区间的端点都应被分类到该区间的等级
        for band in &scale {
            assert_eq!(classify(band.min), band.grade);
            assert_eq!(classify(band.max), band.grade);
        }
    }

    #[test]
    fn test_grade_display_and_order() {
        assert_eq!(LetterGrade::A.to_string(), "A");
        assert_eq!(LetterGrade::F.to_string(), "F");
        assert!(LetterGrade::A < LetterGrade::B);
        assert!(LetterGrade::D < LetterGrade::F);
    }
}
