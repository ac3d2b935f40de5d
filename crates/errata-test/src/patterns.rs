//! Problems checked against the combined task-pattern detector.

/// A problem and whether any numeric slip pattern explains its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternCase {
    pub multiplier: u64,
    pub multiplicand: u64,
    pub correct: u64,
    pub given: u64,
    pub has_pattern: bool,
}

const fn case(
    multiplier: u64,
    multiplicand: u64,
    correct: u64,
    given: u64,
    has_pattern: bool,
) -> PatternCase {
    PatternCase {
        multiplier,
        multiplicand,
        correct,
        given,
        has_pattern,
    }
}

pub const TASK_PATTERNS: &[PatternCase] = &[
    // ten times too small
    case(9, 30, 270, 27, true),
    // one digit off
    case(5, 80, 400, 100, true),
    case(17, 800, 13_600, 1350, false),
    case(8, 18, 144, 20, false),
    // one addend short, one too many
    case(8, 300, 2400, 2100, true),
    case(8, 300, 2400, 2700, true),
    case(8, 300, 2400, 3200, false),
];
