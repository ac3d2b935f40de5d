//! Problems with the label every taxonomy is expected to give them.
//!
//! Labels are kept as their snake_case names so that this crate stays free of
//! engine types; compare them against `ErrorLabel::as_str`.

/// A raw problem and its expected label per taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelledCase {
    /// `(multiplier, multiplicand, correct, given)`, given `-1` for no answer.
    pub raw: (i64, i64, i64, i64),
    pub full: &'static str,
    pub robot2: &'static str,
    pub error3: &'static str,
    pub error4: &'static str,
    pub task5: &'static str,
    pub task8: &'static str,
}

impl LabelledCase {
    pub fn problem(&self) -> errata_core::Problem {
        let (multiplier, multiplicand, correct, given) = self.raw;
        crate::problem(multiplier, multiplicand, correct, given)
    }
}

const fn case(raw: (i64, i64, i64, i64), labels: [&'static str; 6]) -> LabelledCase {
    LabelledCase {
        raw,
        full: labels[0],
        robot2: labels[1],
        error3: labels[2],
        error4: labels[3],
        task5: labels[4],
        task8: labels[5],
    }
}

#[rustfmt::skip]
pub const LABELLED: &[LabelledCase] = &[
    case((9, 30, 270, 27),       ["task_missing_zeros", "child_task", "task",  "task",              "zero",             "missing_zero"]),
    case((5, 80, 400, 100),      ["robot_soon",         "robot",      "robot", "robot",             "one_digit",        "one_digit"]),
    case((17, 800, 13600, 1350), ["other_error",        "child_task", "task",  "no_classification", "no_class",         "no_class"]),
    case((8, 18, 144, 20),       ["other_error",        "child_task", "task",  "no_classification", "no_class",         "no_class"]),
    case((8, 300, 2400, 2100),   ["other_error",        "child_task", "task",  "task",              "addition",         "missing_addition"]),
    case((8, 300, 2400, 2700),   ["other_error",        "child_task", "task",  "task",              "addition",         "added_addition"]),
    case((8, 300, 2400, -1),     ["child_no_answer",    "child_task", "child", "child",             "child_competence", "child_competence"]),
    case((6, 7, 42, 42),         ["no_error",           "robot",      "robot", "robot",             "number_twist",     "number_twist"]),
    case((3, 80, 240, 2400),     ["task_extra_zeros",   "child_task", "task",  "task",              "zero",             "added_zero"]),
    case((7, 60, 420, 240),      ["robot_correction",   "child_task", "task",  "task",              "number_twist",     "number_twist"]),
    case((7, 600, 4200, 200),    ["robot_soon",         "robot",      "robot", "robot",             "no_class",         "no_class"]),
    case((7, 600, 4200, 42),     ["robot_late",         "robot",      "robot", "robot",             "zero",             "missing_zero"]),
    case((8, 40, 320, 300),      ["robot_late",         "robot",      "robot", "robot",             "one_digit",        "one_digit"]),
    case((4, 300, 1200, 12),     ["robot_late",         "robot",      "robot", "robot",             "zero",             "missing_zero"]),
    case((6, 50, 300, 320),      ["other_error",        "child_task", "task",  "task",              "one_digit",        "one_digit"]),
    case((8, 300, 2400, 3200),   ["other_error",        "child_task", "task",  "no_classification", "no_class",         "no_class"]),
];
