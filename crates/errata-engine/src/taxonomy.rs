//! Rule tables for every taxonomy.
//!
//! Each table is a static slice so that its priority order can be read and
//! tested rule by rule. `digits_transposed` appears twice in [`FULL`]: the
//! second entry is shadowed by the first and never fires, but keeps its label
//! and diagnostic in case the first is ever removed.

use errata_core::{ErrorLabel, Result, Taxonomy};

use crate::evidence::Evidence;
use crate::rule::{Rule, RuleSet};

/// Shown when the robot most likely misheard the answer.
pub const REPEAT_ANSWER: &str =
    "Oh sorry I did not fully get that. Please repeat your answer once my eyes turn green.";

/// Shown when the answer has zeros too many.
pub const EXTRA_ZEROS: &str = "You almost got it. We just need to get rid of some zeros.";

/// Shown when the answer lacks zeros.
pub const MISSING_ZEROS: &str = "You almost got it. You are just missing some zeros.";

/// Shown when two digits were swapped.
pub const TWISTED_NUMBERS: &str = "You almost got it. You just twisted two numbers";

fn no_answer(e: &Evidence<'_>) -> Result<bool> {
    Ok(e.no_answer())
}

fn correct(e: &Evidence<'_>) -> Result<bool> {
    Ok(e.is_correct())
}

fn robot_late(e: &Evidence<'_>) -> Result<bool> {
    e.robot_late()
}

fn robot_soon(e: &Evidence<'_>) -> Result<bool> {
    e.robot_soon()
}

fn robot(e: &Evidence<'_>) -> Result<bool> {
    e.robot()
}

fn added_zeros(e: &Evidence<'_>) -> Result<bool> {
    Ok(e.added_zeros())
}

fn missing_zeros(e: &Evidence<'_>) -> Result<bool> {
    Ok(e.missing_zeros())
}

fn any_zeros(e: &Evidence<'_>) -> Result<bool> {
    Ok(e.added_zeros() || e.missing_zeros())
}

fn digits_transposed(e: &Evidence<'_>) -> Result<bool> {
    Ok(e.digits_transposed())
}

fn missing_addend(e: &Evidence<'_>) -> Result<bool> {
    e.missing_addend()
}

fn extra_addend(e: &Evidence<'_>) -> Result<bool> {
    e.extra_addend()
}

fn any_addend(e: &Evidence<'_>) -> Result<bool> {
    Ok(e.missing_addend()? || e.extra_addend()?)
}

fn one_digit(e: &Evidence<'_>) -> Result<bool> {
    Ok(e.one_digit_different())
}

fn task_pattern(e: &Evidence<'_>) -> Result<bool> {
    e.any_task_pattern()
}

const FULL_RULES: &[Rule] = &[
    Rule::new("no_answer", ErrorLabel::ChildNoAnswer, no_answer),
    Rule::new("correct", ErrorLabel::NoError, correct),
    Rule::new("robot_late", ErrorLabel::RobotLate, robot_late).with_diagnostic(REPEAT_ANSWER),
    Rule::new("robot_soon", ErrorLabel::RobotSoon, robot_soon).with_diagnostic(REPEAT_ANSWER),
    Rule::new(
        "robot_correction",
        ErrorLabel::RobotCorrection,
        digits_transposed,
    ),
    Rule::new("added_zeros", ErrorLabel::TaskExtraZeros, added_zeros).with_diagnostic(EXTRA_ZEROS),
    Rule::new("missing_zeros", ErrorLabel::TaskMissingZeros, missing_zeros)
        .with_diagnostic(MISSING_ZEROS),
    Rule::new("number_twist", ErrorLabel::NumberTwist, digits_transposed)
        .with_diagnostic(TWISTED_NUMBERS),
];

/// Fine-grained labels with diagnostics, used for single answers.
pub static FULL: RuleSet = RuleSet::new("full", FULL_RULES, ErrorLabel::OtherError);

const ROBOT2_RULES: &[Rule] = &[Rule::new("robot", ErrorLabel::Robot, robot)];

/// Robot or not.
pub static ROBOT2: RuleSet = RuleSet::new("robot2", ROBOT2_RULES, ErrorLabel::ChildTask);

const ERROR3_RULES: &[Rule] = &[
    Rule::new("no_answer", ErrorLabel::Child, no_answer),
    Rule::new("robot", ErrorLabel::Robot, robot),
];

pub static ERROR3: RuleSet = RuleSet::new("error3", ERROR3_RULES, ErrorLabel::Task);

const ERROR4_RULES: &[Rule] = &[
    Rule::new("no_answer", ErrorLabel::Child, no_answer),
    Rule::new("robot", ErrorLabel::Robot, robot),
    Rule::new("task_pattern", ErrorLabel::Task, task_pattern),
];

/// Like [`ERROR3`], but a task error needs a recognizable slip.
pub static ERROR4: RuleSet = RuleSet::new("error4", ERROR4_RULES, ErrorLabel::NoClassification);

const TASK5_RULES: &[Rule] = &[
    Rule::new("no_answer", ErrorLabel::ChildCompetence, no_answer),
    Rule::new("zeros", ErrorLabel::Zero, any_zeros),
    Rule::new("number_twist", ErrorLabel::NumberTwist, digits_transposed),
    Rule::new("addition", ErrorLabel::Addition, any_addend),
    Rule::new("one_digit", ErrorLabel::OneDigit, one_digit),
];

pub static TASK5: RuleSet = RuleSet::new("task5", TASK5_RULES, ErrorLabel::NoClass);

const TASK8_RULES: &[Rule] = &[
    Rule::new("no_answer", ErrorLabel::ChildCompetence, no_answer),
    Rule::new("added_zeros", ErrorLabel::AddedZero, added_zeros),
    Rule::new("missing_zeros", ErrorLabel::MissingZero, missing_zeros),
    Rule::new("number_twist", ErrorLabel::NumberTwist, digits_transposed),
    Rule::new(
        "missing_addend",
        ErrorLabel::MissingAddition,
        missing_addend,
    ),
    Rule::new("extra_addend", ErrorLabel::AddedAddition, extra_addend),
    Rule::new("one_digit", ErrorLabel::OneDigit, one_digit),
];

/// [`TASK5`] with the zero and addition classes split by direction.
pub static TASK8: RuleSet = RuleSet::new("task8", TASK8_RULES, ErrorLabel::NoClass);

/// Rule table for a taxonomy.
pub fn rule_set(taxonomy: Taxonomy) -> &'static RuleSet {
    match taxonomy {
        Taxonomy::Full => &FULL,
        Taxonomy::Robot2 => &ROBOT2,
        Taxonomy::Error3 => &ERROR3,
        Taxonomy::Error4 => &ERROR4,
        Taxonomy::Task5 => &TASK5,
        Taxonomy::Task8 => &TASK8,
    }
}
