//! Numeric patterns of arithmetic slips.
//!
//! Each detector looks at the integers only and answers one question about
//! the relation between the correct and the given answer. They are
//! independent and may overlap; the decision engine orders them.

use errata_core::{ErrataError, Result};

/// The given answer is the correct one scaled up by a power of ten.
///
/// ```
/// use errata_scoring::detectors::added_zeros;
///
/// assert!(added_zeros(1000, 10_000));
/// assert!(!added_zeros(10_000, 100));
/// ```
pub fn added_zeros(correct: u64, given: u64) -> bool {
    given > correct && correct != 0 && given % correct == 0 && is_power_of_ten(given / correct)
}

/// The given answer is the correct one scaled down by a power of ten.
///
/// ```
/// use errata_scoring::detectors::missing_zeros;
///
/// assert!(missing_zeros(10_000, 100));
/// assert!(!missing_zeros(1000, 10_000));
/// ```
pub fn missing_zeros(correct: u64, given: u64) -> bool {
    given < correct && given != 0 && correct % given == 0 && is_power_of_ten(correct / given)
}

/// Both answers have the same digits in a possibly different order.
pub fn digits_transposed(correct: u64, given: u64) -> bool {
    let mut correct = correct.to_string().into_bytes();
    let mut given = given.to_string().into_bytes();
    if correct.len() != given.len() {
        return false;
    }
    correct.sort_unstable();
    given.sort_unstable();
    correct == given
}

/// Both answers have the same number of digits and differ in exactly one.
pub fn one_digit_different(correct: u64, given: u64) -> bool {
    let correct = correct.to_string();
    let given = given.to_string();
    let differing = correct.bytes().zip(given.bytes()).filter(|(c, g)| c != g);
    correct.len() == given.len() && differing.count() == 1
}

/// The given answer is a smaller multiple of the multiplicand, as if one term
/// of the repeated addition was dropped.
///
/// # Errors
///
/// Returns [`ErrataError::InvalidInput`] if the multiplicand is zero or the
/// product overflows.
pub fn missing_addend(multiplier: u64, multiplicand: u64, given: u64) -> Result<bool> {
    let correct = addend_product(multiplier, multiplicand)?;
    Ok(given < correct && given % multiplicand == 0)
}

/// The given answer is a larger multiple of the multiplicand, as if a term
/// was added once too often.
///
/// # Errors
///
/// Same as [`missing_addend`].
pub fn extra_addend(multiplier: u64, multiplicand: u64, given: u64) -> Result<bool> {
    let correct = addend_product(multiplier, multiplicand)?;
    Ok(given > correct && given % multiplicand == 0)
}

/// Returns true if any detector recognises the given answer.
///
/// Detectors run in the task-taxonomy order and stop at the first hit.
pub fn any_task_pattern(
    multiplier: u64,
    multiplicand: u64,
    correct: u64,
    given: u64,
) -> Result<bool> {
    Ok(added_zeros(correct, given)
        || missing_zeros(correct, given)
        || digits_transposed(correct, given)
        || missing_addend(multiplier, multiplicand, given)?
        || extra_addend(multiplier, multiplicand, given)?
        || one_digit_different(correct, given))
}

fn addend_product(multiplier: u64, multiplicand: u64) -> Result<u64> {
    if multiplicand == 0 {
        return Err(ErrataError::InvalidInput(
            "multiplicand is zero; addend patterns are undefined".to_string(),
        ));
    }
    match multiplier.checked_mul(multiplicand) {
        Some(product) => Ok(product),
        None => Err(ErrataError::InvalidInput(format!("{multiplier} x {multiplicand} overflows"))),
    }
}

fn is_power_of_ten(mut n: u64) -> bool {
    if n == 0 {
        return false;
    }
    while n % 10 == 0 {
        n /= 10;
    }
    n == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added_zeros() {
        assert!(added_zeros(1000, 10_000));
        assert!(added_zeros(40, 40_000));
        assert!(added_zeros(3, 30));
        assert!(!added_zeros(10_000, 100));
        assert!(!added_zeros(40, 4002));
        assert!(!added_zeros(40, 120));
    }

    #[test]
    fn test_added_zeros_zero_correct() {
        assert!(!added_zeros(0, 100));
    }

    #[test]
    fn test_missing_zeros() {
        assert!(missing_zeros(10_000, 100));
        assert!(missing_zeros(300, 3));
        assert!(missing_zeros(270, 27));
        assert!(!missing_zeros(1000, 10_000));
        assert!(!missing_zeros(40, 40_000));
        assert!(!missing_zeros(40, 4002));
        assert!(!missing_zeros(400, 200));
    }

    #[test]
    fn test_missing_zeros_zero_given() {
        assert!(!missing_zeros(100, 0));
    }

    #[test]
    fn test_digits_transposed() {
        assert!(digits_transposed(243, 234));
        assert!(digits_transposed(4200, 2400));
        assert!(!digits_transposed(542, 426));
        assert!(!digits_transposed(243, 2430));
    }

    #[test]
    fn test_one_digit_different() {
        assert!(one_digit_different(1400, 1300));
        assert!(one_digit_different(640, 610));
        assert!(!one_digit_different(540, 450));
        assert!(!one_digit_different(540, 540));
        assert!(!one_digit_different(54, 540));
    }

    #[test]
    fn test_missing_addend() {
        assert!(missing_addend(8, 300, 2100).unwrap());
        assert!(!missing_addend(8, 300, 2200).unwrap());
        assert!(!missing_addend(8, 300, 2700).unwrap());
    }

    #[test]
    fn test_extra_addend() {
        assert!(extra_addend(8, 300, 2700).unwrap());
        assert!(!extra_addend(8, 300, 2100).unwrap());
        assert!(!extra_addend(8, 300, 2200).unwrap());
    }

    #[test]
    fn test_addend_rejects_zero_multiplicand() {
        assert!(matches!(missing_addend(8, 0, 10), Err(ErrataError::InvalidInput(_))));
        assert!(extra_addend(8, 0, 10).is_err());
    }

    #[test]
    fn test_addend_rejects_overflow() {
        assert!(extra_addend(u64::MAX, 2, 10).is_err());
    }

    #[test]
    fn test_task_pattern_cases() {
        for case in errata_test::TASK_PATTERNS {
            let (m, n) = (case.multiplier, case.multiplicand);
            let found = any_task_pattern(m, n, case.correct, case.given).unwrap();
            assert_eq!(found, case.has_pattern, "{case:?}");
        }
    }

    #[test]
    fn test_power_of_ten() {
        assert!(is_power_of_ten(1));
        assert!(is_power_of_ten(10));
        assert!(is_power_of_ten(1_000_000));
        assert!(!is_power_of_ten(0));
        assert!(!is_power_of_ten(20));
        assert!(!is_power_of_ten(101));
    }
}
