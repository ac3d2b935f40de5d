//! Dutch cardinal numbers.
//!
//! Dutch writes a cardinal as one fused word: units come before tens and are
//! joined with "en" (or "ën" after a unit ending in "e"), hundreds and
//! thousands are prefixed by their multiplier, and a bare "honderd" or
//! "duizend" stands for one hundred or one thousand.
//!
//! ```
//! use errata_core::Verbalizer;
//! use errata_lang::DutchVerbalizer;
//!
//! let nl = DutchVerbalizer;
//! assert_eq!(nl.verbalize(4200).unwrap().as_str(), "vierduizendtweehonderd");
//! assert_eq!(nl.verbalize(23).unwrap().as_str(), "drieëntwintig");
//! ```

use errata_core::{ErrataError, Result, Verbalized, Verbalizer};

const LOW: [&str; 20] = [
    "nul",
    "één",
    "twee",
    "drie",
    "vier",
    "vijf",
    "zes",
    "zeven",
    "acht",
    "negen",
    "tien",
    "elf",
    "twaalf",
    "dertien",
    "veertien",
    "vijftien",
    "zestien",
    "zeventien",
    "achttien",
    "negentien",
];

// Indexed by the tens digit; 0 and 1 are covered by LOW.
const TENS: [&str; 10] = [
    "", "", "twintig", "dertig", "veertig", "vijftig", "zestig", "zeventig", "tachtig", "negentig",
];

const HUNDRED: &str = "honderd";
const THOUSAND: &str = "duizend";
const MILLION: &str = "miljoen";
const MILLIARD: &str = "miljard";

/// Largest number the Dutch verbalizer writes out.
pub const DUTCH_MAX: u64 = 999_999_999_999;

/// Verbalizer for Dutch cardinals up to [`DUTCH_MAX`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DutchVerbalizer;

impl DutchVerbalizer {
    pub fn new() -> Self {
        Self
    }

    /// Writes `n` out without validation.
    fn words(n: u64) -> String {
        if n == 0 {
            return LOW[0].to_string();
        }
        let mut out = String::new();
        push_scaled(&mut out, n / 1_000_000_000, MILLIARD);
        push_scaled(&mut out, n / 1_000_000 % 1000, MILLION);
        let thousands = n / 1000 % 1000;
        if thousands == 1 {
            out.push_str(THOUSAND);
        } else if thousands > 1 {
            push_below_thousand(&mut out, thousands);
            out.push_str(THOUSAND);
        }
        push_below_thousand(&mut out, n % 1000);
        out
    }
}

impl Verbalizer for DutchVerbalizer {
    fn verbalize(&self, n: u64) -> Result<Verbalized> {
        if n > DUTCH_MAX {
            return Err(ErrataError::InvalidInput(format!(
                "{n} is beyond the Dutch verbalizer range (max {DUTCH_MAX})"
            )));
        }
        Verbalized::new(Self::words(n))
    }

    fn hundred_suffix(&self) -> &str {
        HUNDRED
    }

    fn language(&self) -> &'static str {
        "dutch"
    }
}

// Millions and milliards take "een" for one, never the bare word.
fn push_scaled(out: &mut String, count: u64, scale: &str) {
    match count {
        0 => {}
        1 => {
            out.push_str("een");
            out.push_str(scale);
        }
        _ => {
            push_below_thousand(out, count);
            out.push_str(scale);
        }
    }
}

fn push_below_thousand(out: &mut String, n: u64) {
    debug_assert!(n < 1000);
    let hundreds = n / 100;
    if hundreds == 1 {
        out.push_str(HUNDRED);
    } else if hundreds > 1 {
        out.push_str(LOW[hundreds as usize]);
        out.push_str(HUNDRED);
    }
    let rest = n % 100;
    if rest > 0 {
        push_below_hundred(out, rest);
    }
}

fn push_below_hundred(out: &mut String, n: u64) {
    debug_assert!(n > 0 && n < 100);
    if n < 20 {
        out.push_str(LOW[n as usize]);
        return;
    }
    let tens = TENS[(n / 10) as usize];
    let unit = n % 10;
    if unit == 0 {
        out.push_str(tens);
        return;
    }
    // "eenentwintig", "tweeëntwintig", "drieëntwintig", "vierentwintig"
    let unit_word = if unit == 1 { "een" } else { LOW[unit as usize] };
    out.push_str(unit_word);
    let joiner = if unit_word.ends_with('e') {
        "ën"
    } else {
        "en"
    };
    out.push_str(joiner);
    out.push_str(tens);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn nl(n: u64) -> String {
        DutchVerbalizer.verbalize(n).unwrap().into_string()
    }

    #[test]
    fn test_low_numbers() {
        assert_eq!(nl(0), "nul");
        assert_eq!(nl(1), "één");
        assert_eq!(nl(11), "elf");
        assert_eq!(nl(19), "negentien");
        assert_eq!(nl(80), "tachtig");
    }

    #[test]
    fn test_unit_tens_fusion() {
        assert_eq!(nl(21), "eenentwintig");
        assert_eq!(nl(22), "tweeëntwintig");
        assert_eq!(nl(27), "zevenentwintig");
        assert_eq!(nl(33), "drieëndertig");
        assert_eq!(nl(99), "negenennegentig");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(nl(100), "honderd");
        assert_eq!(nl(101), "honderdéén");
        assert_eq!(nl(150), "honderdvijftig");
        assert_eq!(nl(250), "tweehonderdvijftig");
        assert_eq!(nl(270), "tweehonderdzeventig");
        assert_eq!(nl(320), "driehonderdtwintig");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(nl(1000), "duizend");
        assert_eq!(nl(1100), "duizendhonderd");
        assert_eq!(nl(1200), "duizendtweehonderd");
        assert_eq!(nl(4200), "vierduizendtweehonderd");
        assert_eq!(nl(12000), "twaalfduizend");
        assert_eq!(nl(21000), "eenentwintigduizend");
        assert_eq!(nl(100_000), "honderdduizend");
        assert_eq!(nl(101_000), "honderdéénduizend");
        assert_eq!(nl(13_600), "dertienduizendzeshonderd");
    }

    #[test]
    fn test_millions_have_no_spaces() {
        assert_eq!(nl(1_000_000), "eenmiljoen");
        assert_eq!(nl(2_500_000), "tweemiljoenvijfhonderdduizend");
        assert_eq!(nl(3_000_000_001), "driemiljardéén");
    }

    #[test]
    fn test_reference_spellings() {
        for &(n, words) in errata_test::DUTCH_WORDS {
            assert_eq!(nl(n), words, "{n}");
        }
    }

    #[test]
    fn test_out_of_range() {
        assert!(DutchVerbalizer.verbalize(DUTCH_MAX).is_ok());
        assert!(matches!(
            DutchVerbalizer.verbalize(DUTCH_MAX + 1),
            Err(ErrataError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_hundred_suffix() {
        assert_eq!(DutchVerbalizer.hundred_suffix(), "honderd");
        assert_eq!(DutchVerbalizer.language(), "dutch");
    }

    proptest! {
        #[test]
        fn prop_words_are_letters_only(n in 0u64..=DUTCH_MAX) {
            let words = nl(n);
            prop_assert!(!words.is_empty());
            prop_assert!(words.chars().all(|c| c.is_alphabetic()));
        }

        #[test]
        fn prop_deterministic(n in 0u64..10_000_000) {
            prop_assert_eq!(nl(n), nl(n));
        }

        #[test]
        fn prop_distinct_below_thousand(a in 0u64..1000, b in 0u64..1000) {
            prop_assume!(a != b);
            prop_assert_ne!(nl(a), nl(b));
        }
    }
}
