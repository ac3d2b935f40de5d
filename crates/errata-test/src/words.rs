//! Dutch spellings the verbalizer must reproduce letter for letter.

/// `(number, words)` pairs.
pub const DUTCH_WORDS: &[(u64, &str)] = &[
    (0, "nul"),
    (1, "één"),
    (12, "twaalf"),
    (24, "vierentwintig"),
    (27, "zevenentwintig"),
    (42, "tweeënveertig"),
    (53, "drieënvijftig"),
    (100, "honderd"),
    (150, "honderdvijftig"),
    (200, "tweehonderd"),
    (250, "tweehonderdvijftig"),
    (270, "tweehonderdzeventig"),
    (300, "driehonderd"),
    (320, "driehonderdtwintig"),
    (1000, "duizend"),
    (1200, "duizendtweehonderd"),
    (2400, "tweeduizendvierhonderd"),
    (4200, "vierduizendtweehonderd"),
    (13_600, "dertienduizendzeshonderd"),
    (40_000, "veertigduizend"),
];
