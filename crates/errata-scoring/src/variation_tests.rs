//! Tests for alternate hundreds readings.

use errata_core::ErrataError;
use errata_lang::DutchVerbalizer;

use crate::similarity::Similarity;
use crate::variation::{has_variation, robot_similarity, variation_of, VariationSide};

#[test]
fn test_has_variation_bounds() {
    assert!(has_variation(1100));
    assert!(has_variation(1200));
    assert!(has_variation(9900));
    assert!(!has_variation(1000));
    assert!(!has_variation(900));
    assert!(!has_variation(1250));
    assert!(!has_variation(5000));
    assert!(!has_variation(10_100));
}

#[test]
fn test_variation_of() {
    let nl = DutchVerbalizer;
    assert_eq!(variation_of(&nl, 1200).unwrap().as_str(), "twaalfhonderd");
    assert_eq!(
        variation_of(&nl, 5300).unwrap().as_str(),
        "drieënvijftighonderd"
    );
    assert_eq!(variation_of(&nl, 1100).unwrap().as_str(), "elfhonderd");
}

#[test]
fn test_variation_of_without_variation_fails() {
    assert_eq!(
        variation_of(&DutchVerbalizer, 1000),
        Err(ErrataError::NoVariation(1000))
    );
    assert!(variation_of(&DutchVerbalizer, 250).is_err());
}

#[test]
fn test_robot_similarity_without_variation() {
    let sim = robot_similarity(&DutchVerbalizer, 320, 300).unwrap();
    assert_eq!(sim.start, Similarity::FULL);
    assert_eq!(sim.variation, VariationSide::None);
    assert!(sim.is_robot());
}

#[test]
fn test_correct_variation_rescues_prefix() {
    // "vierentwintig" does not start "tweeduizendvierhonderd" but does start
    // "vierentwintighonderd".
    let sim = robot_similarity(&DutchVerbalizer, 2400, 24).unwrap();
    assert_eq!(sim.start, Similarity::FULL);
    assert_eq!(sim.end, Similarity::NONE);
    assert_eq!(sim.variation, VariationSide::Correct);
}

#[test]
fn test_full_canonical_score_is_kept() {
    // "tweehonderd" already ends "duizendtweehonderd"; the alternate reading
    // must not overwrite that.
    let sim = robot_similarity(&DutchVerbalizer, 1200, 200).unwrap();
    assert_eq!(sim.end, Similarity::FULL);
    assert_eq!(sim.start, Similarity::new(2, 11).unwrap());
}

#[test]
fn test_alternate_score_replaces_partial_score() {
    // Canonically the two agree for seven letters ("duizend"), but the
    // alternate "twaalfhonderd" disagrees at once and wins.
    let sim = robot_similarity(&DutchVerbalizer, 1200, 1300).unwrap();
    assert_eq!(sim.start, Similarity::NONE);
    assert!(!sim.is_robot());
}

#[test]
fn test_given_variation_is_used_when_correct_has_none() {
    let sim = robot_similarity(&DutchVerbalizer, 300, 1300).unwrap();
    assert_eq!(sim.variation, VariationSide::Given);
    assert_eq!(sim.start, Similarity::new(1, 11).unwrap());
    assert_eq!(sim.end, Similarity::new(7, 11).unwrap());
}

#[test]
fn test_only_correct_side_explored_when_both_vary() {
    let sim = robot_similarity(&DutchVerbalizer, 1300, 1200).unwrap();
    assert_eq!(sim.variation, VariationSide::Correct);
    assert!(!sim.is_robot());
}
