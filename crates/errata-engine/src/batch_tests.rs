//! Tests for batch classification.

use errata_config::{BatchThreads, ClassifierConfig};
use errata_core::{ErrataError, ErrorLabel, Taxonomy};
use errata_test::LABELLED;

use crate::batch::*;
use crate::Classifier;

fn record(raw: (i64, i64, i64, i64), evaluation: bool) -> BatchRecord {
    BatchRecord {
        multiplier: raw.0,
        multiplicand: raw.1,
        correct_answer: raw.2,
        given_answer: raw.3,
        evaluation,
    }
}

fn labelled_records() -> Vec<BatchRecord> {
    LABELLED
        .iter()
        .map(|case| record(case.raw, false))
        .collect()
}

#[test]
fn test_parallel_matches_sequential() {
    let classifier: Classifier = Classifier::default();
    let records = labelled_records();

    let sequential = BatchRunner::new(Taxonomy::Task8)
        .with_threads(BatchThreads::None)
        .run(&classifier, &records)
        .unwrap();

    for threads in [BatchThreads::Auto, BatchThreads::Count(3)] {
        let parallel = BatchRunner::new(Taxonomy::Task8)
            .with_threads(threads)
            .run(&classifier, &records)
            .unwrap();
        assert_eq!(parallel.outcomes, sequential.outcomes);
    }

    for (i, outcome) in sequential.outcomes.iter().enumerate() {
        assert_eq!(outcome.index, i);
        let label = outcome.result.as_ref().unwrap().unwrap().label;
        assert_eq!(label.as_str(), LABELLED[i].task8);
    }
}

#[test]
fn test_evaluation_flag_skips_for_error_taxonomies() {
    let classifier: Classifier = Classifier::default();
    let marked = record((9, 30, 270, 27), true);

    for taxonomy in [Taxonomy::Error3, Taxonomy::Error4] {
        let result = classify_record(&classifier, &marked, taxonomy).unwrap();
        assert_eq!(result, None);
    }

    let unmarked = record((9, 30, 270, 27), false);
    let result = classify_record(&classifier, &unmarked, Taxonomy::Error3).unwrap();
    assert_eq!(result.map(|c| c.label), Some(ErrorLabel::Task));
}

#[test]
fn test_evaluation_flag_threaded_through_other_taxonomies() {
    let classifier: Classifier = Classifier::default();
    let marked = record((9, 30, 270, 27), true);

    for taxonomy in [
        Taxonomy::Full,
        Taxonomy::Robot2,
        Taxonomy::Task5,
        Taxonomy::Task8,
    ] {
        assert!(classify_record(&classifier, &marked, taxonomy)
            .unwrap()
            .is_some());
    }

    let report = BatchRunner::new(Taxonomy::Task5)
        .run(&classifier, &[marked])
        .unwrap();
    assert!(report.outcomes[0].evaluation);
    assert_eq!(report.outcomes[0].to_line().label, Some(ErrorLabel::Zero));
}

#[test]
fn test_invalid_record_does_not_stop_batch() {
    let classifier: Classifier = Classifier::default();
    let records = [
        record((9, 30, 270, 27), false),
        record((-2, 30, 270, 27), false),
        record((8, 0, 0, 10), false),
        record((8, 300, 2400, 2100), true),
    ];

    let report = BatchRunner::new(Taxonomy::Error4)
        .with_threads(BatchThreads::None)
        .run(&classifier, &records)
        .unwrap();

    assert!(report.outcomes[0].result.is_ok());
    for failed in &report.outcomes[1..3] {
        assert!(matches!(failed.result, Err(ErrataError::InvalidInput(_))));
    }
    assert_eq!(report.outcomes[3].result, Ok(None));

    assert_eq!(report.summary.labels.get(&ErrorLabel::Task), Some(&1));
    assert_eq!(report.summary.failed, 2);
    assert_eq!(report.summary.skipped, 1);
    assert_eq!(report.summary.classified(), 1);
    assert_eq!(report.summary.total(), 4);
}

#[test]
fn test_runner_from_config() {
    let config = ClassifierConfig::new()
        .with_taxonomy(Taxonomy::Robot2)
        .with_batch_threads(BatchThreads::Count(2));
    let runner = BatchRunner::from_config(&config);
    assert_eq!(runner.taxonomy(), Taxonomy::Robot2);
    assert_eq!(
        runner,
        BatchRunner::new(Taxonomy::Robot2).with_threads(BatchThreads::Count(2))
    );
}

#[test]
fn test_parse_json_array() {
    let input = r#"[
        {"multiplier": 9, "multiplicand": 30, "correct_answer": 270, "given_answer": 27},
        {"multiplier": 8, "multiplicand": 300, "correct_answer": 2400, "given_answer": -1, "evaluation": true}
    ]"#;

    let records = parse_records(input).unwrap();
    assert_eq!(records[0], record((9, 30, 270, 27), false));
    assert_eq!(records[1], record((8, 300, 2400, -1), true));
    assert_eq!(records.len(), 2);
}

#[test]
fn test_parse_json_lines() {
    let input = concat!(
        r#"{"multiplier": 9, "multiplicand": 30, "correct_answer": 270, "given_answer": 27}"#,
        "\n\n",
        r#"{"multiplier": 5, "multiplicand": 80, "correct_answer": 400, "given_answer": 100, "evaluation": false}"#,
        "\n",
    );

    let records = parse_records(input).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1], record((5, 80, 400, 100), false));
}

#[test]
fn test_parse_reports_line_number() {
    let input = concat!(
        r#"{"multiplier": 9, "multiplicand": 30, "correct_answer": 270, "given_answer": 27}"#,
        "\n",
        r#"{"multiplier": "nine"}"#,
        "\n",
    );

    match parse_records(input) {
        Err(ErrataError::Input(message)) => assert!(message.starts_with("line 2:")),
        other => panic!("expected input error, got {other:?}"),
    }
}

#[test]
fn test_line_serialization() {
    let classifier: Classifier = Classifier::default();
    let records = [
        record((7, 600, 4200, 42), false),
        record((9, 30, 270, 27), true),
        record((-2, 30, 270, 27), false),
    ];
    let report = BatchRunner::new(Taxonomy::Full)
        .run(&classifier, &records)
        .unwrap();

    let robot = serde_json::to_value(report.outcomes[0].to_line()).unwrap();
    assert_eq!(robot["index"], 0);
    assert_eq!(robot["label"], "robot_late");
    assert_eq!(
        robot["diagnostic"],
        "Oh sorry I did not fully get that. Please repeat your answer once my eyes turn green."
    );
    assert_eq!(robot["evaluation"], false);
    assert!(robot.get("error").is_none());

    let failed = serde_json::to_value(report.outcomes[2].to_line()).unwrap();
    assert!(failed["label"].is_null());
    assert!(failed["error"].as_str().unwrap().contains("negative"));
}
