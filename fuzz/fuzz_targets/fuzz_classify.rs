#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use ventus_types::{LabelDetection, OutdoorLabelSet};
use ventus_verification::{classify_outdoor, evaluate, ClassificationPolicy};

#[derive(Arbitrary, Debug)]
struct ClassifyInput {
    labels: Vec<(String, f64)>,
    vocabulary: Vec<String>,
    threshold: f64,
    min_matches: u32,
    require_face: bool,
    has_face: bool,
}

// Fuzz classification and policy evaluation with arbitrary detections.
// Must never panic; matches can never outnumber the input labels.
fuzz_target!(|input: ClassifyInput| {
    let policy = match ClassificationPolicy::new(input.threshold, input.min_matches) {
        Ok(policy) => policy,
        Err(_) => return,
    };

    let labels: Vec<LabelDetection> = input
        .labels
        .into_iter()
        .map(|(name, confidence)| LabelDetection::new(name, confidence))
        .collect();
    let vocabulary = OutdoorLabelSet::new(input.vocabulary);

    let classification = classify_outdoor(&labels, &vocabulary, &policy);
    assert!(classification.matches.len() <= labels.len());
    assert_eq!(
        classification.is_outdoor,
        classification.matches.len() as u32 >= policy.min_matches()
    );

    let verdict = evaluate(classification.is_outdoor, input.has_face, input.require_face);
    assert_eq!(verdict.passed, verdict.reasons.is_empty());
});
