use proptest::prelude::*;

use ventus_types::{LabelDetection, OutdoorLabelSet};
use ventus_verification::{classify_outdoor, evaluate, ClassificationPolicy};

fn arb_label() -> impl Strategy<Value = LabelDetection> {
    let name = prop::sample::select(vec![
        "Sky", "Tree", "Grass", "Cloud", "Road", "Sofa", "Desk", "Laptop", "Mug",
    ]);
    (name, 0.0f64..=100.0).prop_map(|(name, confidence)| LabelDetection::new(name, confidence))
}

fn arb_policy() -> impl Strategy<Value = ClassificationPolicy> {
    (0.0f64..=100.0, 1u32..6).prop_map(|(threshold, min_matches)| {
        ClassificationPolicy::new(threshold, min_matches).unwrap()
    })
}

proptest! {
    /// The matches are exactly the membership-and-threshold filter of the input.
    #[test]
    fn matches_are_the_filtered_input(
        labels in prop::collection::vec(arb_label(), 0..30),
        policy in arb_policy(),
    ) {
        let set = OutdoorLabelSet::default();
        let result = classify_outdoor(&labels, &set, &policy);

        let expected: Vec<LabelDetection> = labels
            .iter()
            .filter(|l| set.contains(&l.name) && l.confidence > policy.confidence_threshold())
            .cloned()
            .collect();
        prop_assert_eq!(result.matches, expected);
    }

    /// The outdoor call is exactly the match-count rule.
    #[test]
    fn outdoor_iff_enough_matches(
        labels in prop::collection::vec(arb_label(), 0..30),
        policy in arb_policy(),
    ) {
        let set = OutdoorLabelSet::default();
        let result = classify_outdoor(&labels, &set, &policy);
        prop_assert_eq!(result.is_outdoor, result.matches.len() as u32 >= policy.min_matches());
    }

    /// Non-members never influence the outcome.
    #[test]
    fn non_members_are_inert(
        labels in prop::collection::vec(arb_label(), 0..20),
        noise_confidence in 0.0f64..=100.0,
        policy in arb_policy(),
    ) {
        let set = OutdoorLabelSet::default();
        let baseline = classify_outdoor(&labels, &set, &policy);

        let mut noisy = labels.clone();
        noisy.push(LabelDetection::new("Refrigerator", noise_confidence));
        let with_noise = classify_outdoor(&noisy, &set, &policy);

        prop_assert_eq!(baseline, with_noise);
    }

    /// Raising the threshold never produces more matches.
    #[test]
    fn higher_threshold_is_monotone(
        labels in prop::collection::vec(arb_label(), 0..30),
        low in 0.0f64..=50.0,
        high in 50.0f64..=100.0,
    ) {
        let set = OutdoorLabelSet::default();
        let lenient = ClassificationPolicy::new(low, 1).unwrap();
        let strict = ClassificationPolicy::new(high, 1).unwrap();

        let lenient_matches = classify_outdoor(&labels, &set, &lenient).matches.len();
        let strict_matches = classify_outdoor(&labels, &set, &strict).matches.len();
        prop_assert!(strict_matches <= lenient_matches);
    }

    /// A verdict passes exactly when it carries no reasons.
    #[test]
    fn verdict_passed_iff_reasons_empty(
        is_outdoor: bool,
        has_face: bool,
        require_face: bool,
    ) {
        let verdict = evaluate(is_outdoor, has_face, require_face);
        prop_assert_eq!(verdict.passed, verdict.reasons.is_empty());
        prop_assert_eq!(verdict.passed, is_outdoor && (has_face || !require_face));
    }

    /// Dropping the face requirement can only help.
    #[test]
    fn face_requirement_is_monotone(is_outdoor: bool, has_face: bool) {
        let required = evaluate(is_outdoor, has_face, true);
        let relaxed = evaluate(is_outdoor, has_face, false);
        prop_assert!(!required.passed || relaxed.passed);
    }
}
