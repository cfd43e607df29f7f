use proptest::prelude::*;

use ventus_types::{
    LabelDetection, OutdoorLabelSet, PhotoRef, VerificationRequest, DEFAULT_OUTDOOR_LABELS,
};

proptest! {
    /// Every name fed into the set is a member afterwards.
    #[test]
    fn label_set_contains_all_sources(names in prop::collection::vec("[A-Za-z]{1,12}", 0..20)) {
        let set = OutdoorLabelSet::new(names.clone());
        for name in &names {
            prop_assert!(set.contains(name));
        }
    }

    /// Duplicate names collapse: the set is never larger than the distinct count.
    #[test]
    fn label_set_collapses_duplicates(names in prop::collection::vec("[a-c]{1,3}", 0..20)) {
        let set = OutdoorLabelSet::new(names.clone());
        let mut distinct = names.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(set.len(), distinct.len());
    }

    /// Membership is case-sensitive.
    #[test]
    fn label_set_case_sensitive(name in "[a-z]{1,12}") {
        let set = OutdoorLabelSet::new([name.clone()]);
        let upper = name.to_uppercase();
        prop_assert!(set.contains(&name));
        prop_assert!(!set.contains(&upper));
    }

    /// LabelDetection::new preserves both fields.
    #[test]
    fn label_detection_new(name in "[A-Za-z ]{0,20}", confidence in 0.0f64..100.0) {
        let label = LabelDetection::new(name.clone(), confidence);
        prop_assert_eq!(label.name, name);
        prop_assert_eq!(label.confidence, confidence);
    }

    /// S3 references render as bucket/key.
    #[test]
    fn photo_ref_s3_display(bucket in "[a-z0-9-]{1,20}", key in "[a-z0-9/._-]{1,30}") {
        let photo = PhotoRef::s3(bucket.clone(), key.clone());
        prop_assert_eq!(photo.to_string(), format!("{bucket}/{key}"));
    }

    /// URI references render verbatim.
    #[test]
    fn photo_ref_uri_display(uri in "https://[a-z0-9./-]{1,30}") {
        let photo = PhotoRef::uri(uri.clone());
        prop_assert_eq!(photo.to_string(), uri);
    }
}

#[test]
fn default_vocabulary_is_complete() {
    let set = OutdoorLabelSet::default();
    assert_eq!(set.len(), DEFAULT_OUTDOOR_LABELS.len());
    for name in DEFAULT_OUTDOOR_LABELS {
        assert!(set.contains(name), "missing default label {name}");
    }
    assert!(!set.contains("outdoors"), "vocabulary must stay case-sensitive");
}

#[test]
fn label_set_accessors() {
    let set = OutdoorLabelSet::new(["Sky", "Tree"]);
    assert!(!set.is_empty());
    let mut names: Vec<&str> = set.iter().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Sky", "Tree"]);

    let collected: OutdoorLabelSet = vec!["Sky".to_string()].into_iter().collect();
    assert!(collected.contains("Sky"));
    assert!(OutdoorLabelSet::new(Vec::<String>::new()).is_empty());
}

#[test]
fn photo_ref_untagged_serde() {
    let uri: PhotoRef = serde_json::from_str(r#""https://cdn.ventus.app/p/1.jpg""#).unwrap();
    assert_eq!(uri, PhotoRef::uri("https://cdn.ventus.app/p/1.jpg"));

    let s3: PhotoRef =
        serde_json::from_str(r#"{"bucket": "ventus-photos", "key": "u/42/morning.jpg"}"#).unwrap();
    assert_eq!(s3, PhotoRef::s3("ventus-photos", "u/42/morning.jpg"));
}

#[test]
fn request_builders_set_optional_fields() {
    let request = VerificationRequest::new(PhotoRef::uri("https://x/1.jpg"))
        .with_contact_phone("+15551234567")
        .with_user_name("Priya")
        .with_message_template("{username} overslept");

    assert_eq!(request.contact_phone.as_deref(), Some("+15551234567"));
    assert_eq!(request.user_name.as_deref(), Some("Priya"));
    assert_eq!(request.message_template.as_deref(), Some("{username} overslept"));

    let bare = VerificationRequest::new(PhotoRef::uri("https://x/2.jpg"));
    assert!(bare.contact_phone.is_none());
    assert!(bare.user_name.is_none());
    assert!(bare.message_template.is_none());
}
