use lift_core::constants::MIN_LEAK_CHECK_BYTES;
use lift_core::traits::{IAnonymizer, IEntityDetector, ISanitizer};
use lift_privacy::{Anonymizer, EntityDetector, PrivacyEngine};
use proptest::prelude::*;

/// Text fragments mixing ordinary prose with values the detector reports.
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,20}",
        "[a-z]{3,8}@[a-z]{3,8}\\.(com|edu|org)",
        "555-[0-9]{3}-[0-9]{4}",
        "[0-9]{3}-[0-9]{2}-[0-9]{4}",
        "Dr\\. [A-Z][a-z]{2,6} [A-Z][a-z]{2,6}",
        "Student ID: [0-9]{6,8}",
        "\n|\t| ",
        "[é漢ü]{1,3}",
    ]
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..12).prop_map(|parts| parts.join(" "))
}

// ── Detected spans are in bounds and pairwise disjoint ────────────────────

proptest! {
    #[test]
    fn detected_spans_are_valid_and_disjoint(text in document()) {
        let detector = EntityDetector::default();
        let entities = detector.detect(&text).unwrap();
        for e in &entities {
            prop_assert!(e.start < e.end);
            prop_assert!(e.end <= text.len());
            prop_assert!(text.is_char_boundary(e.start) && text.is_char_boundary(e.end));
        }
        for pair in entities.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start, "overlapping: {:?}", pair);
        }
    }

    #[test]
    fn detection_never_fails_on_arbitrary_text(text in ".{0,200}") {
        let detector = EntityDetector::default();
        prop_assert!(detector.detect(&text).is_ok());
    }
}

// ── Anonymized output leaks nothing and preserves the rest ────────────────

proptest! {
    #[test]
    fn anonymized_output_never_contains_redacted_values(text in document()) {
        let detector = EntityDetector::default();
        let entities = detector.detect(&text).unwrap();
        let result = Anonymizer::new().anonymize(&text, &entities).unwrap();
        for e in &entities {
            let original = &text[e.start..e.end];
            if original.len() >= MIN_LEAK_CHECK_BYTES {
                prop_assert!(
                    !result.text.contains(original),
                    "'{}' leaked into '{}'",
                    original,
                    result.text
                );
            }
        }
    }

    #[test]
    fn anonymized_output_matches_input_outside_spans(text in document()) {
        let detector = EntityDetector::default();
        let entities = detector.detect(&text).unwrap();
        let result = Anonymizer::new().anonymize(&text, &entities).unwrap();

        // Rebuild the output from the input gaps and the reported placeholders.
        let mut rebuilt = String::new();
        let mut cursor = 0;
        for r in &result.redactions {
            rebuilt.push_str(&text[cursor..r.start]);
            rebuilt.push_str(&r.placeholder);
            cursor = r.end;
        }
        rebuilt.push_str(&text[cursor..]);
        prop_assert_eq!(rebuilt, result.text);
    }

    #[test]
    fn email_is_never_forwarded(
        user in "[a-z]{3,8}",
        domain in "[a-z]{3,8}"
    ) {
        let email = format!("{user}@{domain}.com");
        let input = format!("Email {user} at {email}");
        let engine = PrivacyEngine::default();
        let result = engine.sanitize(&input).unwrap();
        prop_assert!(!result.text.contains(&email));
        prop_assert!(result.text.contains("[EMAIL_1]"));
    }

    #[test]
    fn sanitization_idempotent(text in document()) {
        let engine = PrivacyEngine::default();
        let first = engine.sanitize(&text).unwrap();
        let second = engine.sanitize(&first.text).unwrap();
        prop_assert_eq!(&first.text, &second.text);
    }
}
