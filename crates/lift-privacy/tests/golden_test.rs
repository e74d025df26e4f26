//! Golden dataset tests for lift-privacy.
//!
//! Loads the PII golden file, runs sanitization, and verifies output
//! matches expected results exactly.

use lift_core::traits::ISanitizer;
use lift_privacy::PrivacyEngine;
use test_fixtures::load_fixture_value;

#[test]
fn golden_pii_samples() {
    let fixture = load_fixture_value("golden/privacy/pii_samples.json");
    let engine = PrivacyEngine::default();
    let samples = fixture["input"]["samples"].as_array().unwrap();
    assert!(!samples.is_empty());

    for sample in samples {
        let id = sample["id"].as_str().unwrap_or("?");
        let text = sample["text"].as_str().unwrap();

        let result = engine.sanitize(text).unwrap();

        if let Some(expected_output) = sample["expected_output"].as_str() {
            assert_eq!(result.text, expected_output, "Sample '{}': output mismatch", id);
        }

        if let Some(forbidden) = sample["must_not_contain"].as_array() {
            for value in forbidden {
                let value = value.as_str().unwrap();
                assert!(
                    !result.text.contains(value),
                    "Sample '{}': '{}' leaked into {}",
                    id,
                    value,
                    result.text
                );
            }
        }
    }
}
