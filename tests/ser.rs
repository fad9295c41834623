//! Exercises the optional `ser` feature: an [`zxcvbn::Entropy`] result must
//! round-trip through `serde_json` for hosts that serialize it straight to
//! an API response.

#![cfg(feature = "ser")]

use zxcvbn::zxcvbn;

#[test]
fn entropy_serializes_to_json() {
    let entropy = zxcvbn("Tr0ub4dor&3", &["alice"]).unwrap();
    let json = serde_json::to_string(&entropy).expect("Entropy should serialize");
    assert!(json.contains("\"score\""));
    assert!(json.contains("\"guesses\""));
    assert!(json.contains("\"sequence\""));
    // calculation_time is intentionally skipped (spec.md §6: excluded from
    // the determinism contract).
    assert!(!json.contains("calculation_time"));
}

#[test]
fn feedback_suggestions_serialize_as_an_array() {
    let entropy = zxcvbn("password", &[]).unwrap();
    let json = serde_json::to_value(entropy.feedback()).expect("Feedback should serialize");
    assert!(json["suggestions"].is_array());
}
