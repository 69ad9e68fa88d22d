//! Submission Workflow Integration Tests
//!
//! Host-shaped form JSON through the validator and back.

use std::collections::HashMap;

use super::common::fixtures::{Harness, GRAPH_MISSING_ALIAS, GRAPH_PAGE};
use social_fields_core::{Form, NoConditionalLogic, Submission, ValidationResult};

const FORM_JSON: &str = r#"{
    "id": 12,
    "fields": [
        {"id": 1, "label": "Name", "cssClass": "gf_left_half", "pageNumber": 1},
        {"id": 2, "label": "Twitter", "cssClass": "validate-twitter", "pageNumber": 1},
        {"id": 3, "label": "Facebook", "cssClass": "gf_right_half validate-facebook", "pageNumber": 1},
        {"id": 4, "label": "Backup Twitter", "cssClass": "validate-twitter", "pageNumber": 2}
    ]
}"#;

fn posted(pairs: &[(&str, &str)]) -> Submission {
    let values: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Submission::from_posted(values)
}

/// Test: Full submission with one bad profile, then resubmission with a fix
#[test]
fn test_resubmission_workflow() {
    let h = Harness::new();
    let validator = h.validator();
    h.twitter("jack", 200);
    h.graph("doesnotexist123456", 404, GRAPH_MISSING_ALIAS);
    h.graph("acme", 200, GRAPH_PAGE);

    let form: Form = serde_json::from_str(FORM_JSON).unwrap();

    // First attempt: facebook account does not exist
    let first = posted(&[
        ("input_1", "Jack"),
        ("input_2", "@jack"),
        ("input_3", "https://www.facebook.com/doesnotexist123456"),
        ("input_4", "not valid at all"),
        ("gform_source_page_number_12", "1"),
    ]);
    let result =
        validator.validate_submission(ValidationResult::new(form.clone()), &first, &NoConditionalLogic);

    assert!(!result.is_valid);
    let failed: Vec<u32> = result.failed_fields().iter().map(|f| f.id).collect();
    assert_eq!(failed, vec![3]);

    // Result goes back to the host as JSON
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["is_valid"], false);
    assert_eq!(json["form"]["fields"][2]["failed_validation"], true);
    assert_eq!(json["form"]["fields"][2]["cssClass"], "gf_right_half validate-facebook");

    // Second attempt with a real page; twitter probe is served from cache
    let second = posted(&[
        ("input_2", "@jack"),
        ("input_3", "https://www.facebook.com/acme/"),
        ("gform_source_page_number_12", "1"),
    ]);
    let result =
        validator.validate_submission(ValidationResult::new(form), &second, &NoConditionalLogic);

    assert!(result.is_valid);
    assert_eq!(h.client.request_count(), 3);
}

/// Test: Outage on both services never blocks a submission
#[test]
fn test_outage_fails_open() {
    let h = Harness::new();
    let validator = h.validator();
    h.client.fail("https://twitter.com/jack", "dns error");
    h.client
        .fail("https://graph.facebook.com/acme", "tls handshake failed");

    let form: Form = serde_json::from_str(FORM_JSON).unwrap();
    let submission = posted(&[("input_2", "jack"), ("input_3", "acme")]);

    for _ in 0..3 {
        let result = validator.validate_submission(
            ValidationResult::new(form.clone()),
            &submission,
            &NoConditionalLogic,
        );
        assert!(result.is_valid);
    }

    // Each failing endpoint was tried once, then served from the negative cache
    assert_eq!(h.client.request_count(), 2);
}
