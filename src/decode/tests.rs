//! Tests for the page decoder module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_decode_well_formed_page() {
    let payload = json!({
        "more": true,
        "response": [
            { "id": "1v", "flags": { "hd": true } },
            { "id": "2v", "flags": { "hd": false } }
        ]
    });

    let page = decode_page(&payload).unwrap();
    assert!(page.more);
    assert_eq!(page.len(), 2);
    assert_eq!(page.response[0].id, "1v");
    assert_eq!(page.response[0].flags.hd, Some(true));
    assert_eq!(page.response[1].flags.hd, Some(false));
}

#[test]
fn test_decode_preserves_server_order() {
    let payload = json!({
        "more": false,
        "response": [
            { "id": "z", "flags": { "hd": true } },
            { "id": "a", "flags": { "hd": true } },
            { "id": "m", "flags": { "hd": true } }
        ]
    });

    let page = decode_page(&payload).unwrap();
    let ids: Vec<&str> = page.response.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["z", "a", "m"]);
}

#[test]
fn test_decode_empty_page() {
    let payload = json!({ "more": false, "response": [] });

    let page = decode_page(&payload).unwrap();
    assert!(!page.more);
    assert!(page.is_empty());
}

#[test]
fn test_decode_rejects_non_object_payload() {
    for payload in [json!([]), json!("nope"), json!(42), json!(null)] {
        let err = decode_page(&payload).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }), "payload: {payload}");
    }
}

#[test]
fn test_decode_rejects_empty_object() {
    // The empty object is what the legacy transport substituted on failure;
    // here it is just another malformed page.
    let err = decode_page(&json!({})).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn test_decode_requires_both_envelope_fields() {
    let err = decode_page(&json!({ "response": [] })).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));

    let err = decode_page(&json!({ "more": true })).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn test_decode_rejects_malformed_item() {
    // An item without an id cannot be represented
    let payload = json!({
        "more": false,
        "response": [ { "flags": { "hd": true } } ]
    });

    let err = decode_page(&payload).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn test_decode_item_without_hd_flag_is_not_a_decode_error() {
    // Missing hd only fails later, at filter time
    let payload = json!({
        "more": false,
        "response": [ { "id": "1v", "flags": {} } ]
    });

    let page = decode_page(&payload).unwrap();
    assert_eq!(page.response[0].flags.hd, None);
}
