#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Round-trip tests for the visibility-scoped profile model.
//!
//! Wire contract:
//! - The four scope keys are always emitted, even when empty.
//! - The identifier travels under `username` only when requested, and is
//!   never read back from the body.

use basalt_sdk::{Profile, Visibility};
use serde_json::json;

fn sample_profile() -> Profile {
    let mut profile = Profile::new("bob");
    profile
        .scope_mut(Visibility::Private)
        .insert("email".to_owned(), json!("bob@example.com"));
    profile
        .scope_mut(Visibility::Friends)
        .insert("nickname".to_owned(), json!("bobby"));
    profile
        .scope_mut(Visibility::Public)
        .insert("joined".to_owned(), json!(2014));
    profile
}

#[test]
fn encode_then_decode_reproduces_the_profile() {
    let original = sample_profile();
    let encoded = original.to_json(true);
    let decoded = Profile::from_json("bob", encoded.as_object().unwrap()).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn round_trip_keeps_untouched_scopes_empty() {
    let original = sample_profile();
    let encoded = original.to_json(true);
    let decoded = Profile::from_json("bob", encoded.as_object().unwrap()).unwrap();
    assert!(decoded.scope(Visibility::Registered).is_empty());
}

#[test]
fn round_trip_without_credentials_still_carries_all_scopes() {
    let original = sample_profile();
    let encoded = original.to_json(false);
    let body = encoded.as_object().unwrap();
    assert_eq!(body.len(), 4);
    let decoded = Profile::from_json("bob", body).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn decoded_backend_payload_matches_the_field_visibility_model() {
    // Shape of a user body as the backend returns it.
    let body = json!({
        "username": "alice",
        "visibleByTheUser": { "email": "alice@example.com" },
        "visibleByFriends": {},
        "visibleByRegisteredUsers": { "city": "Rome" },
        "visibleByAnonymousUsers": {}
    });
    let profile = Profile::from_json("alice", body.as_object().unwrap()).unwrap();
    assert_eq!(profile.username(), "alice");
    assert_eq!(
        profile.scope(Visibility::Registered).get("city"),
        Some(&json!("Rome"))
    );
    assert!(profile.scope(Visibility::Friends).is_empty());
}
