//! Shared fixtures for integration tests

#![allow(dead_code)]

use fireauth::{Claims, FIREBASE_AUDIENCE};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, TokenData, Validation, decode};

/// PKCS#8 RSA private key also embedded in the service account fixture
pub const PRIVATE_KEY_PEM: &str = include_str!("../fixtures/private_key.pem");

/// Public half of [`PRIVATE_KEY_PEM`]
pub const PUBLIC_KEY_PEM: &str = include_str!("../fixtures/public_key.pem");

/// Path to the service account key file fixture
pub const SERVICE_ACCOUNT_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/service-account-appengine.json"
);

/// Client email in the service account fixture
pub const SERVICE_ACCOUNT_EMAIL: &str = "myapp-dev@appspot.gserviceaccount.com";

/// Fixed issuance instant used across tests
pub const NOW: i64 = 1_700_000_000;

pub fn signing_key() -> EncodingKey {
    EncodingKey::from_rsa_pem(PRIVATE_KEY_PEM.as_bytes()).expect("fixture private key")
}

/// Verify `token` with the fixture public key and return its header and payload
///
/// Expiry is not checked because tests issue tokens on a frozen clock.
pub fn decode_custom_token(token: &str, issuer: &str) -> TokenData<Claims> {
    let key = DecodingKey::from_rsa_pem(PUBLIC_KEY_PEM.as_bytes()).expect("fixture public key");
    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[FIREBASE_AUDIENCE]);
    validation.set_issuer(&[issuer]);
    validation.validate_exp = false;
    decode::<Claims>(token, &key, &validation).expect("token should verify")
}

/// Build a claim set from a JSON object literal
pub fn claims(value: serde_json::Value) -> Claims {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("not a JSON object: {other}"),
    }
}
