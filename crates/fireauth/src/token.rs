//! Read-only view over a verified ID token's claims
//!
//! [`IdToken`] performs no validation of any kind. Signature, expiry, issuer
//! and audience checks belong to whatever produced the claim set.
//!
//! # Absent vs. wrong type
//!
//! The string and boolean accessors return `None` both when a claim is
//! missing and when it is present with a different JSON type. Callers that
//! need to tell the two apart can inspect [`IdToken::get`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A claim set: claim name to arbitrary JSON value, insertion ordered
pub type Claims = serde_json::Map<String, Value>;

/// Key under which custom tokens carry developer claims
pub const DEVELOPER_CLAIMS_KEY: &str = "claims";

/// Parsed, read-only ID token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdToken {
    claims: Claims,
}

impl IdToken {
    /// Wrap an already verified claim set
    pub fn new(claims: Claims) -> Self {
        Self { claims }
    }

    /// The `sub` claim, which identifies the user
    pub fn subject(&self) -> Option<&str> {
        self.string_claim("sub")
    }

    /// Alias for [`IdToken::subject`]
    pub fn uid(&self) -> Option<&str> {
        self.subject()
    }

    /// The `iss` claim
    pub fn issuer(&self) -> Option<&str> {
        self.string_claim("iss")
    }

    /// Display name
    pub fn name(&self) -> Option<&str> {
        self.string_claim("name")
    }

    /// Profile picture URL
    pub fn picture(&self) -> Option<&str> {
        self.string_claim("picture")
    }

    /// Email address
    pub fn email(&self) -> Option<&str> {
        self.string_claim("email")
    }

    /// Whether the provider verified the email address
    pub fn is_email_verified(&self) -> Option<bool> {
        self.claims.get("email_verified").and_then(Value::as_bool)
    }

    /// Developer claims nested under `claims`, as minted in a custom token
    pub fn developer_claims(&self) -> Option<&Claims> {
        self.claims
            .get(DEVELOPER_CLAIMS_KEY)
            .and_then(Value::as_object)
    }

    /// Any single claim, untyped
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }

    /// The full claim set, reserved and developer claims included
    pub fn raw_claims(&self) -> &Claims {
        &self.claims
    }

    /// Take the claim set back
    pub fn into_claims(self) -> Claims {
        self.claims
    }

    fn string_claim(&self, name: &str) -> Option<&str> {
        self.claims.get(name).and_then(Value::as_str)
    }
}

impl From<Claims> for IdToken {
    fn from(claims: Claims) -> Self {
        Self::new(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token(value: Value) -> IdToken {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_standard_accessors() {
        let t = token(json!({
            "sub": "user-1",
            "iss": "https://securetoken.google.com/myapp-dev",
            "name": "Ada",
            "picture": "https://example.com/ada.png",
            "email": "ada@example.com",
            "email_verified": true,
        }));

        assert_eq!(t.subject(), Some("user-1"));
        assert_eq!(t.uid(), Some("user-1"));
        assert_eq!(t.issuer(), Some("https://securetoken.google.com/myapp-dev"));
        assert_eq!(t.name(), Some("Ada"));
        assert_eq!(t.picture(), Some("https://example.com/ada.png"));
        assert_eq!(t.email(), Some("ada@example.com"));
        assert_eq!(t.is_email_verified(), Some(true));
    }

    #[test]
    fn test_absent_claims() {
        let t = token(json!({}));
        assert_eq!(t.subject(), None);
        assert_eq!(t.issuer(), None);
        assert_eq!(t.name(), None);
        assert_eq!(t.picture(), None);
        assert_eq!(t.email(), None);
        assert_eq!(t.is_email_verified(), None);
        assert!(t.developer_claims().is_none());
    }

    #[test]
    fn test_wrong_type_claims_read_as_absent() {
        let t = token(json!({
            "sub": 42,
            "name": ["Ada"],
            "picture": null,
            "email": 12345,
            "email_verified": "true",
            "claims": "not-an-object",
        }));
        assert_eq!(t.subject(), None);
        assert_eq!(t.name(), None);
        assert_eq!(t.picture(), None);
        assert_eq!(t.email(), None);
        assert_eq!(t.is_email_verified(), None);
        assert!(t.developer_claims().is_none());

        // still reachable through the raw view
        assert_eq!(t.get("email"), Some(&json!(12345)));
    }

    #[test]
    fn test_email_verified_false_is_present() {
        let t = token(json!({"email_verified": false}));
        assert_eq!(t.is_email_verified(), Some(false));
    }

    #[test]
    fn test_raw_claims_keep_everything() {
        let t = token(json!({
            "sub": "u",
            "firebase": {"sign_in_provider": "custom"},
            "claims": {"admin": true},
        }));
        let raw = t.raw_claims();
        assert_eq!(raw.len(), 3);
        assert_eq!(raw["firebase"]["sign_in_provider"], "custom");
        assert_eq!(t.developer_claims().unwrap()["admin"], json!(true));

        let back = t.clone().into_claims();
        assert_eq!(&back, raw);
    }

    #[test]
    fn test_serializes_transparently() {
        let t = token(json!({"sub": "u", "iss": "i"}));
        assert_eq!(
            serde_json::to_string(&t).unwrap(),
            r#"{"sub":"u","iss":"i"}"#
        );
    }
}
