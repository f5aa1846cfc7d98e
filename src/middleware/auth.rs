//! Authentication middleware for state-changing routes
//!
//! Validates HTTP Basic credentials against a static operator table.
//! Returns 401 with a Basic challenge if the header is missing, does
//! not parse, or does not match a registered operator.

use std::collections::HashMap;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::AppError;
use crate::state::AppState;

/// Static operator -> password table.
///
/// Parsed once at startup from a base64-encoded JSON object. Every
/// parse failure collapses to an empty table, so a misconfigured
/// secret rejects all requests instead of crashing or letting any
/// through.
#[derive(Clone, Debug, Default)]
pub struct CredentialTable {
    operators: HashMap<String, String>,
}

impl CredentialTable {
    pub fn from_secret(secret: Option<&str>) -> Self {
        let operators = secret
            .and_then(|s| BASE64.decode(s).ok())
            .and_then(|raw| serde_json::from_slice::<HashMap<String, String>>(&raw).ok())
            .unwrap_or_default();

        Self { operators }
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Exact, case-sensitive match against the stored password.
    /// Passwords travel in the clear; TLS termination is assumed.
    pub fn authorize(&self, username: &str, password: &str) -> bool {
        self.operators.get(username).map(String::as_str) == Some(password)
    }
}

/// Auth middleware guarding the push and status routes.
///
/// The wrapped handler never runs unless the gate passes.
pub async fn require_auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (username, password) = match extract_basic_credentials(&req) {
        Some(c) => c,
        None => {
            return AppError::Unauthorized("missing credentials".to_string()).into_response();
        }
    };

    if !state.credentials.authorize(&username, &password) {
        return AppError::Unauthorized("credential mismatch".to_string()).into_response();
    }

    next.run(req).await
}

/// Extract (username, password) from an `Authorization: Basic` header
fn extract_basic_credentials(req: &Request) -> Option<(String, String)> {
    let auth_header = req.headers().get(AUTHORIZATION)?;
    let auth_str = auth_header.to_str().ok()?;
    let encoded = auth_str.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_table(json: &str) -> String {
        BASE64.encode(json)
    }

    #[test]
    fn test_table_from_valid_secret() {
        let secret = encode_table(r#"{"hurley": "4815162342", "libby": "hatch"}"#);
        let table = CredentialTable::from_secret(Some(&secret));

        assert!(!table.is_empty());
        assert!(table.authorize("hurley", "4815162342"));
        assert!(table.authorize("libby", "hatch"));
    }

    #[test]
    fn test_rejects_wrong_password_and_unknown_user() {
        let secret = encode_table(r#"{"hurley": "4815162342"}"#);
        let table = CredentialTable::from_secret(Some(&secret));

        assert!(!table.authorize("hurley", "4815162343"));
        assert!(!table.authorize("hurley", "4815162342 "));
        assert!(!table.authorize("Hurley", "4815162342"));
        assert!(!table.authorize("ben", "4815162342"));
    }

    #[test]
    fn test_missing_secret_rejects_everyone() {
        let table = CredentialTable::from_secret(None);
        assert!(table.is_empty());
        assert!(!table.authorize("hurley", "4815162342"));
    }

    #[test]
    fn test_malformed_base64_rejects_everyone() {
        let table = CredentialTable::from_secret(Some("not base64 at all!!!"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_malformed_json_rejects_everyone() {
        let secret = encode_table("{\"hurley\": ");
        let table = CredentialTable::from_secret(Some(&secret));
        assert!(table.is_empty());

        // Valid JSON of the wrong shape is just as dead
        let secret = encode_table(r#"["hurley", "4815162342"]"#);
        let table = CredentialTable::from_secret(Some(&secret));
        assert!(table.is_empty());
    }

    #[test]
    fn test_password_containing_colon() {
        let secret = encode_table(r#"{"hurley": "a:b:c"}"#);
        let table = CredentialTable::from_secret(Some(&secret));
        assert!(table.authorize("hurley", "a:b:c"));
    }
}
