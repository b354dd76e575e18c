//! Token claims decoding.
//!
//! Tokens arrive pre-verified by the fronting load balancer authorizer,
//! so only the claims are decoded here; signatures are not checked.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

use vidsnap_core::error::AppError;
use vidsnap_core::result::AppResult;

/// Claims carried by the identity token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Token subject, the opaque user id.
    pub sub: String,
    /// Phone number in E.164 format, if registered.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// E-mail address, if registered.
    #[serde(default)]
    pub email: Option<String>,
    /// Display username.
    #[serde(rename = "cognito:username", default)]
    pub username: Option<String>,
}

/// The authenticated caller, derived from decoded claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Opaque user id (the token subject).
    pub id: String,
    /// Display username, falls back to the subject.
    pub username: String,
    /// E-mail address, if present in the claims.
    pub email: Option<String>,
    /// Phone number, if present in the claims.
    pub phone_number: Option<String>,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        let username = claims.username.unwrap_or_else(|| claims.sub.clone());
        Self {
            id: claims.sub,
            username,
            email: claims.email,
            phone_number: claims.phone_number,
        }
    }
}

/// Decode claims from the payload segment of a JWT without verifying
/// the signature.
pub fn decode_token(token: &str) -> AppResult<Claims> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| AppError::unauthorized("Malformed token"))?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| AppError::unauthorized("Token payload is not valid base64"))?;
    let claims: Claims = serde_json::from_slice(&bytes)
        .map_err(|_| AppError::unauthorized("Token payload is not valid claims JSON"))?;
    if claims.sub.is_empty() {
        return Err(AppError::unauthorized("Token has no subject"));
    }
    Ok(claims)
}

/// Decode claims from the `x-amzn-oidc-data` header value.
///
/// The authorizer forwards either a JWT or plain base64 JSON claims.
pub fn decode_oidc_data(value: &str) -> AppResult<Claims> {
    if value.contains('.') {
        return decode_token(value);
    }
    let bytes = STANDARD
        .decode(value)
        .or_else(|_| URL_SAFE_NO_PAD.decode(value))
        .map_err(|_| AppError::unauthorized("OIDC data is not valid base64"))?;
    let claims: Claims = serde_json::from_slice(&bytes)
        .map_err(|_| AppError::unauthorized("OIDC data is not valid claims JSON"))?;
    if claims.sub.is_empty() {
        return Err(AppError::unauthorized("Token has no subject"));
    }
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_jwt(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#);
        let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(payload).unwrap());
        format!("{header}.{body}.sig")
    }

    #[test]
    fn decodes_jwt_payload_without_verification() {
        let token = encode_jwt(&serde_json::json!({
            "sub": "user-1",
            "phone_number": "+15550000001",
            "cognito:username": "alice",
        }));
        let claims = decode_token(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.phone_number.as_deref(), Some("+15550000001"));
        assert_eq!(claims.username.as_deref(), Some("alice"));
    }

    #[test]
    fn rejects_token_without_payload_segment() {
        assert!(decode_token("garbage").is_err());
    }

    #[test]
    fn rejects_empty_subject() {
        let token = encode_jwt(&serde_json::json!({ "sub": "" }));
        assert!(decode_token(&token).is_err());
    }

    #[test]
    fn decodes_plain_base64_oidc_data() {
        let value = STANDARD.encode(br#"{"sub":"user-2","email":"u2@example.com"}"#);
        let claims = decode_oidc_data(&value).unwrap();
        assert_eq!(claims.sub, "user-2");
        assert_eq!(claims.email.as_deref(), Some("u2@example.com"));
    }

    #[test]
    fn username_falls_back_to_subject() {
        let user: AuthenticatedUser = Claims {
            sub: "user-3".to_string(),
            phone_number: None,
            email: None,
            username: None,
        }
        .into();
        assert_eq!(user.username, "user-3");
    }
}
