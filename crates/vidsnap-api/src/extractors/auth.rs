//! `CurrentUser` extractor — decodes the identity token and injects the
//! authenticated user into handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use vidsnap_core::error::AppError;

use crate::auth::claims;
use crate::auth::claims::AuthenticatedUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user available in handlers.
///
/// Token sources, in order: the `x-amzn-oidc-data` header set by the
/// load balancer authorizer, then `Authorization: Bearer <jwt>`.
/// Decoded users are cached by raw token in the state's claims cache.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthenticatedUser);

impl std::ops::Deref for CurrentUser {
    type Target = AuthenticatedUser;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let (token, from_oidc) = extract_token(parts)?;

        if let Some(user) = state.claims_cache.get(&token).await {
            return Ok(CurrentUser(user));
        }

        let claims = if from_oidc {
            claims::decode_oidc_data(&token)?
        } else {
            claims::decode_token(&token)?
        };
        let user = AuthenticatedUser::from(claims);

        state.claims_cache.insert(token, user.clone()).await;
        Ok(CurrentUser(user))
    }
}

fn extract_token(parts: &Parts) -> Result<(String, bool), ApiError> {
    if let Some(oidc_data) = parts
        .headers
        .get("x-amzn-oidc-data")
        .and_then(|v| v.to_str().ok())
    {
        return Ok((oidc_data.to_string(), true));
    }

    let auth_header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing authentication token"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

    Ok((token.to_string(), false))
}
