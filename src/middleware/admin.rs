use axum::Json;
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, StatusCode, request::Parts};
use axum::response::{IntoResponse, Response};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::config::Config;
use crate::router::ContentState;
use crate::types::content::OkMessage;

/// Secrets that grant admin access to the content routes. Empty values count
/// as unset.
#[derive(Debug, Clone, Default)]
pub struct AdminAuth {
    jwt_secret: Option<String>,
    password: Option<String>,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AdminClaims {
    #[serde(default)]
    role: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

impl AdminAuth {
    pub fn new(
        jwt_secret: Option<String>,
        password: Option<String>,
        token: Option<String>,
    ) -> Self {
        Self {
            jwt_secret: non_empty(&jwt_secret),
            password: non_empty(&password),
            token: non_empty(&token),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            cfg.admin_jwt_secret.clone(),
            cfg.admin_password.clone(),
            cfg.admin_token.clone(),
        )
    }

    /// Admin when either:
    /// - `Authorization: Bearer <jwt>` is HMAC-signed with the secret and has `role = "admin"`
    /// - `x-admin-token` equals the admin password or the admin token
    pub fn is_admin(&self, headers: &HeaderMap) -> bool {
        if let Some(auth) = headers.get("authorization").and_then(|v| v.to_str().ok())
            && let Some(token) = auth.strip_prefix("Bearer ")
            && self.bearer_is_admin(token)
        {
            return true;
        }

        let Some(given) = headers.get("x-admin-token").and_then(|v| v.to_str().ok()) else {
            return false;
        };
        [&self.password, &self.token]
            .into_iter()
            .flatten()
            .any(|expected| bool::from(given.as_bytes().ct_eq(expected.as_bytes())))
    }

    fn bearer_is_admin(&self, token: &str) -> bool {
        let Some(secret) = self.jwt_secret.as_ref() else {
            return false;
        };
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        // `exp` is checked when present but not required; `aud` is not checked.
        validation.required_spec_claims.clear();
        validation.validate_aud = false;

        match jsonwebtoken::decode::<AdminClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        ) {
            Ok(data) => data.claims.role.as_deref() == Some("admin"),
            Err(e) => {
                debug!(error = %e, "admin bearer token rejected");
                false
            }
        }
    }
}

/// Extractor guarding admin routes; rejects with 403 `{"ok":false,"msg":"forbidden"}`.
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl FromRequestParts<ContentState> for RequireAdmin {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ContentState,
    ) -> Result<Self, Self::Rejection> {
        if state.admin.is_admin(&parts.headers) {
            Ok(Self)
        } else {
            Err((StatusCode::FORBIDDEN, Json(OkMessage::failed("forbidden"))).into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use jsonwebtoken::{EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct Claims<'a> {
        role: &'a str,
    }

    fn sign(role: &str, secret: &str) -> String {
        jsonwebtoken::encode(
            &Header::default(),
            &Claims { role },
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("sign token")
    }

    fn headers(name: &'static str, value: &str) -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(name, HeaderValue::from_str(value).expect("header value"));
        h
    }

    #[test]
    fn bearer_token_needs_admin_role_and_right_secret() {
        let auth = AdminAuth::new(Some("s3cret".into()), None, None);

        let good = format!("Bearer {}", sign("admin", "s3cret"));
        assert!(auth.is_admin(&headers("authorization", &good)));

        let wrong_role = format!("Bearer {}", sign("editor", "s3cret"));
        assert!(!auth.is_admin(&headers("authorization", &wrong_role)));

        let wrong_secret = format!("Bearer {}", sign("admin", "other"));
        assert!(!auth.is_admin(&headers("authorization", &wrong_secret)));

        assert!(!auth.is_admin(&headers("authorization", "Bearer not-a-jwt")));
    }

    #[test]
    fn bearer_token_is_refused_without_a_configured_secret() {
        let auth = AdminAuth::new(None, None, None);
        let token = format!("Bearer {}", sign("admin", ""));
        assert!(!auth.is_admin(&headers("authorization", &token)));
    }

    #[test]
    fn header_token_matches_password_or_token() {
        let auth = AdminAuth::new(None, Some("pw".into()), Some("tok".into()));
        assert!(auth.is_admin(&headers("x-admin-token", "pw")));
        assert!(auth.is_admin(&headers("x-admin-token", "tok")));
        assert!(!auth.is_admin(&headers("x-admin-token", "nope")));
        assert!(!auth.is_admin(&HeaderMap::new()));
    }

    #[test]
    fn empty_secrets_never_match() {
        let auth = AdminAuth::new(Some(String::new()), Some(String::new()), None);
        assert!(!auth.is_admin(&headers("x-admin-token", "")));
    }
}
