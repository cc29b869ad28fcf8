use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::error::{auth::AuthError, AppError};

const BEARER_PREFIX: &str = "Bearer ";

pub enum Permission {
    Admin,
}

/// Bearer token gate for admin endpoints.
///
/// The request's `Authorization: Bearer <token>` header is compared against the
/// configured admin token. Token issuance and rotation happen elsewhere.
pub struct AuthGuard<'a> {
    admin_token: &'a str,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(admin_token: &'a str, headers: &'a HeaderMap) -> Self {
        Self {
            admin_token,
            headers,
        }
    }

    /// Checks the request against every listed permission.
    ///
    /// # Returns
    /// - `Ok(())`: All permissions granted
    /// - `Err(AuthError::MissingCredentials)`: No `Authorization` header (401)
    /// - `Err(AuthError::MalformedCredentials)`: Header is not a non-empty bearer token (401)
    /// - `Err(AuthError::AccessDenied)`: Token does not match the admin token (403)
    pub fn require(&self, permissions: &[Permission]) -> Result<(), AppError> {
        for permission in permissions {
            match permission {
                Permission::Admin => {
                    let token = self.bearer_token()?;
                    if token != self.admin_token {
                        return Err(AuthError::AccessDenied(
                            "Bearer token does not match the admin token".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(())
    }

    fn bearer_token(&self) -> Result<&'a str, AuthError> {
        let Some(value) = self.headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingCredentials);
        };

        let value = value.to_str().map_err(|_| {
            AuthError::MalformedCredentials("header is not visible ASCII".to_string())
        })?;

        let Some(token) = value.strip_prefix(BEARER_PREFIX) else {
            return Err(AuthError::MalformedCredentials(
                "expected the Bearer scheme".to_string(),
            ));
        };

        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::MalformedCredentials("empty token".to_string()));
        }

        Ok(token)
    }
}
