use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::{Claims, Role},
    service::token::TokenService,
};

pub enum Permission {
    /// Read access, granted to `Admin` and `User`.
    View,
    /// Write access, granted to `Admin` only.
    Admin,
}

pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    /// Validates the request's bearer token and checks every permission against its roles.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid and grants all `permissions`
    /// - `Err(AuthError::MissingToken)` - No bearer token on the request
    /// - `Err(AuthError::InvalidToken)` - Token failed validation
    /// - `Err(AuthError::AccessDenied)` - Token lacks a required role
    pub fn require(&self, permissions: &[Permission]) -> Result<Claims, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;

        let claims = self.tokens.validate(token)?;

        for permission in permissions {
            match permission {
                Permission::View => {
                    if !(claims.has_role(Role::Admin) || claims.has_role(Role::User)) {
                        return Err(AuthError::AccessDenied {
                            subject: claims.sub.clone(),
                            reason: "viewing advertisements requires the Admin or User role"
                                .to_string(),
                        }
                        .into());
                    }
                }
                Permission::Admin => {
                    if !claims.has_role(Role::Admin) {
                        return Err(AuthError::AccessDenied {
                            subject: claims.sub.clone(),
                            reason: "modifying advertisements requires the Admin role"
                                .to_string(),
                        }
                        .into());
                    }
                }
            }
        }

        Ok(claims)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
