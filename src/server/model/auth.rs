//! Roles and token claims.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Role granted to the bearer of a token.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "Admin"),
            Self::User => write!(f, "User"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("admin") {
            Ok(Self::Admin)
        } else if s.eq_ignore_ascii_case("user") {
            Ok(Self::User)
        } else {
            Err(format!("unknown role '{}', expected Admin or User", s))
        }
    }
}

/// Claims carried by a bearer token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject the token was issued to.
    pub sub: String,
    pub roles: Vec<Role>,
    pub iss: String,
    /// Issued at, Unix seconds.
    pub iat: i64,
    /// Expiration, Unix seconds.
    pub exp: i64,
}

impl Claims {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}
