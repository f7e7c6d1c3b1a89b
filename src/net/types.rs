//! Wire DTOs for the `/api/auth` endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. `UserProfile` is also the
//! exact shape persisted under the `user` storage key.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Login request body for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration request body for `POST /auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Profile of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserProfile {
    /// `"First Last"`, or the email when both names are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.email.clone() } else { full.to_owned() }
    }
}

/// Successful response of both login and register.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl AuthResponse {
    /// Split into the bearer token and the profile kept alongside it.
    pub fn into_parts(self) -> (String, UserProfile) {
        let profile = UserProfile {
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
        };
        (self.token, profile)
    }
}

/// Error body shape returned by the backend on failures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
