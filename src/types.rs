//! User payloads and response shapes for the GoRest user resource.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender value accepted by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Wire value, as it appears in JSON bodies and GraphQL literals.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account status value accepted by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    /// Wire value, as it appears in JSON bodies and GraphQL literals.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload for creating a user (`POST /users`, `createUser` mutation).
///
/// The email must be unique on the server side; scenarios derive it from a
/// template address via [`crate::testdata::uniquify_email`].
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub gender: Gender,
    pub email: String,
    pub status: UserStatus,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        gender: Gender,
        email: impl Into<String>,
        status: UserStatus,
    ) -> Self {
        Self {
            name: name.into(),
            gender,
            email: email.into(),
            status,
        }
    }
}

/// A user as returned by the REST API.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub status: UserStatus,
}
