use axum_helpers::extractors::form_value;
use chrono::{DateTime, Utc};
use record_store::Record;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{REQUIRED_FIELDS, UserError, UserResult};

/// User roles
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// User entity as stored in memory and returned over the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque identifier, assigned at creation
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a user
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(
        required(message = "Username and email are required"),
        length(min = 1, message = "Username and email are required")
    )]
    pub username: Option<String>,
    #[validate(
        required(message = "Username and email are required"),
        length(min = 1, message = "Username and email are required")
    )]
    pub email: Option<String>,
    /// Defaults to `user`; an empty string counts as omitted
    #[serde(
        default,
        deserialize_with = "form_value::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<Role>,
}

/// Validated fields for a new user
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl CreateUser {
    pub fn into_new(self) -> UserResult<NewUser> {
        self.validate()?;

        let missing = || UserError::InvalidInput(REQUIRED_FIELDS.to_string());
        Ok(NewUser {
            username: self.username.ok_or_else(missing)?,
            email: self.email.ok_or_else(missing)?,
            role: self.role.unwrap_or_default(),
        })
    }
}

/// Partial user update; omitted fields and empty strings keep their value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "form_value::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<Role>,
}

impl Record for User {
    type Draft = NewUser;
    type Patch = UpdateUser;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: NewUser) -> Self {
        Self {
            id,
            username: draft.username,
            email: draft.email,
            role: draft.role,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: UpdateUser) {
        if let Some(username) = patch.username.filter(|s| !s.is_empty()) {
            self.username = username;
        }
        if let Some(email) = patch.email.filter(|s| !s.is_empty()) {
            self.email = email;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
    }
}

/// Envelope returned by the listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    pub message: String,
    pub users: Vec<User>,
    pub total: usize,
}

/// Envelope returned by single-user endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub message: String,
    pub user: User,
}
