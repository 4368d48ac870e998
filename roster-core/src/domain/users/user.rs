//! User records and their create/update payloads.
//!
//! A [`User`] is the single entity Roster manages: contact details plus an
//! optional uploaded picture. The picture is stored outside the database;
//! `image` only carries the stored file name, and nothing here guarantees
//! the file still exists on disk. Handlers delete old files best-effort
//! after the record mutation succeeds, so a dangling `image` reference is
//! an accepted state, not an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, RosterError};

/// A stored user record.
///
/// # Fields
///
/// * `id` - Unique identifier, assigned by the repository on creation
/// * `name` - Display name, required
/// * `email` - Contact email, required
/// * `phone` - Contact phone, required
/// * `image` - Stored file name of the uploaded picture, if any
/// * `created_at` - Timestamp of record creation
/// * `updated_at` - Timestamp of the last update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Stored file name of the uploaded picture, if any
    pub image: Option<String>,
    /// Timestamp of record creation
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Stored file name of an already-saved upload, if one accompanied
    /// the submission.
    pub image: Option<String>,
}

impl UserDraft {
    /// Ensure required fields are present before the row is written.
    pub fn validate(&self) -> Result<()> {
        validate_required(&self.name, &self.email, &self.phone)
    }
}

/// Payload for updating a user record.
///
/// `image` carries the final merged value: the new stored file name when a
/// fresh upload replaced the old one, or the prior file name unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserChanges {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub image: Option<String>,
}

impl UserChanges {
    pub fn validate(&self) -> Result<()> {
        validate_required(&self.name, &self.email, &self.phone)
    }
}

fn validate_required(name: &str, email: &str, phone: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(RosterError::Validation("name is required".to_string()));
    }
    if email.trim().is_empty() {
        return Err(RosterError::Validation("email is required".to_string()));
    }
    if phone.trim().is_empty() {
        return Err(RosterError::Validation("phone is required".to_string()));
    }
    Ok(())
}
