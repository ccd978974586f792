//! User Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity
///
/// The record minted by the authentication surface. Stored as the
/// session payload and used as the scope discriminator for
/// cart/favorites namespacing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    /// Display name
    pub name: String,
    pub created_at: DateTime<Utc>,
}
