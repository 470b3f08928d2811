//! User entity - an account that can upload and like images

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Handle shown in galleries: the username lowercased with spaces removed
    pub fn handle(&self) -> String {
        self.username
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase()
    }
}
