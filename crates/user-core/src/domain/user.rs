//! User domain entity

use serde::{Deserialize, Serialize};

fn default_active() -> bool {
    true
}

/// A persisted user record. Field names are the on-disk JSON keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Payload for create and full-replace update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl User {
    /// Builds a record from an input, every field taken wholesale.
    pub fn from_input(id: i64, input: UserInput) -> Self {
        Self {
            id,
            username: input.username,
            email: input.email,
            full_name: input.full_name,
            phone: input.phone,
            is_active: input.is_active,
        }
    }

    /// Text after the last `@`, or the whole address when there is none.
    pub fn email_domain(&self) -> &str {
        self.email.rsplit('@').next().unwrap_or(&self.email)
    }
}

impl UserInput {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            full_name: None,
            phone: None,
            is_active: true,
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// One page of a (possibly filtered) listing. `total` counts the filtered set before slicing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPage {
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
    pub users: Vec<User>,
}
