use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A row of the user directory table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub last_login: NaiveDate,
}

impl User {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        last_login: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: "User".to_string(),
            status: "Active".to_string(),
            last_login,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Case-insensitive match against name, email or role
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        [&self.name, &self.email, &self.role]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
