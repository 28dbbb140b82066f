use crate::error::{CrmError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type ContactId = i64;

/// A validated contact entry.
///
/// Fields are private so a `Contact` can only come out of [`Contact::new`]
/// (or deserialization, which goes through the same checks): the id is
/// positive and both name and email are non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawContact")]
pub struct Contact {
    #[serde(rename = "ID")]
    id: ContactId,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Email")]
    email: String,
}

impl Contact {
    pub fn new(id: ContactId, name: &str, email: &str) -> Result<Self> {
        if id <= 0 {
            return Err(CrmError::Validation(format!(
                "ID must be positive (got {})",
                id
            )));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(CrmError::Validation("name is required".to_string()));
        }
        let email = email.trim();
        if email.is_empty() {
            return Err(CrmError::Validation("email is required".to_string()));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    /// Partial update: a blank argument keeps the current value.
    pub fn update(&mut self, name: &str, email: &str) {
        let name = name.trim();
        if !name.is_empty() {
            self.name = name.to_string();
        }
        let email = email.trim();
        if !email.is_empty() {
            self.email = email.to_string();
        }
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID:{} | Name:{} | Email:{}", self.id, self.name, self.email)
    }
}

/// Wire shape of a contact, before validation.
#[derive(Deserialize)]
struct RawContact {
    #[serde(rename = "ID")]
    id: ContactId,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Email")]
    email: String,
}

impl TryFrom<RawContact> for Contact {
    type Error = CrmError;

    fn try_from(raw: RawContact) -> Result<Self> {
        Contact::new(raw.id, &raw.name, &raw.email)
    }
}
