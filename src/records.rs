//! Record shapes stored in `initiatives.json` and `users.json`, plus the organizer
//! assignment body.
//!
//! Named fields hold whatever JSON value was stored or sent, so a record with an
//! odd field (a numeric organizer, a null role) still loads and saves unchanged.
//! An absent field is `None`; an explicit `null` is `Some(Value::Null)`.
//! Fields the structs don't name are kept in `extra` and written back verbatim.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Role given to every newly registered user.
pub const ROLE_VOLUNTEER: &str = "volunteer";
/// Role that makes a user show up in the organizer listing. Only set by hand.
pub const ROLE_ORGANIZER: &str = "organizer";

/// A volunteering initiative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Initiative {
    /// Caller-supplied; neither uniqueness nor type is checked.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub provider: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub start: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub end: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub organizer: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Initiative {
    /// `true` when name, provider, start and end are all set and non-empty.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.provider, &self.start, &self.end]
            .into_iter()
            .all(truthy)
    }

    /// `true` when the stored id is a JSON number equal to `id`.
    pub fn has_id(&self, id: i64) -> bool {
        match &self.id {
            Some(Value::Number(n)) => n.as_i64() == Some(id) || n.as_f64() == Some(id as f64),
            _ => false,
        }
    }

    /// The organizer, if it is a string.
    pub fn organizer_name(&self) -> Option<&str> {
        self.organizer.as_ref().and_then(Value::as_str)
    }

    /// Case-insensitive organizer match. A missing or non-string organizer never
    /// matches.
    pub fn organized_by(&self, name: &str) -> bool {
        self.organizer_name()
            .is_some_and(|o| o.to_lowercase() == name.to_lowercase())
    }
}

/// A registered user. Passwords are stored as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub password: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub role: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// `true` when name, email, password and birthday are all set and non-empty.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.password, &self.birthday]
            .into_iter()
            .all(truthy)
    }

    /// The email, if it is a string.
    pub fn email(&self) -> Option<&str> {
        self.email.as_ref().and_then(Value::as_str)
    }

    /// The role, if it is a string.
    pub fn role(&self) -> Option<&str> {
        self.role.as_ref().and_then(Value::as_str)
    }

    /// `true` only for the exact string role `"organizer"`.
    pub fn is_organizer(&self) -> bool {
        self.role() == Some(ROLE_ORGANIZER)
    }
}

/// Body of an organizer assignment. The value is stored as sent; a missing value
/// clears the field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganizerAssignment {
    #[serde(default, deserialize_with = "present")]
    pub organizer: Option<Value>,
}

// A present key is always `Some`, even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn truthy(field: &Option<Value>) -> bool {
    match field {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
