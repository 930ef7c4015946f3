//! Contact record and request bodies.

use serde::{Deserialize, Serialize};

/// A persisted contact. `id` is assigned by the store and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Contact {
    pub id: i64,
    pub name: String,
}

/// Input to `ContactStore::save`: no id inserts a new row, an id overwrites that row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactDraft {
    pub id: Option<i64>,
    pub name: String,
}

impl ContactDraft {
    pub fn new(name: impl Into<String>) -> Self {
        ContactDraft {
            id: None,
            name: name.into(),
        }
    }
}

impl From<Contact> for ContactDraft {
    fn from(c: Contact) -> Self {
        ContactDraft {
            id: Some(c.id),
            name: c.name,
        }
    }
}

/// POST body. A missing or null `name` deserializes to `None`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CreateContact {
    #[serde(default)]
    pub name: Option<String>,
}

/// PUT body.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateContact {
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_missing_name_are_absent() {
        let a: CreateContact = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert_eq!(a.name, None);
        let b: CreateContact = serde_json::from_str("{}").unwrap();
        assert_eq!(b.name, None);
        let c: UpdateContact = serde_json::from_str(r#"{"name":"  x "}"#).unwrap();
        assert_eq!(c.name.as_deref(), Some("  x "));
    }

    #[test]
    fn contact_serializes_as_id_and_name() {
        let c = Contact {
            id: 3,
            name: "Bruce Wayne".into(),
        };
        assert_eq!(
            serde_json::to_value(&c).unwrap(),
            serde_json::json!({"id": 3, "name": "Bruce Wayne"})
        );
    }
}
