use serde::{Deserialize, Serialize};

/// A project user record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub country: String,
    pub email: String,
    pub id: String,
    pub ip: String,
    pub name: String,
    pub phone: String,
    pub zip: String,
}
