use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The owner of an account.
///
/// Immutable as far as this core is concerned; the email is the key the
/// notification transport delivers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: Uuid, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
