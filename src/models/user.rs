use serde::Serialize;

use crate::entities::users;
use crate::models::department::Department;

/// A stored user without its password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub phone: String,
    pub department: Department,
    pub email: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    /// Name shown to other users and embedded in tokens.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.username
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            phone: model.phone,
            department: model.department,
            email: model.email,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Fields for a credential record about to be inserted.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub phone: String,
    pub department: Department,
    pub email: Option<String>,
    pub password_hash: String,
}
