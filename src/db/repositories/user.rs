use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use thiserror::Error;

use crate::entities::{prelude::*, users};
use crate::models::{NewUser, User};

/// Failures when inserting a credential record.
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<User>> {
        let user = Users::find_by_id(id.to_string())
            .one(&self.conn)
            .await
            .context("Failed to query user by ID")?;

        Ok(user.map(User::from))
    }

    /// Get user by username
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = Users::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.conn)
            .await
            .context("Failed to query user by username")?;

        Ok(user.map(User::from))
    }

    /// Get user by (already normalized) email together with the stored password hash
    pub async fn get_by_email_with_password(&self, email: &str) -> Result<Option<(User, String)>> {
        let user = Users::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.conn)
            .await
            .context("Failed to query user by email")?;

        Ok(user.map(|u| {
            let password_hash = u.password_hash.clone();
            (User::from(u), password_hash)
        }))
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        Ok(self.get_by_username(username).await?.is_some())
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let user = Users::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.conn)
            .await
            .context("Failed to query user by email")?;

        Ok(user.is_some())
    }

    /// Insert a new credential record.
    ///
    /// The unique indexes on `username` and `email` are the final arbiter when
    /// two registrations race past the pre-checks; the losing insert comes back
    /// as a typed duplicate error.
    pub async fn create(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        let now = chrono::Utc::now().to_rfc3339();

        let active = users::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            username: Set(new_user.username),
            phone: Set(new_user.phone),
            department: Set(new_user.department),
            email: Set(new_user.email),
            password_hash: Set(new_user.password_hash),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };

        let model = active.insert(&self.conn).await.map_err(classify_insert_error)?;
        Ok(User::from(model))
    }
}

fn classify_insert_error(err: DbErr) -> UserStoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            if detail.contains("email") {
                UserStoreError::DuplicateEmail
            } else {
                UserStoreError::DuplicateUsername
            }
        }
        _ => UserStoreError::Database(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;
    use crate::models::Department;

    fn new_user(username: &str, email: Option<&str>) -> NewUser {
        NewUser {
            username: username.to_string(),
            phone: "0123456789".to_string(),
            department: Department::Marketing,
            email: email.map(str::to_string),
            password_hash: "$2b$04$not-a-real-digest".to_string(),
        }
    }

    async fn repo() -> UserRepository {
        let store = Store::new("sqlite::memory:").await.unwrap();
        UserRepository::new(store.conn)
    }

    #[tokio::test]
    async fn create_then_lookup() {
        let repo = repo().await;
        let created = repo
            .create(new_user("alice", Some("alice@example.com")))
            .await
            .unwrap();

        assert_eq!(created.username, "alice");
        assert_eq!(created.created_at, created.updated_at);
        assert!(uuid::Uuid::parse_str(&created.id).is_ok());

        let by_id = repo.get_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(by_id, created);

        let (by_email, hash) = repo
            .get_by_email_with_password("alice@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.id, created.id);
        assert_eq!(hash, "$2b$04$not-a-real-digest");

        assert!(repo.username_exists("alice").await.unwrap());
        assert!(!repo.username_exists("bob").await.unwrap());
        assert!(repo.email_exists("alice@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn unique_index_rejects_duplicate_username() {
        let repo = repo().await;
        repo.create(new_user("alice", None)).await.unwrap();

        let err = repo.create(new_user("alice", None)).await.unwrap_err();
        assert!(matches!(err, UserStoreError::DuplicateUsername));
    }

    #[tokio::test]
    async fn unique_index_rejects_duplicate_email() {
        let repo = repo().await;
        repo.create(new_user("alice", Some("shared@example.com")))
            .await
            .unwrap();

        let err = repo
            .create(new_user("bob", Some("shared@example.com")))
            .await
            .unwrap_err();
        assert!(matches!(err, UserStoreError::DuplicateEmail));
    }

    #[tokio::test]
    async fn missing_emails_never_collide() {
        let repo = repo().await;
        repo.create(new_user("alice", None)).await.unwrap();
        repo.create(new_user("bob", None)).await.unwrap();

        assert!(repo.get_by_username("bob").await.unwrap().is_some());
    }
}
