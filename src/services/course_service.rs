//! Domain service for the read-only course catalog and its bulk import.

use thiserror::Error;

use crate::models::{Course, NewCourse};

#[derive(Debug, Error)]
pub enum CourseError {
    #[error("Course not found")]
    NotFound,

    #[error("Invalid course: {0}")]
    InvalidCourse(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for CourseError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait CourseService: Send + Sync {
    async fn list(&self) -> Result<Vec<Course>, CourseError>;

    /// # Errors
    ///
    /// Returns [`CourseError::NotFound`] if no course has this id.
    async fn get(&self, id: &str) -> Result<Course, CourseError>;

    /// Distinct categories in ascending order.
    async fn categories(&self) -> Result<Vec<String>, CourseError>;

    /// Courses whose category equals `category`, ignoring case.
    async fn by_category(&self, category: &str) -> Result<Vec<Course>, CourseError>;

    /// Courses whose name contains `name` as a literal, case-insensitive substring.
    async fn by_name(&self, name: &str) -> Result<Vec<Course>, CourseError>;

    /// Inserts every document, stopping at the first invalid one.
    ///
    /// # Errors
    ///
    /// Returns [`CourseError::InvalidCourse`] naming the offending document.
    async fn import(&self, courses: Vec<NewCourse>) -> Result<Vec<Course>, CourseError>;
}
