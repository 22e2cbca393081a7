//! `SeaORM` implementation of the `CourseService` trait.

use async_trait::async_trait;
use tracing::info;

use crate::db::Store;
use crate::models::{Course, NewCourse};
use crate::services::course_service::{CourseError, CourseService};

pub struct SeaOrmCourseService {
    store: Store,
}

impl SeaOrmCourseService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CourseService for SeaOrmCourseService {
    async fn list(&self) -> Result<Vec<Course>, CourseError> {
        Ok(self.store.list_courses().await?)
    }

    async fn get(&self, id: &str) -> Result<Course, CourseError> {
        self.store
            .get_course(id)
            .await?
            .ok_or(CourseError::NotFound)
    }

    async fn categories(&self) -> Result<Vec<String>, CourseError> {
        Ok(self.store.course_categories().await?)
    }

    async fn by_category(&self, category: &str) -> Result<Vec<Course>, CourseError> {
        Ok(self.store.courses_by_category(category.trim()).await?)
    }

    async fn by_name(&self, name: &str) -> Result<Vec<Course>, CourseError> {
        Ok(self.store.courses_by_name(name).await?)
    }

    async fn import(&self, courses: Vec<NewCourse>) -> Result<Vec<Course>, CourseError> {
        let courses = courses
            .into_iter()
            .enumerate()
            .map(|(index, course)| {
                course
                    .normalized()
                    .map_err(|e| CourseError::InvalidCourse(format!("entry {index}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut imported = Vec::with_capacity(courses.len());
        for course in courses {
            imported.push(self.store.add_course(course).await?);
        }

        info!("Imported {} courses", imported.len());
        Ok(imported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(name: &str, category: &str) -> NewCourse {
        NewCourse {
            course_name: name.to_string(),
            original_price: 80.0,
            discounted_price: 40.0,
            course_category: category.to_string(),
            description: "Description".to_string(),
            target_audience: vec!["Beginners".to_string()],
            course_curriculum: vec!["Week 1".to_string()],
            duration: "2 weeks".to_string(),
            course_level: "Beginner".to_string(),
            image_url: Some("https://example.com/cover.png".to_string()),
            certification: "Included".to_string(),
        }
    }

    async fn service() -> SeaOrmCourseService {
        SeaOrmCourseService::new(Store::new("sqlite::memory:").await.unwrap())
    }

    #[tokio::test]
    async fn import_then_query() {
        let service = service().await;
        let imported = service
            .import(vec![
                course(" Python Basics ", "Computers & IT"),
                course("Team Leadership", "HR & Leadership"),
            ])
            .await
            .unwrap();
        assert_eq!(imported.len(), 2);
        assert_eq!(imported[0].course_name, "Python Basics");

        let fetched = service.get(&imported[1].id).await.unwrap();
        assert_eq!(fetched, imported[1]);

        assert_eq!(
            service.categories().await.unwrap(),
            vec!["Computers & IT", "HR & Leadership"]
        );
        assert_eq!(service.by_category("computers & it").await.unwrap().len(), 1);
        assert_eq!(service.by_name("PYTHON").await.unwrap().len(), 1);
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn invalid_entry_aborts_import() {
        let service = service().await;
        let err = service
            .import(vec![course("Valid", "Sports"), course("Broken", "  ")])
            .await
            .unwrap_err();

        assert!(matches!(err, CourseError::InvalidCourse(msg) if msg.starts_with("entry 1")));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let service = service().await;
        let err = service
            .get("6a4f5c2e-0000-4000-8000-000000000000")
            .await
            .unwrap_err();
        assert!(matches!(err, CourseError::NotFound));
    }
}
