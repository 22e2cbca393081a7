use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set};
use tracing::info;

use crate::entities::{courses, prelude::*};
use crate::models::{Course, NewCourse};

/// Repository for the read-only course catalog
pub struct CourseRepository {
    conn: DatabaseConnection,
}

impl CourseRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<Course>> {
        let rows = Courses::find()
            .order_by_asc(courses::Column::CreatedAt)
            .all(&self.conn)
            .await
            .context("Failed to list courses")?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<Option<Course>> {
        let row = Courses::find_by_id(id.to_string())
            .one(&self.conn)
            .await
            .context("Failed to query course by ID")?;

        Ok(row.map(Course::from))
    }

    /// Distinct categories, sorted
    pub async fn categories(&self) -> Result<Vec<String>> {
        let categories = Courses::find()
            .select_only()
            .column(courses::Column::CourseCategory)
            .distinct()
            .order_by_asc(courses::Column::CourseCategory)
            .into_tuple::<String>()
            .all(&self.conn)
            .await
            .context("Failed to query course categories")?;

        Ok(categories)
    }

    /// Case-insensitive exact match on category, with Unicode folding.
    /// SQLite's `lower()` folds ASCII only.
    pub async fn by_category(&self, category: &str) -> Result<Vec<Course>> {
        let wanted = category.to_lowercase();

        let rows = Courses::find()
            .order_by_asc(courses::Column::CreatedAt)
            .all(&self.conn)
            .await
            .context("Failed to query courses by category")?;

        Ok(rows
            .into_iter()
            .filter(|row| row.course_category.to_lowercase() == wanted)
            .map(Course::from)
            .collect())
    }

    /// Case-insensitive substring match on name. The needle is literal text.
    pub async fn by_name(&self, name: &str) -> Result<Vec<Course>> {
        let needle = name.to_lowercase();

        let rows = Courses::find()
            .order_by_asc(courses::Column::CreatedAt)
            .all(&self.conn)
            .await
            .context("Failed to query courses by name")?;

        Ok(rows
            .into_iter()
            .filter(|row| row.course_name.to_lowercase().contains(&needle))
            .map(Course::from)
            .collect())
    }

    pub async fn add(&self, course: NewCourse) -> Result<Course> {
        let now = chrono::Utc::now().to_rfc3339();
        let id = uuid::Uuid::new_v4().to_string();

        let active = courses::ActiveModel {
            id: Set(id.clone()),
            course_name: Set(course.course_name),
            original_price: Set(course.original_price),
            discounted_price: Set(course.discounted_price),
            course_category: Set(course.course_category),
            description: Set(course.description),
            target_audience: Set(serde_json::to_string(&course.target_audience)?),
            course_curriculum: Set(serde_json::to_string(&course.course_curriculum)?),
            duration: Set(course.duration),
            course_level: Set(course.course_level),
            image_url: Set(course.image_url),
            certification: Set(course.certification),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert course")?;

        info!("Added course {}: {}", id, model.course_name);
        Ok(Course::from(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;

    fn course(name: &str, category: &str) -> NewCourse {
        NewCourse {
            course_name: name.to_string(),
            original_price: 100.0,
            discounted_price: 49.5,
            course_category: category.to_string(),
            description: "A course".to_string(),
            target_audience: vec!["Everyone".to_string()],
            course_curriculum: vec!["Module 1".to_string(), "Module 2".to_string()],
            duration: "4 weeks".to_string(),
            course_level: "Beginner".to_string(),
            image_url: None,
            certification: "Yes".to_string(),
        }
    }

    async fn seeded() -> CourseRepository {
        let store = Store::new("sqlite::memory:").await.unwrap();
        let repo = CourseRepository::new(store.conn);
        repo.add(course("Digital Marketing Basics", "Marketing"))
            .await
            .unwrap();
        repo.add(course("SEO (Advanced)", "Marketing")).await.unwrap();
        repo.add(course("Yoga for Beginners", "Health & Fitness"))
            .await
            .unwrap();
        repo
    }

    #[tokio::test]
    async fn add_round_trips_list_fields() {
        let repo = seeded().await;
        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].course_curriculum, vec!["Module 1", "Module 2"]);

        let fetched = repo.get(&all[0].id).await.unwrap().unwrap();
        assert_eq!(fetched, all[0]);
        assert!(repo.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn categories_are_distinct_and_sorted() {
        let repo = seeded().await;
        assert_eq!(
            repo.categories().await.unwrap(),
            vec!["Health & Fitness".to_string(), "Marketing".to_string()]
        );
    }

    #[tokio::test]
    async fn category_match_ignores_case_but_not_extra_text() {
        let repo = seeded().await;
        assert_eq!(repo.by_category("marketing").await.unwrap().len(), 2);
        assert_eq!(repo.by_category("HEALTH & FITNESS").await.unwrap().len(), 1);
        assert!(repo.by_category("Market").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn category_match_folds_non_ascii_letters() {
        let repo = seeded().await;
        repo.add(course("Pâtisserie", "École Culinaire")).await.unwrap();

        for query in ["École Culinaire", "école culinaire", "ÉCOLE CULINAIRE"] {
            let hits = repo.by_category(query).await.unwrap();
            assert_eq!(hits.len(), 1, "{query}");
            assert_eq!(hits[0].course_name, "Pâtisserie");
        }
    }

    #[tokio::test]
    async fn name_match_is_literal_substring() {
        let repo = seeded().await;
        assert_eq!(repo.by_name("marketing").await.unwrap().len(), 1);
        assert_eq!(repo.by_name("(advanced)").await.unwrap().len(), 1);
        assert!(repo.by_name(".*").await.unwrap().is_empty());
        assert_eq!(repo.by_name("").await.unwrap().len(), 3);
    }
}
