//! Import command handler

use anyhow::Context;
use std::path::Path;

use crate::config::Config;
use crate::db::Store;
use crate::models::NewCourse;
use crate::services::{CourseService, SeaOrmCourseService};

/// Parse a JSON array of course documents.
pub fn read_courses(path: &Path) -> anyhow::Result<Vec<NewCourse>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read course file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse course file: {}", path.display()))
}

pub async fn cmd_import_courses(config: &Config, path: &Path) -> anyhow::Result<()> {
    let courses = read_courses(path)?;

    if courses.is_empty() {
        println!("No courses found in {}", path.display());
        return Ok(());
    }

    let store = Store::with_pool_options(
        &config.general.database_url,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;
    let service = SeaOrmCourseService::new(store);

    let imported = service
        .import(courses)
        .await
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    for course in &imported {
        println!("  {} [{}] {}", course.id, course.course_category, course.course_name);
    }
    println!("Imported {} course(s) from {}", imported.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("coursehub-import-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn reads_course_array() {
        let path = write_temp(
            r#"[{
                "course_name": "Bookkeeping",
                "original_price": 200,
                "discounted_price": 99.99,
                "course_category": "Accounting & Finance",
                "description": "Ledgers",
                "target_audience": ["Small business owners"],
                "course_curriculum": ["Double entry"],
                "duration": "3 weeks",
                "course_level": "Intermediate",
                "certification": "CPD"
            }]"#,
        );

        let courses = read_courses(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].course_name, "Bookkeeping");
        assert!((courses[0].original_price - 200.0).abs() < f64::EPSILON);
        assert!(courses[0].image_url.is_none());
    }

    #[test]
    fn rejects_non_array_document() {
        let path = write_temp(r#"{"course_name": "Solo"}"#);
        let result = read_courses(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("coursehub-does-not-exist.json");
        assert!(read_courses(&path).is_err());
    }

    #[tokio::test]
    async fn imports_into_configured_database() {
        let path = write_temp(
            r#"[{
                "course_name": "Dog Grooming",
                "original_price": 50,
                "discounted_price": 25,
                "course_category": "Animal Care",
                "description": "Brushes and baths",
                "target_audience": [],
                "course_curriculum": [],
                "duration": "1 week",
                "course_level": "Beginner",
                "image_url": "",
                "certification": "None"
            }]"#,
        );
        let db = std::env::temp_dir().join(format!("coursehub-import-{}.db", uuid::Uuid::new_v4()));

        let mut config = Config::default();
        config.general.database_url = format!("sqlite:{}", db.display());

        cmd_import_courses(&config, &path).await.unwrap();

        let store = Store::new(&config.general.database_url).await.unwrap();
        let courses = store.list_courses().await.unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].course_category, "Animal Care");
        assert!(courses[0].image_url.is_none());

        std::fs::remove_file(&path).ok();
        std::fs::remove_file(&db).ok();
    }
}
