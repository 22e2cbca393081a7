use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::entities::courses;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub id: String,
    pub course_name: String,
    pub original_price: f64,
    pub discounted_price: f64,
    pub course_category: String,
    pub description: String,
    pub target_audience: Vec<String>,
    pub course_curriculum: Vec<String>,
    pub duration: String,
    pub course_level: String,
    pub image_url: Option<String>,
    pub certification: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Decodes a JSON list column. A corrupt value is logged and read as empty.
fn decode_list(course_id: &str, column: &str, raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!(course_id, column, error = %e, "Corrupt list column, returning empty list");
        Vec::new()
    })
}

impl From<courses::Model> for Course {
    fn from(model: courses::Model) -> Self {
        let target_audience = decode_list(&model.id, "target_audience", &model.target_audience);
        let course_curriculum =
            decode_list(&model.id, "course_curriculum", &model.course_curriculum);

        Self {
            id: model.id,
            course_name: model.course_name,
            original_price: model.original_price,
            discounted_price: model.discounted_price,
            course_category: model.course_category,
            description: model.description,
            target_audience,
            course_curriculum,
            duration: model.duration,
            course_level: model.course_level,
            image_url: model.image_url,
            certification: model.certification,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// A course document as supplied to the catalog import.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCourse {
    pub course_name: String,
    pub original_price: f64,
    pub discounted_price: f64,
    pub course_category: String,
    pub description: String,
    pub target_audience: Vec<String>,
    pub course_curriculum: Vec<String>,
    pub duration: String,
    pub course_level: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub certification: String,
}

impl NewCourse {
    /// Trims the text fields the catalog matches on and rejects blanks.
    pub fn normalized(mut self) -> Result<Self, String> {
        self.course_name = self.course_name.trim().to_string();
        self.course_category = self.course_category.trim().to_string();
        self.image_url = self
            .image_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        if self.course_name.is_empty() {
            return Err("course_name cannot be empty".to_string());
        }
        if self.course_category.is_empty() {
            return Err(format!(
                "course_category cannot be empty (course '{}')",
                self.course_name
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewCourse {
        serde_json::from_value(serde_json::json!({
            "course_name": "  Intro to Rust ",
            "original_price": 120.0,
            "discounted_price": 60.0,
            "course_category": " IT & Development ",
            "description": "Ownership, borrowing and traits.",
            "target_audience": ["Developers"],
            "course_curriculum": ["Basics", "Traits"],
            "duration": "6 weeks",
            "course_level": "Beginner",
            "certification": "Certificate of completion"
        }))
        .unwrap()
    }

    #[test]
    fn normalized_trims_matching_fields() {
        let course = sample().normalized().unwrap();
        assert_eq!(course.course_name, "Intro to Rust");
        assert_eq!(course.course_category, "IT & Development");
        assert!(course.image_url.is_none());
    }

    #[test]
    fn normalized_rejects_blank_name_or_category() {
        let mut course = sample();
        course.course_name = "   ".to_string();
        assert!(course.normalized().is_err());

        let mut course = sample();
        course.course_category = String::new();
        assert!(course.normalized().is_err());
    }

    #[test]
    fn corrupt_list_column_reads_as_empty() {
        assert_eq!(decode_list("c1", "target_audience", "not json"), Vec::<String>::new());
        assert_eq!(decode_list("c1", "target_audience", r#"["A","B"]"#), vec!["A", "B"]);
    }

    #[test]
    fn blank_image_url_becomes_none() {
        let mut course = sample();
        course.image_url = Some("  ".to_string());
        assert!(course.normalized().unwrap().image_url.is_none());
    }
}
