use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::pagination::PageKey;

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Course with its components ordered by position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub course_id: Uuid,
    pub course_name: String,
    pub course_summary: String,
    pub course_description: Option<String>,
    pub institution_id: Uuid,
    pub image_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub components: Vec<Component>,
}

impl Course {
    /// Name, summary and description, for prompts and embeddings.
    pub fn text_fragments(&self) -> Vec<String> {
        text_fragments(
            &self.course_name,
            &self.course_summary,
            self.course_description.as_deref(),
        )
    }
}

impl PageKey for Course {
    fn page_timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn page_id(&self) -> String {
        self.course_id.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub component_id: Uuid,
    pub component_name: String,
    pub component_summary: String,
    pub context_body: Option<String>,
    pub component_type_id: i32,
    pub position: i32,
    pub parent_id: Option<Uuid>,
    pub course_id: Uuid,
    pub file_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub course_enrollment_id: Uuid,
    pub component_id: Uuid,
    pub campus_user_id: Uuid,
    pub enrolled_at: DateTime<Utc>,
}

impl PageKey for Enrollment {
    fn page_timestamp(&self) -> DateTime<Utc> {
        self.enrolled_at
    }

    fn page_id(&self) -> String {
        self.course_enrollment_id.to_string()
    }
}

/// One component of a course being created.
///
/// The parent is either another component of the same request, named by its
/// `temp_id`, or an already stored component (`real_parent_id`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ComponentInput {
    #[validate(custom(function = "not_blank"))]
    pub component_name: String,
    #[validate(custom(function = "not_blank"))]
    pub component_summary: String,
    #[validate(range(min = 1))]
    pub component_type_id: i32,
    pub context_body: Option<String>,
    #[validate(range(min = 0))]
    pub position: i32,
    pub temp_id: Option<String>,
    pub parent_temp_id: Option<String>,
    pub real_parent_id: Option<Uuid>,
    pub file_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateCourse {
    #[validate(custom(function = "not_blank"))]
    pub course_name: String,
    #[validate(custom(function = "not_blank"))]
    pub course_summary: String,
    pub course_description: Option<String>,
    pub institution_id: Uuid,
    pub image_id: Option<Uuid>,
    #[validate(nested)]
    pub components: Vec<ComponentInput>,
}

impl CreateCourse {
    pub fn text_fragments(&self) -> Vec<String> {
        text_fragments(
            &self.course_name,
            &self.course_summary,
            self.course_description.as_deref(),
        )
    }
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UpdateCourse {
    #[validate(custom(function = "not_blank"))]
    pub course_name: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub course_summary: Option<String>,
    pub course_description: Option<String>,
    pub image_id: Option<Uuid>,
}

impl UpdateCourse {
    pub fn is_empty(&self) -> bool {
        self.course_name.is_none()
            && self.course_summary.is_none()
            && self.course_description.is_none()
            && self.image_id.is_none()
    }
}

/// A course ranked by embedding similarity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourseMatch {
    pub course_id: Uuid,
    /// Cosine similarity, 1.0 is identical
    pub similarity: f64,
}

fn text_fragments(name: &str, summary: &str, description: Option<&str>) -> Vec<String> {
    [Some(name), Some(summary), description]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
