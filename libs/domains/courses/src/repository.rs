use ai_providers::Embedding;
use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CourseResult;
use crate::models::{Component, Course, CourseMatch, CreateCourse, Enrollment, UpdateCourse};
use crate::pagination::PageRequest;

/// Persistence for courses, components and enrollments.
///
/// List methods return up to `page.fetch_size()` rows ordered by
/// `(timestamp DESC, id DESC)` below `page.after`; the caller trims the
/// extra row. Courses from list methods carry no components.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Inserts the course, its components, their files and the optional
    /// embedding atomically. Returns the new course id.
    async fn create(&self, input: &CreateCourse, embedding: Option<Embedding>) -> CourseResult<Uuid>;

    /// Course row without components
    async fn find_by_id(&self, id: Uuid) -> CourseResult<Option<Course>>;

    /// Components ordered by position, with their file ids
    async fn find_components(&self, course_id: Uuid) -> CourseResult<Vec<Component>>;

    async fn list_by_institution(&self, institution_id: Uuid, page: &PageRequest) -> CourseResult<Vec<Course>>;

    /// Full-text match on the course name
    async fn search_by_name(
        &self,
        institution_id: Uuid,
        name: &str,
        page: &PageRequest,
    ) -> CourseResult<Vec<Course>>;

    /// Returns the updated course row, or `None` when the id is unknown.
    async fn update(&self, id: Uuid, input: &UpdateCourse) -> CourseResult<Option<Course>>;

    async fn delete(&self, id: Uuid) -> CourseResult<bool>;

    async fn enroll(&self, campus_user_id: Uuid, component_id: Uuid) -> CourseResult<Enrollment>;

    async fn list_enrollments(&self, course_id: Uuid, page: &PageRequest) -> CourseResult<Vec<Enrollment>>;

    /// Nearest courses by cosine distance, closest first
    async fn similar_courses(&self, embedding: &Embedding, limit: u32) -> CourseResult<Vec<CourseMatch>>;
}

/// The course row plus its components, or `None` when the id is unknown.
pub async fn hydrate<R>(repository: &R, id: Uuid) -> CourseResult<Option<Course>>
where
    R: CourseRepository + ?Sized,
{
    let Some(mut course) = repository.find_by_id(id).await? else {
        return Ok(None);
    };
    course.components = repository.find_components(id).await?;
    Ok(Some(course))
}
