use ai_providers::{ChatMessage, ChatProvider, EmbeddingProvider};
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::config::SearchConfig;
use crate::error::{CourseError, CourseResult};
use crate::models::{Course, CreateCourse, Enrollment, UpdateCourse};
use crate::pagination::{Page, PageRequest};
use crate::repository::{CourseRepository, hydrate};
use crate::search::SearchPipeline;
use crate::tree::insertion_order;

/// Course Service - business rules on top of a [`CourseRepository`]
pub struct CourseService<R: CourseRepository> {
    repository: Arc<R>,
    config: SearchConfig,
    search: Option<SearchPipeline<R>>,
}

impl<R: CourseRepository> CourseService<R> {
    pub fn new(repository: R, config: SearchConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            config,
            search: None,
        }
    }

    /// Enables embedding on create and `search_with_ai`.
    pub fn with_ai(mut self, embedder: Arc<dyn EmbeddingProvider>, chat: Arc<dyn ChatProvider>) -> Self {
        self.search = Some(SearchPipeline::new(
            Arc::clone(&self.repository),
            embedder,
            chat,
            self.config.top_k,
        ));
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn greeting(&self, name: &str) -> CourseResult<String> {
        let name = name.trim();
        if name.chars().count() < 2 {
            return Err(CourseError::Validation(
                "name must be at least 2 characters".to_string(),
            ));
        }
        Ok(format!("¡Hola {name}! Bienvenido al microservicio Academy 🎓"))
    }

    #[instrument(skip_all, fields(institution_id = %input.institution_id, components = input.components.len()))]
    pub async fn create_course(&self, input: CreateCourse) -> CourseResult<Course> {
        input.validate()?;
        // Tree errors must surface before any embedding call
        insertion_order(&input.components)?;

        let embedding = match (&self.search, self.config.embed_on_create) {
            (Some(search), true) => Some(search.embedder().embed(&input.text_fragments()).await?),
            (None, true) => {
                warn!("No embedding provider configured, course will not be searchable");
                None
            }
            (_, false) => None,
        };

        let embedded = embedding.is_some();
        let course_id = self.repository.create(&input, embedding).await?;
        info!(%course_id, embedded, "Course created");

        self.get_course_by_id(course_id).await
    }

    #[instrument(skip(self))]
    pub async fn get_course_by_id(&self, id: Uuid) -> CourseResult<Course> {
        hydrate(self.repository.as_ref(), id)
            .await?
            .ok_or_else(|| CourseError::course_not_found(id))
    }

    #[instrument(skip(self))]
    pub async fn get_courses_by_institution(
        &self,
        institution_id: Uuid,
        cursor: Option<&str>,
        limit: u32,
    ) -> CourseResult<Page<Course>> {
        let request = PageRequest::new(cursor, limit)?;
        let rows = self
            .repository
            .list_by_institution(institution_id, &request)
            .await?;
        self.with_components(request.build(rows)).await
    }

    #[instrument(skip(self))]
    pub async fn get_course_by_name(
        &self,
        institution_id: Uuid,
        course_name: &str,
        cursor: Option<&str>,
        limit: u32,
    ) -> CourseResult<Page<Course>> {
        let name = course_name.trim();
        if name.is_empty() {
            return Err(CourseError::Validation("course_name is required".to_string()));
        }
        let request = PageRequest::new(cursor, limit)?;
        let rows = self
            .repository
            .search_by_name(institution_id, name, &request)
            .await?;
        self.with_components(request.build(rows)).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_course(&self, id: Uuid, input: UpdateCourse) -> CourseResult<Course> {
        input.validate()?;
        let mut course = self
            .repository
            .update(id, &input)
            .await?
            .ok_or_else(|| CourseError::course_not_found(id))?;
        course.components = self.repository.find_components(id).await?;

        info!(course_id = %id, "Course updated");
        Ok(course)
    }

    #[instrument(skip(self))]
    pub async fn delete_course(&self, id: Uuid) -> CourseResult<()> {
        if !self.repository.delete(id).await? {
            return Err(CourseError::course_not_found(id));
        }
        info!(course_id = %id, "Course deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn enroll_student(&self, campus_user_id: Uuid, component_id: Uuid) -> CourseResult<Enrollment> {
        let enrollment = self.repository.enroll(campus_user_id, component_id).await?;
        info!(enrollment_id = %enrollment.course_enrollment_id, "Student enrolled");
        Ok(enrollment)
    }

    #[instrument(skip(self))]
    pub async fn get_course_enrollments(
        &self,
        course_id: Uuid,
        cursor: Option<&str>,
        limit: u32,
    ) -> CourseResult<Page<Enrollment>> {
        let request = PageRequest::new(cursor, limit)?;
        let rows = self.repository.list_enrollments(course_id, &request).await?;
        Ok(request.build(rows))
    }

    pub async fn search_with_ai(&self, conversation: &[ChatMessage]) -> CourseResult<String> {
        let search = self
            .search
            .as_ref()
            .ok_or_else(|| CourseError::SearchFailed("AI search is not configured".to_string()))?;
        search.search(conversation).await
    }

    async fn with_components(&self, mut page: Page<Course>) -> CourseResult<Page<Course>> {
        let components = try_join_all(
            page.items
                .iter()
                .map(|course| self.repository.find_components(course.course_id)),
        )
        .await?;
        for (course, components) in page.items.iter_mut().zip(components) {
            course.components = components;
        }
        Ok(page)
    }
}
