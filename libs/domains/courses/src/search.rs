//! Conversational course search.
//!
//! ```text
//! last message ─▶ embed ─▶ nearest courses ─▶ hydrate ─▶ prompt ─▶ chat ─▶ answer
//! ```
//!
//! Every step is a hard failure point; nothing partial is returned.

use ai_providers::{ChatMessage, ChatProvider, ChatReply, EmbeddingProvider};
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::error::{CourseError, CourseResult};
use crate::models::Course;
use crate::prompts::search_system_prompt;
use crate::repository::{CourseRepository, hydrate};

pub struct SearchPipeline<R: ?Sized> {
    repository: Arc<R>,
    embedder: Arc<dyn EmbeddingProvider>,
    chat: Arc<dyn ChatProvider>,
    top_k: u32,
}

impl<R: ?Sized> Clone for SearchPipeline<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            embedder: Arc::clone(&self.embedder),
            chat: Arc::clone(&self.chat),
            top_k: self.top_k,
        }
    }
}

/// Content of the last message, trimmed.
pub fn query_text(conversation: &[ChatMessage]) -> CourseResult<&str> {
    let last = conversation
        .last()
        .ok_or_else(|| CourseError::Validation("conversation must not be empty".to_string()))?;
    let text = last.content.trim();
    if text.is_empty() {
        return Err(CourseError::Validation(
            "last message must not be blank".to_string(),
        ));
    }
    Ok(text)
}

fn search_failed(step: &'static str) -> impl FnOnce(CourseError) -> CourseError {
    move |err| {
        warn!(step, error = %err, "Course search step failed");
        match err {
            CourseError::SearchFailed(_) => err,
            other => CourseError::SearchFailed(format!("{step}: {other}")),
        }
    }
}

impl<R> SearchPipeline<R>
where
    R: CourseRepository + ?Sized,
{
    pub fn new(
        repository: Arc<R>,
        embedder: Arc<dyn EmbeddingProvider>,
        chat: Arc<dyn ChatProvider>,
        top_k: u32,
    ) -> Self {
        Self {
            repository,
            embedder,
            chat,
            top_k: top_k.max(1),
        }
    }

    pub fn embedder(&self) -> &Arc<dyn EmbeddingProvider> {
        &self.embedder
    }

    #[instrument(skip_all, fields(messages = conversation.len(), top_k = self.top_k))]
    pub async fn search(&self, conversation: &[ChatMessage]) -> CourseResult<String> {
        let query = query_text(conversation)?;

        let embedding = self
            .embedder
            .embed(&[query.to_string()])
            .await
            .map_err(|e| search_failed("embed")(e.into()))?;

        let matches = self
            .repository
            .similar_courses(&embedding, self.top_k)
            .await
            .map_err(search_failed("similarity"))?;
        debug!(matches = matches.len(), "Similarity query finished");

        let courses = self
            .hydrate_all(matches.iter().map(|m| m.course_id))
            .await
            .map_err(search_failed("hydrate"))?;

        let mut messages = Vec::with_capacity(conversation.len() + 1);
        messages.push(ChatMessage::system(search_system_prompt(query, &courses)));
        messages.extend_from_slice(conversation);

        let reply = self
            .chat
            .chat(&messages)
            .await
            .map_err(|e| search_failed("chat")(e.into()))?;

        match reply {
            ChatReply::Answer(answer) => {
                info!(courses = courses.len(), "Course search answered");
                Ok(answer)
            }
            ChatReply::Empty => Err(CourseError::NoAnswer(
                "the assistant returned an empty answer".to_string(),
            )),
        }
    }

    /// Hydrates matches concurrently, keeping similarity order. Courses
    /// deleted since the similarity query are skipped.
    async fn hydrate_all<I>(&self, ids: I) -> CourseResult<Vec<Course>>
    where
        I: IntoIterator<Item = uuid::Uuid>,
    {
        let repository = self.repository.as_ref();
        let courses = try_join_all(ids.into_iter().map(|id| hydrate(repository, id))).await?;
        Ok(courses.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseMatch;
    use crate::repository::MockCourseRepository;
    use ai_providers::{AiError, AiResult, ChatRole, Embedding};
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        Embedder {}
        #[async_trait]
        impl EmbeddingProvider for Embedder {
            async fn embed(&self, fragments: &[String]) -> AiResult<Embedding>;
        }
    }

    mock! {
        Chat {}
        #[async_trait]
        impl ChatProvider for Chat {
            async fn chat(&self, messages: &[ChatMessage]) -> AiResult<ChatReply>;
        }
    }

    fn embedding() -> Embedding {
        Embedding::from_raw("text-multilingual-embedding-002", vec![1.0, 0.0], 2).unwrap()
    }

    fn course(id: Uuid, name: &str) -> Course {
        Course {
            course_id: id,
            course_name: name.into(),
            course_summary: "summary".into(),
            course_description: None,
            institution_id: Uuid::new_v4(),
            image_id: None,
            created_at: Utc::now(),
            components: Vec::new(),
        }
    }

    fn conversation(last: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::new(ChatRole::Assistant, "¿Qué quieres aprender?"),
            ChatMessage::user(last),
        ]
    }

    fn working_embedder() -> MockEmbedder {
        let mut embedder = MockEmbedder::new();
        embedder.expect_embed().returning(|_| Ok(embedding()));
        embedder
    }

    fn repository_with(courses: Vec<Course>) -> MockCourseRepository {
        let mut repo = MockCourseRepository::new();
        let matches: Vec<CourseMatch> = courses
            .iter()
            .map(|c| CourseMatch {
                course_id: c.course_id,
                similarity: 0.9,
            })
            .collect();
        repo.expect_similar_courses()
            .returning(move |_, _| Ok(matches.clone()));
        repo.expect_find_by_id().returning(move |id| {
            Ok(courses.iter().find(|c| c.course_id == id).cloned())
        });
        repo.expect_find_components().returning(|_| Ok(Vec::new()));
        repo
    }

    fn pipeline(repo: MockCourseRepository, embedder: MockEmbedder, chat: MockChat) -> SearchPipeline<MockCourseRepository> {
        SearchPipeline::new(Arc::new(repo), Arc::new(embedder), Arc::new(chat), 5)
    }

    #[tokio::test]
    async fn test_search_answers_with_context() {
        let rust = course(Uuid::new_v4(), "Rust para todos");
        let mut chat = MockChat::new();
        chat.expect_chat()
            .withf(|messages| {
                messages.len() == 3
                    && messages[0].role == ChatRole::System
                    && messages[0].content.contains("Rust para todos")
                    && messages[0].content.contains("quiero aprender rust")
                    && messages[2].content == "quiero aprender rust"
            })
            .times(1)
            .returning(|_| Ok(ChatReply::Answer("¡Mira Rust para todos! 🦀".into())));

        let mut embedder = MockEmbedder::new();
        embedder
            .expect_embed()
            .withf(|fragments| fragments == ["quiero aprender rust".to_string()])
            .returning(|_| Ok(embedding()));

        let answer = pipeline(repository_with(vec![rust]), embedder, chat)
            .search(&conversation("  quiero aprender rust "))
            .await
            .unwrap();

        assert_eq!(answer, "¡Mira Rust para todos! 🦀");
    }

    #[tokio::test]
    async fn test_search_skips_vanished_courses() {
        let kept = course(Uuid::new_v4(), "Kept");
        let mut repo = MockCourseRepository::new();
        let kept_id = kept.course_id;
        repo.expect_similar_courses().returning(move |_, limit| {
            assert_eq!(limit, 5);
            Ok(vec![
                CourseMatch { course_id: Uuid::new_v4(), similarity: 0.95 },
                CourseMatch { course_id: kept_id, similarity: 0.9 },
            ])
        });
        repo.expect_find_by_id()
            .returning(move |id| Ok((id == kept_id).then(|| kept.clone())));
        repo.expect_find_components().returning(|_| Ok(Vec::new()));

        let mut chat = MockChat::new();
        chat.expect_chat()
            .withf(|messages| messages[0].content.contains("1. **Kept**") && !messages[0].content.contains("2. "))
            .returning(|_| Ok(ChatReply::Answer("ok".into())));

        let answer = pipeline(repo, working_embedder(), chat)
            .search(&conversation("kept"))
            .await
            .unwrap();
        assert_eq!(answer, "ok");
    }

    #[tokio::test]
    async fn test_blank_query_is_validation() {
        let p = pipeline(MockCourseRepository::new(), MockEmbedder::new(), MockChat::new());

        assert!(matches!(p.search(&[]).await, Err(CourseError::Validation(_))));
        assert!(matches!(
            p.search(&conversation("   ")).await,
            Err(CourseError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_embedding_failure_is_search_failed() {
        let mut embedder = MockEmbedder::new();
        embedder
            .expect_embed()
            .returning(|_| Err(AiError::EmbeddingUnavailable("expected 768 values, got 512".into())));

        let err = pipeline(MockCourseRepository::new(), embedder, MockChat::new())
            .search(&conversation("rust"))
            .await
            .unwrap_err();
        assert!(matches!(err, CourseError::SearchFailed(msg) if msg.contains("512")));
    }

    #[tokio::test]
    async fn test_store_failure_is_search_failed() {
        let mut repo = MockCourseRepository::new();
        repo.expect_similar_courses()
            .returning(|_, _| Err(CourseError::Database("connection reset".into())));

        let err = pipeline(repo, working_embedder(), MockChat::new())
            .search(&conversation("rust"))
            .await
            .unwrap_err();
        assert!(matches!(err, CourseError::SearchFailed(_)));
    }

    #[tokio::test]
    async fn test_hydrate_failure_is_search_failed() {
        let mut repo = MockCourseRepository::new();
        repo.expect_similar_courses().returning(|_, _| {
            Ok(vec![CourseMatch { course_id: Uuid::new_v4(), similarity: 0.5 }])
        });
        repo.expect_find_by_id()
            .returning(|_| Err(CourseError::Database("timeout".into())));

        let err = pipeline(repo, working_embedder(), MockChat::new())
            .search(&conversation("rust"))
            .await
            .unwrap_err();
        assert!(matches!(err, CourseError::SearchFailed(_)));
    }

    #[tokio::test]
    async fn test_chat_failure_is_search_failed() {
        let mut chat = MockChat::new();
        chat.expect_chat()
            .returning(|_| Err(AiError::ChatUnavailable("502 Bad Gateway".into())));

        let err = pipeline(repository_with(Vec::new()), working_embedder(), chat)
            .search(&conversation("rust"))
            .await
            .unwrap_err();
        assert!(matches!(err, CourseError::SearchFailed(_)));
    }

    #[tokio::test]
    async fn test_empty_reply_is_no_answer() {
        let mut chat = MockChat::new();
        chat.expect_chat().returning(|_| Ok(ChatReply::Empty));

        let err = pipeline(repository_with(Vec::new()), working_embedder(), chat)
            .search(&conversation("rust"))
            .await
            .unwrap_err();
        assert!(matches!(err, CourseError::NoAnswer(_)));
    }
}
