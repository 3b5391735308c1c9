use ai_providers::Embedding;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use database::DatabaseError;
use database::postgres::{Dependency, DependencyPolicy, QueryExecutor, TxStatement};
use sea_orm::{FromQueryResult, QueryResult, SqlErr, Value};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{CourseError, CourseResult};
use crate::models::{Component, Course, CourseMatch, CreateCourse, Enrollment, UpdateCourse};
use crate::pagination::PageRequest;
use crate::queries;
use crate::repository::CourseRepository;
use crate::tree::{ParentRef, insertion_order};

/// Parameter slot of `insert_component` holding the course id
const COMPONENT_COURSE_PARAM: usize = 0;
/// Parameter slot of `insert_component` holding the parent id
const COMPONENT_PARENT_PARAM: usize = 6;

#[derive(Clone)]
pub struct PgCourseRepository {
    executor: QueryExecutor,
}

impl PgCourseRepository {
    pub fn new(executor: QueryExecutor) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &QueryExecutor {
        &self.executor
    }
}

#[derive(Debug, FromQueryResult)]
struct CourseRow {
    course_id: Uuid,
    course_name: String,
    course_summary: String,
    course_description: Option<String>,
    institution_id: Uuid,
    course_image_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Self {
            course_id: row.course_id,
            course_name: row.course_name,
            course_summary: row.course_summary,
            course_description: row.course_description,
            institution_id: row.institution_id,
            image_id: row.course_image_id,
            created_at: row.created_at,
            components: Vec::new(),
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct ComponentRow {
    component_id: Uuid,
    component_name: String,
    component_summary: String,
    context_body: Option<String>,
    component_type_id: i32,
    position: i32,
    parent_id: Option<Uuid>,
    course_id: Uuid,
    file_ids: Vec<Uuid>,
}

impl From<ComponentRow> for Component {
    fn from(row: ComponentRow) -> Self {
        Self {
            component_id: row.component_id,
            component_name: row.component_name,
            component_summary: row.component_summary,
            context_body: row.context_body,
            component_type_id: row.component_type_id,
            position: row.position,
            parent_id: row.parent_id,
            course_id: row.course_id,
            file_ids: row.file_ids,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct EnrollmentRow {
    course_enrollment_id: Uuid,
    component_id: Uuid,
    campus_user_id: Uuid,
    enrolled_at: DateTime<Utc>,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(row: EnrollmentRow) -> Self {
        Self {
            course_enrollment_id: row.course_enrollment_id,
            component_id: row.component_id,
            campus_user_id: row.campus_user_id,
            enrolled_at: row.enrolled_at,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct MatchRow {
    course_id: Uuid,
    similarity: f64,
}

fn decode<R, T>(row: &QueryResult) -> CourseResult<T>
where
    R: FromQueryResult + Into<T>,
{
    Ok(R::from_query_result(row, "")?.into())
}

fn decode_all<R, T>(rows: &[QueryResult]) -> CourseResult<Vec<T>>
where
    R: FromQueryResult + Into<T>,
{
    rows.iter().map(decode::<R, T>).collect()
}

fn no_uuid() -> Value {
    Value::from(None::<Uuid>)
}

fn keyset_params(page: &PageRequest) -> [Value; 3] {
    [
        Value::from(page.after.map(|k| k.timestamp)),
        Value::from(page.after.map(|k| k.id)),
        Value::from(page.fetch_size()),
    ]
}

/// Statements and id-threading for one course creation.
///
/// Statement 0 inserts the course; every later statement receives the new
/// course id (or its component's id) through a dependency, never through
/// string building.
pub(crate) fn creation_statements(
    input: &CreateCourse,
    embedding: Option<&Embedding>,
) -> CourseResult<(Vec<TxStatement>, Vec<Dependency>)> {
    let order = insertion_order(&input.components)?;

    let mut statements = vec![TxStatement::new(
        queries::INSERT_COURSE,
        [
            Value::from(input.course_name.trim().to_string()),
            Value::from(input.course_summary.trim().to_string()),
            Value::from(input.course_description.clone()),
            Value::from(input.institution_id),
            Value::from(input.image_id),
        ],
    )];
    let mut dependencies = Vec::new();
    let mut statement_of = vec![0usize; input.components.len()];

    for planned in order {
        let component = &input.components[planned.index];
        let at = statements.len();
        statement_of[planned.index] = at;

        let parent = match planned.parent {
            ParentRef::Stored(id) => Value::from(id),
            ParentRef::Root | ParentRef::Pending(_) => no_uuid(),
        };
        statements.push(TxStatement::new(
            queries::INSERT_COMPONENT,
            [
                no_uuid(),
                Value::from(component.component_name.trim().to_string()),
                Value::from(component.component_summary.trim().to_string()),
                Value::from(component.context_body.clone()),
                Value::from(component.component_type_id),
                Value::from(component.position),
                parent,
            ],
        ));
        dependencies.push(Dependency::new(0, at, COMPONENT_COURSE_PARAM));
        if let ParentRef::Pending(parent_index) = planned.parent {
            dependencies.push(Dependency::new(
                statement_of[parent_index],
                at,
                COMPONENT_PARENT_PARAM,
            ));
        }

        for file_id in &component.file_ids {
            let file_at = statements.len();
            statements.push(TxStatement::new(
                queries::INSERT_LESSON_FILE,
                [no_uuid(), Value::from(*file_id)],
            ));
            dependencies.push(Dependency::new(at, file_at, 0));
        }
    }

    if let Some(embedding) = embedding {
        let at = statements.len();
        statements.push(TxStatement::new(
            queries::INSERT_EMBEDDING,
            [
                no_uuid(),
                Value::from(embedding.model.clone()),
                Value::from(embedding.to_pgvector()),
            ],
        ));
        dependencies.push(Dependency::new(0, at, 0));
    }

    Ok((statements, dependencies))
}

fn is_foreign_key_violation(err: &DatabaseError) -> bool {
    matches!(
        err,
        DatabaseError::Postgres(db_err)
            if matches!(db_err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
    )
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn create(&self, input: &CreateCourse, embedding: Option<Embedding>) -> CourseResult<Uuid> {
        let (statements, dependencies) = creation_statements(input, embedding.as_ref())?;
        let count = statements.len();

        let results = self
            .executor
            .run_transaction_with(statements, &dependencies, DependencyPolicy::Strict)
            .await?;

        let course_id = results
            .first()
            .and_then(|rows| rows.first())
            .and_then(|row| row.try_get_by_index::<Uuid>(0).ok())
            .ok_or_else(|| CourseError::Database("course insert returned no id".to_string()))?;

        info!(%course_id, statements = count, "Created course");
        Ok(course_id)
    }

    async fn find_by_id(&self, id: Uuid) -> CourseResult<Option<Course>> {
        self.executor
            .query_one(queries::GET_COURSE_BY_ID, [Value::from(id)])
            .await?
            .map(|row| decode::<CourseRow, Course>(&row))
            .transpose()
    }

    async fn find_components(&self, course_id: Uuid) -> CourseResult<Vec<Component>> {
        let rows = self
            .executor
            .query(queries::GET_COURSE_COMPONENTS, [Value::from(course_id)])
            .await?;
        decode_all::<ComponentRow, Component>(&rows)
    }

    async fn list_by_institution(&self, institution_id: Uuid, page: &PageRequest) -> CourseResult<Vec<Course>> {
        let [after_ts, after_id, fetch] = keyset_params(page);
        let rows = self
            .executor
            .query(
                queries::GET_COURSES_BY_INSTITUTION,
                [Value::from(institution_id), after_ts, after_id, fetch],
            )
            .await?;
        decode_all::<CourseRow, Course>(&rows)
    }

    async fn search_by_name(
        &self,
        institution_id: Uuid,
        name: &str,
        page: &PageRequest,
    ) -> CourseResult<Vec<Course>> {
        let [after_ts, after_id, fetch] = keyset_params(page);
        let rows = self
            .executor
            .query(
                queries::GET_COURSES_BY_NAME,
                [
                    Value::from(institution_id),
                    Value::from(name.to_string()),
                    after_ts,
                    after_id,
                    fetch,
                ],
            )
            .await?;
        debug!(matches = rows.len(), "Name search finished");
        decode_all::<CourseRow, Course>(&rows)
    }

    async fn update(&self, id: Uuid, input: &UpdateCourse) -> CourseResult<Option<Course>> {
        self.executor
            .query_one(
                queries::UPDATE_COURSE,
                [
                    Value::from(id),
                    Value::from(input.course_name.clone()),
                    Value::from(input.course_summary.clone()),
                    Value::from(input.course_description.clone()),
                    Value::from(input.image_id),
                ],
            )
            .await?
            .map(|row| decode::<CourseRow, Course>(&row))
            .transpose()
    }

    async fn delete(&self, id: Uuid) -> CourseResult<bool> {
        let affected = self
            .executor
            .execute(queries::DELETE_COURSE, [Value::from(id)])
            .await?;
        Ok(affected > 0)
    }

    async fn enroll(&self, campus_user_id: Uuid, component_id: Uuid) -> CourseResult<Enrollment> {
        let row = self
            .executor
            .query_one(
                queries::ENROLL_STUDENT,
                [Value::from(component_id), Value::from(campus_user_id)],
            )
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    CourseError::NotFound {
                        entity: "Component",
                        id: component_id,
                    }
                } else {
                    e.into()
                }
            })?
            .ok_or_else(|| CourseError::Database("enrollment insert returned no row".to_string()))?;
        decode::<EnrollmentRow, Enrollment>(&row)
    }

    async fn list_enrollments(&self, course_id: Uuid, page: &PageRequest) -> CourseResult<Vec<Enrollment>> {
        let [after_ts, after_id, fetch] = keyset_params(page);
        let rows = self
            .executor
            .query(
                queries::GET_COURSE_ENROLLMENTS,
                [Value::from(course_id), after_ts, after_id, fetch],
            )
            .await?;
        decode_all::<EnrollmentRow, Enrollment>(&rows)
    }

    async fn similar_courses(&self, embedding: &Embedding, limit: u32) -> CourseResult<Vec<CourseMatch>> {
        let rows = self
            .executor
            .query(
                queries::SIMILAR_COURSES,
                [Value::from(embedding.to_pgvector()), Value::from(i64::from(limit))],
            )
            .await?;

        rows.iter()
            .map(|row| {
                let hit = MatchRow::from_query_result(row, "")?;
                Ok(CourseMatch {
                    course_id: hit.course_id,
                    similarity: hit.similarity,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComponentInput;
    use crate::pagination::Keyset;
    use sea_orm::{DatabaseConnection, DbBackend, MockDatabase, MockExecResult};
    use std::collections::BTreeMap;
    use std::sync::Arc;

    type MockRow = BTreeMap<&'static str, Value>;

    fn repository(db: DatabaseConnection) -> PgCourseRepository {
        PgCourseRepository::new(QueryExecutor::new(db, Arc::new(queries::registry())))
    }

    fn log_of(repo: &PgCourseRepository) -> String {
        format!("{:?}", repo.executor().connection().clone().into_transaction_log())
    }

    fn id_row(column: &'static str, id: Uuid) -> Vec<MockRow> {
        vec![BTreeMap::from([(column, Value::from(id))])]
    }

    fn course_row(id: Uuid, institution_id: Uuid) -> MockRow {
        BTreeMap::from([
            ("course_id", Value::from(id)),
            ("course_name", Value::from("Rust 101")),
            ("course_summary", Value::from("Systems programming")),
            ("course_description", Value::from(None::<String>)),
            ("institution_id", Value::from(institution_id)),
            ("course_image_id", Value::from(None::<Uuid>)),
            ("created_at", Value::from(Utc::now())),
        ])
    }

    fn component(temp_id: Option<&str>, parent_temp_id: Option<&str>, files: usize) -> ComponentInput {
        ComponentInput {
            component_name: "Lesson".into(),
            component_summary: "Summary".into(),
            component_type_id: 2,
            position: 0,
            temp_id: temp_id.map(Into::into),
            parent_temp_id: parent_temp_id.map(Into::into),
            file_ids: (0..files).map(|_| Uuid::new_v4()).collect(),
            ..Default::default()
        }
    }

    fn create_input() -> CreateCourse {
        CreateCourse {
            course_name: "Rust 101".into(),
            course_summary: "Systems programming".into(),
            institution_id: Uuid::new_v4(),
            // child listed before its parent on purpose
            components: vec![component(Some("l1"), Some("m1"), 2), component(Some("m1"), None, 0)],
            ..Default::default()
        }
    }

    fn embedding() -> Embedding {
        Embedding::from_raw("text-multilingual-embedding-002", vec![3.0, 4.0], 2).unwrap()
    }

    #[test]
    fn test_creation_statements_thread_ids() {
        let input = create_input();
        let (statements, dependencies) = creation_statements(&input, Some(&embedding())).unwrap();

        let names: Vec<&str> = statements.iter().map(|s| s.reference.as_str()).collect();
        assert_eq!(
            names,
            vec![
                queries::INSERT_COURSE,
                queries::INSERT_COMPONENT, // m1
                queries::INSERT_COMPONENT, // l1
                queries::INSERT_LESSON_FILE,
                queries::INSERT_LESSON_FILE,
                queries::INSERT_EMBEDDING,
            ]
        );
        assert!(dependencies.contains(&Dependency::new(0, 1, COMPONENT_COURSE_PARAM)));
        assert!(dependencies.contains(&Dependency::new(0, 2, COMPONENT_COURSE_PARAM)));
        assert!(dependencies.contains(&Dependency::new(1, 2, COMPONENT_PARENT_PARAM)));
        assert!(dependencies.contains(&Dependency::new(2, 3, 0)));
        assert!(dependencies.contains(&Dependency::new(2, 4, 0)));
        assert!(dependencies.contains(&Dependency::new(0, 5, 0)));
        assert_eq!(statements[5].params[2], Value::from("[0.6,0.8]"));
        assert!(database::postgres::validate_dependencies(&statements, &dependencies).is_ok());
    }

    #[test]
    fn test_creation_statements_reject_bad_tree() {
        let mut input = create_input();
        input.components[1].temp_id = Some("other".into());
        assert!(matches!(
            creation_statements(&input, None),
            Err(CourseError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_create_runs_one_transaction() {
        let course_id = Uuid::new_v4();
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([
                id_row("course_id", course_id),
                id_row("component_id", Uuid::new_v4()),
                id_row("component_id", Uuid::new_v4()),
                Vec::new(),
                Vec::new(),
            ])
            .into_connection();
        let repo = repository(db);

        let created = repo.create(&create_input(), None).await.unwrap();

        assert_eq!(created, course_id);
        let log = log_of(&repo);
        assert!(log.contains("INSERT INTO lesson_file"));
        assert!(log.contains(&course_id.to_string()));
        assert!(log.contains("COMMIT"));
    }

    #[tokio::test]
    async fn test_create_is_strict_about_missing_ids() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([Vec::<MockRow>::new()])
            .into_connection();
        let repo = repository(db);

        let err = repo.create(&create_input(), None).await.unwrap_err();

        assert!(matches!(err, CourseError::TransactionFailed { .. }));
        assert!(log_of(&repo).contains("ROLLBACK"));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let id = Uuid::new_v4();
        let institution_id = Uuid::new_v4();
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([vec![course_row(id, institution_id)]])
            .append_query_results([Vec::<MockRow>::new()])
            .into_connection();
        let repo = repository(db);

        let course = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(course.course_id, id);
        assert_eq!(course.institution_id, institution_id);
        assert!(course.components.is_empty());

        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_by_institution_binds_keyset_and_fetch_size() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([Vec::<MockRow>::new()])
            .into_connection();
        let repo = repository(db);
        let after = Keyset {
            timestamp: Utc::now(),
            id: Uuid::new_v4(),
        };
        let page = PageRequest {
            after: Some(after),
            limit: 10,
        };

        repo.list_by_institution(Uuid::new_v4(), &page).await.unwrap();

        let log = log_of(&repo);
        assert!(log.contains("ORDER BY c.created_at DESC, c.course_id DESC"));
        assert!(log.contains(&after.id.to_string()));
        assert!(log.contains("Some(11)"));
    }

    #[tokio::test]
    async fn test_delete_reports_missing_rows() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = repository(db);

        assert!(repo.delete(Uuid::new_v4()).await.unwrap());
        assert!(!repo.delete(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn test_similar_courses() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([vec![BTreeMap::from([
                ("course_id", Value::from(id)),
                ("similarity", Value::from(0.92f64)),
            ])]])
            .into_connection();
        let repo = repository(db);

        let matches = repo.similar_courses(&embedding(), 5).await.unwrap();

        assert_eq!(matches, vec![CourseMatch { course_id: id, similarity: 0.92 }]);
        assert!(log_of(&repo).contains("<=>"));
    }
}
