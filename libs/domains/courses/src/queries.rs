//! Named SQL for the courses domain.
//!
//! Parameters are positional. Optional keyset bounds are passed as typed
//! NULLs, so the same statement serves the first page and every later one.
//! Vectors travel as text and are cast with `::text::vector`.

use database::postgres::QueryRegistry;

pub const COURSES: &str = "courses";
pub const ENROLLMENTS: &str = "enrollments";
pub const SEARCH: &str = "search";

pub const INSERT_COURSE: &str = "courses.insert_course";
pub const INSERT_COMPONENT: &str = "courses.insert_component";
pub const INSERT_LESSON_FILE: &str = "courses.insert_lesson_file";
pub const INSERT_EMBEDDING: &str = "courses.insert_embedding";
pub const GET_COURSE_BY_ID: &str = "courses.get_course_by_id";
pub const GET_COURSE_COMPONENTS: &str = "courses.get_course_components";
pub const GET_COURSES_BY_INSTITUTION: &str = "courses.get_courses_by_institution";
pub const GET_COURSES_BY_NAME: &str = "courses.get_courses_by_name";
pub const UPDATE_COURSE: &str = "courses.update_course";
pub const DELETE_COURSE: &str = "courses.delete_course";
pub const ENROLL_STUDENT: &str = "enrollments.enroll_student";
pub const GET_COURSE_ENROLLMENTS: &str = "enrollments.get_course_enrollments";
pub const SIMILAR_COURSES: &str = "search.similar_courses";

const COURSE_COLUMNS: &str = "c.course_id, c.course_name, c.course_summary, c.course_description, \
     c.institution_id, c.course_image_id, c.created_at";

fn course_queries() -> Vec<(&'static str, String)> {
    vec![
        (
            "insert_course",
            "INSERT INTO course (course_name, course_summary, course_description, institution_id, course_image_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING course_id"
                .to_string(),
        ),
        (
            "insert_component",
            "INSERT INTO component (course_id, component_name, component_summary, context_body, component_type_id, position, parent_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING component_id"
                .to_string(),
        ),
        (
            "insert_lesson_file",
            "INSERT INTO lesson_file (component_id, file_id) VALUES ($1, $2)".to_string(),
        ),
        (
            "insert_embedding",
            "INSERT INTO course_embedding (course_id, model, embedding) \
             VALUES ($1, $2, $3::text::vector) \
             RETURNING course_id"
                .to_string(),
        ),
        (
            "get_course_by_id",
            format!("SELECT {COURSE_COLUMNS} FROM course c WHERE c.course_id = $1"),
        ),
        (
            "get_course_components",
            "SELECT c.component_id, c.component_name, c.component_summary, c.context_body, \
                    c.component_type_id, c.position, c.parent_id, c.course_id, \
                    COALESCE(array_agg(lf.file_id ORDER BY lf.file_id) FILTER (WHERE lf.file_id IS NOT NULL), '{}') AS file_ids \
             FROM component c \
             LEFT JOIN lesson_file lf ON c.component_id = lf.component_id \
             WHERE c.course_id = $1 \
             GROUP BY c.component_id \
             ORDER BY c.position, c.component_id"
                .to_string(),
        ),
        (
            "get_courses_by_institution",
            format!(
                "SELECT {COURSE_COLUMNS} FROM course c \
                 WHERE c.institution_id = $1 \
                   AND ($2::timestamptz IS NULL OR (c.created_at, c.course_id) < ($2::timestamptz, $3::uuid)) \
                 ORDER BY c.created_at DESC, c.course_id DESC \
                 LIMIT $4"
            ),
        ),
        (
            // Ordered by the keyset, not by rank, so cursors stay consistent.
            "get_courses_by_name",
            format!(
                "SELECT {COURSE_COLUMNS} FROM course c \
                 WHERE c.institution_id = $1 \
                   AND c.tsv_course_name @@ plainto_tsquery('spanish', $2) \
                   AND ($3::timestamptz IS NULL OR (c.created_at, c.course_id) < ($3::timestamptz, $4::uuid)) \
                 ORDER BY c.created_at DESC, c.course_id DESC \
                 LIMIT $5"
            ),
        ),
        (
            "update_course",
            "UPDATE course c SET \
                 course_name = COALESCE($2, c.course_name), \
                 course_summary = COALESCE($3, c.course_summary), \
                 course_description = COALESCE($4, c.course_description), \
                 course_image_id = COALESCE($5, c.course_image_id) \
             WHERE c.course_id = $1 \
             RETURNING c.course_id, c.course_name, c.course_summary, c.course_description, \
                       c.institution_id, c.course_image_id, c.created_at"
                .to_string(),
        ),
        (
            "delete_course",
            "DELETE FROM course WHERE course_id = $1".to_string(),
        ),
    ]
}

fn enrollment_queries() -> Vec<(&'static str, String)> {
    vec![
        (
            "enroll_student",
            "INSERT INTO course_enrollment (component_id, campus_user_id) VALUES ($1, $2) \
             RETURNING course_enrollment_id, component_id, campus_user_id, enrolled_at"
                .to_string(),
        ),
        (
            "get_course_enrollments",
            "SELECT ce.course_enrollment_id, ce.component_id, ce.campus_user_id, ce.enrolled_at \
             FROM course_enrollment ce \
             JOIN component c ON ce.component_id = c.component_id \
             WHERE c.course_id = $1 \
               AND ($2::timestamptz IS NULL OR (ce.enrolled_at, ce.course_enrollment_id) < ($2::timestamptz, $3::uuid)) \
             ORDER BY ce.enrolled_at DESC, ce.course_enrollment_id DESC \
             LIMIT $4"
                .to_string(),
        ),
    ]
}

fn search_queries() -> Vec<(&'static str, String)> {
    vec![(
        "similar_courses",
        "SELECT ce.course_id, (1 - (ce.embedding <=> $1::text::vector))::float8 AS similarity \
         FROM course_embedding ce \
         ORDER BY ce.embedding <=> $1::text::vector \
         LIMIT $2"
            .to_string(),
    )]
}

fn register(registry: &mut QueryRegistry, category: &str, queries: &[(&'static str, String)]) {
    registry.register(
        category,
        queries.iter().map(|(name, sql)| (*name, sql.as_str())),
    );
}

/// Registry with every statement of this domain.
pub fn registry() -> QueryRegistry {
    let mut registry = QueryRegistry::new();
    register(&mut registry, COURSES, &course_queries());
    register(&mut registry, ENROLLMENTS, &enrollment_queries());
    register(&mut registry, SEARCH, &search_queries());
    registry
}
