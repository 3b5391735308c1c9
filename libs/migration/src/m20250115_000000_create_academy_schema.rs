use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Applied in order by `up`; `down` drops the tables in reverse.
const UP: &[&str] = &[
    // gen_random_uuid() and pgvector
    "CREATE EXTENSION IF NOT EXISTS pgcrypto",
    "CREATE EXTENSION IF NOT EXISTS vector",
    r#"
    CREATE TABLE IF NOT EXISTS course (
        course_id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        course_name TEXT NOT NULL,
        course_summary TEXT NOT NULL,
        course_description TEXT,
        institution_id UUID NOT NULL,
        course_image_id UUID,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        tsv_course_name TSVECTOR GENERATED ALWAYS AS (to_tsvector('spanish', coalesce(course_name, ''))) STORED
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_course_institution_keyset ON course (institution_id, created_at DESC, course_id DESC)",
    "CREATE INDEX IF NOT EXISTS idx_course_tsv_course_name ON course USING GIN (tsv_course_name)",
    r#"
    CREATE TABLE IF NOT EXISTS component (
        component_id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        course_id UUID NOT NULL REFERENCES course (course_id) ON DELETE CASCADE,
        component_name TEXT NOT NULL,
        component_summary TEXT NOT NULL,
        context_body TEXT,
        component_type_id INTEGER NOT NULL CHECK (component_type_id >= 1),
        position INTEGER NOT NULL DEFAULT 0 CHECK (position >= 0),
        parent_id UUID REFERENCES component (component_id) ON DELETE CASCADE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_component_course_position ON component (course_id, position)",
    "CREATE INDEX IF NOT EXISTS idx_component_parent ON component (parent_id)",
    r#"
    CREATE TABLE IF NOT EXISTS lesson_file (
        lesson_file_id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        component_id UUID NOT NULL REFERENCES component (component_id) ON DELETE CASCADE,
        file_id UUID NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_lesson_file_component ON lesson_file (component_id)",
    r#"
    CREATE TABLE IF NOT EXISTS course_enrollment (
        course_enrollment_id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        component_id UUID NOT NULL REFERENCES component (component_id) ON DELETE CASCADE,
        campus_user_id UUID NOT NULL,
        enrolled_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_course_enrollment_keyset ON course_enrollment (component_id, enrolled_at DESC, course_enrollment_id DESC)",
    r#"
    CREATE TABLE IF NOT EXISTS course_embedding (
        course_id UUID PRIMARY KEY REFERENCES course (course_id) ON DELETE CASCADE,
        model TEXT NOT NULL,
        embedding VECTOR(768) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_course_embedding_hnsw ON course_embedding USING hnsw (embedding vector_cosine_ops)",
];

const DOWN: &[&str] = &[
    "DROP TABLE IF EXISTS course_embedding",
    "DROP TABLE IF EXISTS course_enrollment",
    "DROP TABLE IF EXISTS lesson_file",
    "DROP TABLE IF EXISTS component",
    "DROP TABLE IF EXISTS course",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for statement in UP {
            db.execute_unprepared(statement).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for statement in DOWN {
            db.execute_unprepared(statement).await?;
        }
        Ok(())
    }
}
