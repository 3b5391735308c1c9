//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: pgvector PostgreSQL container with the workspace
//!   migrations applied (feature: "postgres")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! #[ignore = "requires Docker"]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let institution_id = builder.institution_id();
//!     let course_name = builder.name("course", "main");
//! }
//! ```

use uuid::Uuid;

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded random data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// This is the recommended way to create a builder for consistent test data.
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_course");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    fn uuid_with_tag(&self, tag: u8) -> Uuid {
        let bytes = self.seed.to_le_bytes();
        let mut uuid_bytes = [0u8; 16];
        uuid_bytes[..8].copy_from_slice(&bytes);
        uuid_bytes[8..16].copy_from_slice(&bytes);
        uuid_bytes[15] ^= tag;
        Uuid::from_bytes(uuid_bytes)
    }

    /// Deterministic institution id for this test
    pub fn institution_id(&self) -> Uuid {
        self.uuid_with_tag(0)
    }

    /// Deterministic campus user id, distinct from the institution id
    pub fn campus_user_id(&self) -> Uuid {
        self.uuid_with_tag(1)
    }

    /// Generate a unique name for testing
    ///
    /// # Arguments
    ///
    /// * `prefix` - The kind of record (e.g., "course", "component")
    /// * `suffix` - A unique identifier within the test (e.g., "main", "backup")
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("my_test");
    /// let name = builder.name("course", "main");
    /// // Returns: "test-course-12345-main"
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

/// Assertions that name what was being compared when they fail
pub mod assertions {
    use uuid::Uuid;

    /// Ids compare equal; `what` names the relation (e.g. "lesson parent").
    pub fn assert_uuid_eq(actual: Uuid, expected: Uuid, what: &str) {
        assert_eq!(actual, expected, "{what}: expected id {expected}, got {actual}");
    }

    /// Unwraps an optional column, naming it when it came back NULL.
    pub fn assert_some<T>(value: Option<T>, what: &str) -> T {
        value.unwrap_or_else(|| panic!("{what}: expected a value, got NULL"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.institution_id(), builder2.institution_id());
        assert_eq!(
            builder1.name("course", "test"),
            builder2.name("course", "test")
        );
    }

    #[test]
    fn test_data_builder_from_name() {
        let builder1 = TestDataBuilder::from_test_name("my_test");
        let builder2 = TestDataBuilder::from_test_name("my_test");

        assert_eq!(builder1.institution_id(), builder2.institution_id());
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        // Different test names should generate different data
        assert_ne!(builder1.institution_id(), builder2.institution_id());
    }

    #[test]
    fn test_data_builder_ids_are_distinct() {
        let builder = TestDataBuilder::from_test_name("ids");
        assert_ne!(builder.institution_id(), builder.campus_user_id());
    }

    #[test]
    fn test_assertions_pass_through() {
        let builder = TestDataBuilder::new(7);
        assertions::assert_uuid_eq(builder.institution_id(), builder.institution_id(), "institution");
        assert_eq!(assertions::assert_some(Some(3), "position"), 3);
    }

    #[test]
    #[should_panic(expected = "lesson parent: expected a value, got NULL")]
    fn test_assert_some_names_missing_value() {
        assertions::assert_some(None::<uuid::Uuid>, "lesson parent");
    }

    #[test]
    #[should_panic(expected = "enrolled student: expected id")]
    fn test_assert_uuid_eq_names_mismatch() {
        let builder = TestDataBuilder::new(7);
        assertions::assert_uuid_eq(builder.institution_id(), builder.campus_user_id(), "enrolled student");
    }
}
