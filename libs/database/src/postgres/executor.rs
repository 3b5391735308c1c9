use chrono::{DateTime, Utc};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, QueryResult, Statement,
    TransactionTrait, Value,
};
use std::sync::Arc;
use tracing::{debug, error, instrument};
use uuid::Uuid;

use super::QueryRegistry;
use crate::common::{DatabaseError, DatabaseResult};

/// Rows returned by one statement
pub type ResultSet = Vec<QueryResult>;

/// One statement of a transaction: a registry name (or literal SQL) and its
/// positional parameters.
///
/// A parameter that will be filled by a [`Dependency`] still needs a slot;
/// pass `Value::from(None::<Uuid>)` or similar as a placeholder.
#[derive(Debug, Clone)]
pub struct TxStatement {
    pub reference: String,
    pub params: Vec<Value>,
}

impl TxStatement {
    pub fn new<I>(reference: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self {
            reference: reference.into(),
            params: params.into_iter().collect(),
        }
    }
}

/// Copies the first column of the first row returned by statement
/// `source_index` into parameter `target_param_index` of statement
/// `target_index`, before the target runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    pub source_index: usize,
    pub target_index: usize,
    pub target_param_index: usize,
}

impl Dependency {
    pub const fn new(source_index: usize, target_index: usize, target_param_index: usize) -> Self {
        Self {
            source_index,
            target_index,
            target_param_index,
        }
    }
}

/// What to do when a dependency's source statement yields no usable scalar
/// (no rows, NULL, or an unsupported column type).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DependencyPolicy {
    /// Leave the target parameter as the caller supplied it
    #[default]
    Lenient,
    /// Roll back with [`DatabaseError::UnresolvedDependency`]
    Strict,
}

/// Checks every dependency against the statement list before any
/// connection is taken from the pool.
pub fn validate_dependencies(
    statements: &[TxStatement],
    dependencies: &[Dependency],
) -> DatabaseResult<()> {
    for dep in dependencies {
        if dep.target_index <= dep.source_index {
            return Err(DatabaseError::InvalidDependency(format!(
                "statement {} cannot depend on statement {} which runs after it",
                dep.target_index, dep.source_index
            )));
        }
        let Some(target) = statements.get(dep.target_index) else {
            return Err(DatabaseError::InvalidDependency(format!(
                "target statement {} out of range ({} statements)",
                dep.target_index,
                statements.len()
            )));
        };
        if dep.target_param_index >= target.params.len() {
            return Err(DatabaseError::InvalidDependency(format!(
                "statement {} has {} parameters, cannot fill parameter {}",
                dep.target_index,
                target.params.len(),
                dep.target_param_index
            )));
        }
    }
    Ok(())
}

/// First column of the first row, if it decodes to a supported scalar.
pub fn first_scalar(rows: &[QueryResult]) -> Option<Value> {
    let row = rows.first()?;

    row.try_get_by_index::<Uuid>(0)
        .map(Value::from)
        .or_else(|_| row.try_get_by_index::<i64>(0).map(Value::from))
        .or_else(|_| row.try_get_by_index::<i32>(0).map(Value::from))
        .or_else(|_| row.try_get_by_index::<i16>(0).map(Value::from))
        .or_else(|_| row.try_get_by_index::<String>(0).map(Value::from))
        .or_else(|_| row.try_get_by_index::<bool>(0).map(Value::from))
        .or_else(|_| row.try_get_by_index::<f64>(0).map(Value::from))
        .or_else(|_| row.try_get_by_index::<DateTime<Utc>>(0).map(Value::from))
        .ok()
}

/// Writes `value` into the parameter slot named by `dependency`.
///
/// Slots are checked by [`validate_dependencies`]; an out-of-range slot is ignored.
pub fn apply_dependency(statements: &mut [TxStatement], dependency: &Dependency, value: Value) {
    if let Some(slot) = statements
        .get_mut(dependency.target_index)
        .and_then(|stmt| stmt.params.get_mut(dependency.target_param_index))
    {
        *slot = value;
    }
}

fn resolve_dependencies(
    statements: &mut [TxStatement],
    dependencies: &[Dependency],
    executed: usize,
    rows: &[QueryResult],
    policy: DependencyPolicy,
) -> DatabaseResult<()> {
    let mut pending = dependencies
        .iter()
        .filter(|dep| dep.source_index == executed)
        .peekable();
    let Some(first) = pending.peek().copied() else {
        return Ok(());
    };

    match first_scalar(rows) {
        Some(value) => {
            for dep in pending {
                apply_dependency(statements, dep, value.clone());
            }
            Ok(())
        }
        None if policy == DependencyPolicy::Strict => Err(DatabaseError::UnresolvedDependency {
            source_index: first.source_index,
            target_index: first.target_index,
            target_param_index: first.target_param_index,
        }),
        None => {
            debug!(
                source_index = executed,
                "Dependency source returned no value, leaving target parameters unchanged"
            );
            Ok(())
        }
    }
}

async fn rollback(txn: DatabaseTransaction, failed_index: usize) {
    if let Err(e) = txn.rollback().await {
        // The connection is discarded by the pool either way
        error!(failed_index, error = %e, "Rollback failed");
    }
}

/// Runs named or literal SQL against the pool.
///
/// Single statements borrow a pooled connection for the duration of one call.
/// [`QueryExecutor::run_transaction`] holds exactly one connection from
/// `BEGIN` to `COMMIT`/`ROLLBACK`; dropping its future mid-flight rolls back.
#[derive(Clone)]
pub struct QueryExecutor {
    db: DatabaseConnection,
    registry: Arc<QueryRegistry>,
    policy: DependencyPolicy,
}

impl QueryExecutor {
    pub fn new(db: DatabaseConnection, registry: Arc<QueryRegistry>) -> Self {
        Self {
            db,
            registry,
            policy: DependencyPolicy::default(),
        }
    }

    /// Default policy for [`QueryExecutor::run_transaction`]
    pub fn with_policy(mut self, policy: DependencyPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn registry(&self) -> &QueryRegistry {
        &self.registry
    }

    fn statement<I>(&self, reference: &str, params: I) -> Statement
    where
        I: IntoIterator<Item = Value>,
    {
        let sql = self.registry.resolve(reference);
        Statement::from_sql_and_values(DbBackend::Postgres, sql, params)
    }

    /// Runs one statement and returns all rows.
    #[instrument(skip(self, params), level = "debug")]
    pub async fn query<I>(&self, reference: &str, params: I) -> DatabaseResult<ResultSet>
    where
        I: IntoIterator<Item = Value>,
    {
        let stmt = self.statement(reference, params);
        Ok(self.db.query_all_raw(stmt).await?)
    }

    /// Runs one statement and returns its first row, if any.
    #[instrument(skip(self, params), level = "debug")]
    pub async fn query_one<I>(&self, reference: &str, params: I) -> DatabaseResult<Option<QueryResult>>
    where
        I: IntoIterator<Item = Value>,
    {
        let stmt = self.statement(reference, params);
        Ok(self.db.query_one_raw(stmt).await?)
    }

    /// Runs one statement and returns the number of affected rows.
    #[instrument(skip(self, params), level = "debug")]
    pub async fn execute<I>(&self, reference: &str, params: I) -> DatabaseResult<u64>
    where
        I: IntoIterator<Item = Value>,
    {
        let stmt = self.statement(reference, params);
        Ok(self.db.execute_raw(stmt).await?.rows_affected())
    }

    /// [`QueryExecutor::run_transaction_with`] using the executor's default policy.
    pub async fn run_transaction(
        &self,
        statements: Vec<TxStatement>,
        dependencies: &[Dependency],
    ) -> DatabaseResult<Vec<ResultSet>> {
        self.run_transaction_with(statements, dependencies, self.policy)
            .await
    }

    /// Executes `statements` in order inside one transaction.
    ///
    /// After statement `i` runs, every dependency with `source_index == i`
    /// is applied to its (later) target. Any failure rolls back the whole
    /// transaction; statement errors come back as
    /// [`DatabaseError::TransactionFailed`] with the failing index. A failed
    /// `BEGIN` reports index 0 and a failed `COMMIT` reports
    /// `index == statements.len()`.
    #[instrument(skip_all, fields(statements = statements.len(), dependencies = dependencies.len()))]
    pub async fn run_transaction_with(
        &self,
        mut statements: Vec<TxStatement>,
        dependencies: &[Dependency],
        policy: DependencyPolicy,
    ) -> DatabaseResult<Vec<ResultSet>> {
        validate_dependencies(&statements, dependencies)?;
        if statements.is_empty() {
            return Ok(Vec::new());
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|source| DatabaseError::TransactionFailed { index: 0, source })?;
        let mut results = Vec::with_capacity(statements.len());

        for index in 0..statements.len() {
            // Every dependency targeting `index` came from an earlier statement,
            // so its parameters are final.
            let params = std::mem::take(&mut statements[index].params);
            let stmt = self.statement(&statements[index].reference, params);

            let rows = match txn.query_all_raw(stmt).await {
                Ok(rows) => rows,
                Err(source) => {
                    error!(index, error = %source, "Statement failed, rolling back");
                    rollback(txn, index).await;
                    return Err(DatabaseError::TransactionFailed { index, source });
                }
            };

            if let Err(e) = resolve_dependencies(&mut statements, dependencies, index, &rows, policy) {
                error!(index, error = %e, "Dependency unresolved, rolling back");
                rollback(txn, index).await;
                return Err(e);
            }
            results.push(rows);
        }

        let count = statements.len();
        txn.commit()
            .await
            .map_err(|source| DatabaseError::TransactionFailed {
                index: count,
                source,
            })?;
        debug!(statements = count, "Transaction committed");

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbErr, MockDatabase, MockExecResult};
    use std::collections::BTreeMap;

    fn registry() -> Arc<QueryRegistry> {
        Arc::new(
            QueryRegistry::builder()
                .namespace(
                    "courses",
                    [
                        ("insert_course", "INSERT INTO course (course_name) VALUES ($1) RETURNING course_id"),
                        (
                            "insert_component",
                            "INSERT INTO component (course_id, component_name) VALUES ($1, $2) RETURNING component_id",
                        ),
                    ],
                )
                .build(),
        )
    }

    fn placeholder() -> Value {
        Value::from(None::<Uuid>)
    }

    fn two_statements() -> Vec<TxStatement> {
        vec![
            TxStatement::new("insert_course", [Value::from("Rust 101")]),
            TxStatement::new("courses.insert_component", [placeholder(), Value::from("Ownership")]),
        ]
    }

    fn id_row(column: &'static str, id: Uuid) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([(column, Value::from(id))])
    }

    fn log_of(executor: &QueryExecutor) -> String {
        format!("{:?}", executor.connection().clone().into_transaction_log())
    }

    #[test]
    fn test_validate_rejects_backward_dependency() {
        let statements = two_statements();
        let err = validate_dependencies(&statements, &[Dependency::new(1, 0, 0)]).unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidDependency(_)));

        let err = validate_dependencies(&statements, &[Dependency::new(1, 1, 0)]).unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidDependency(_)));
    }

    #[test]
    fn test_validate_rejects_out_of_range_slots() {
        let statements = two_statements();
        assert!(validate_dependencies(&statements, &[Dependency::new(0, 2, 0)]).is_err());
        assert!(validate_dependencies(&statements, &[Dependency::new(0, 1, 2)]).is_err());
        assert!(validate_dependencies(&statements, &[Dependency::new(0, 1, 1)]).is_ok());
    }

    #[test]
    fn test_apply_dependency_overwrites_only_target_slot() {
        let mut statements = two_statements();
        let id = Uuid::new_v4();

        apply_dependency(&mut statements, &Dependency::new(0, 1, 0), Value::from(id));

        assert_eq!(statements[1].params[0], Value::from(id));
        assert_eq!(statements[1].params[1], Value::from("Ownership"));
        assert_eq!(statements[0].params[0], Value::from("Rust 101"));
    }

    #[tokio::test]
    async fn test_dependency_threads_returned_id_into_next_statement() {
        let course_id = Uuid::new_v4();
        let component_id = Uuid::new_v4();
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([
                vec![id_row("course_id", course_id)],
                vec![id_row("component_id", component_id)],
            ])
            .into_connection();
        let executor = QueryExecutor::new(db, registry());

        let results = executor
            .run_transaction(two_statements(), &[Dependency::new(0, 1, 0)])
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(first_scalar(&results[1]), Some(Value::from(component_id)));

        let log = log_of(&executor);
        assert!(log.contains("INSERT INTO component"));
        assert!(log.contains(&course_id.to_string()));
        assert!(log.contains("COMMIT"));
        assert!(!log.contains("ROLLBACK"));
    }

    #[tokio::test]
    async fn test_begin_failure_is_transaction_failed() {
        let executor = QueryExecutor::new(DatabaseConnection::default(), registry());

        let err = executor
            .run_transaction(two_statements(), &[Dependency::new(0, 1, 0)])
            .await
            .unwrap_err();

        assert!(matches!(err, DatabaseError::TransactionFailed { index: 0, .. }));
        assert_eq!(err.statement_index(), Some(0));
    }

    #[tokio::test]
    async fn test_failing_statement_rolls_back_everything() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([vec![id_row("course_id", Uuid::new_v4())]])
            .append_query_errors([DbErr::Custom("violates foreign key".to_string())])
            .into_connection();
        let executor = QueryExecutor::new(db, registry());

        let err = executor
            .run_transaction(two_statements(), &[Dependency::new(0, 1, 0)])
            .await
            .unwrap_err();

        assert!(matches!(err, DatabaseError::TransactionFailed { index: 1, .. }));
        assert_eq!(err.statement_index(), Some(1));
        let log = log_of(&executor);
        assert!(log.contains("ROLLBACK"));
        assert!(!log.contains("COMMIT"));
    }

    #[tokio::test]
    async fn test_lenient_policy_keeps_placeholder_on_empty_source() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .append_query_results([vec![id_row("component_id", Uuid::new_v4())]])
            .into_connection();
        let executor = QueryExecutor::new(db, registry());

        let results = executor
            .run_transaction(two_statements(), &[Dependency::new(0, 1, 0)])
            .await
            .unwrap();

        assert!(results[0].is_empty());
        assert!(log_of(&executor).contains("COMMIT"));
    }

    #[tokio::test]
    async fn test_strict_policy_fails_on_empty_source() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .into_connection();
        let executor = QueryExecutor::new(db, registry()).with_policy(DependencyPolicy::Strict);

        let err = executor
            .run_transaction(two_statements(), &[Dependency::new(0, 1, 0)])
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DatabaseError::UnresolvedDependency {
                source_index: 0,
                target_index: 1,
                target_param_index: 0
            }
        ));
        let log = log_of(&executor);
        assert!(log.contains("ROLLBACK"));
        assert!(!log.contains("INSERT INTO component"));
    }

    #[tokio::test]
    async fn test_invalid_dependency_never_touches_the_database() {
        let db = MockDatabase::new(DbBackend::Postgres).into_connection();
        let executor = QueryExecutor::new(db, registry());

        let err = executor
            .run_transaction(two_statements(), &[Dependency::new(1, 0, 0)])
            .await
            .unwrap_err();

        assert!(matches!(err, DatabaseError::InvalidDependency(_)));
        assert_eq!(log_of(&executor), "[]");
    }

    #[tokio::test]
    async fn test_single_statement_raw_sql_fallback() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 2,
            }])
            .into_connection();
        let executor = QueryExecutor::new(db, registry());

        let affected = executor
            .execute("DELETE FROM lesson_file WHERE component_id = $1", [Value::from(Uuid::nil())])
            .await
            .unwrap();

        assert_eq!(affected, 2);
        assert!(log_of(&executor).contains("DELETE FROM lesson_file"));
    }

    #[test]
    fn test_first_scalar_of_empty_result_is_none() {
        assert!(first_scalar(&[]).is_none());
    }
}
