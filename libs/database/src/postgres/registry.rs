use std::collections::HashMap;
use tracing::warn;

/// Named SQL statements grouped by category.
///
/// Every statement is reachable under two keys: its qualified name
/// (`category.name`) and its bare name (`name`). Qualified keys never
/// collide. When two categories register the same bare name, the later
/// registration owns the bare key and a warning names both categories.
///
/// The registry is built once at startup and shared read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct QueryRegistry {
    queries: HashMap<String, String>,
    bare_owner: HashMap<String, String>,
}

impl QueryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> QueryRegistryBuilder {
        QueryRegistryBuilder::default()
    }

    /// Adds one category of statements.
    pub fn register<'a, I>(&mut self, category: &str, queries: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, sql) in queries {
            self.queries
                .insert(format!("{category}.{name}"), sql.to_string());

            if let Some(previous) = self
                .bare_owner
                .insert(name.to_string(), category.to_string())
                && previous != category
            {
                warn!(
                    query = name,
                    previous_category = %previous,
                    category,
                    "Bare query name registered twice; the later category wins"
                );
            }
            self.queries.insert(name.to_string(), sql.to_string());
        }
    }

    /// SQL registered under `name` (bare or qualified).
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.queries.get(name).map(String::as_str)
    }

    /// Registered SQL for `reference`, or `reference` itself as literal SQL.
    pub fn resolve<'a>(&'a self, reference: &'a str) -> &'a str {
        self.lookup(reference).unwrap_or(reference)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.queries.contains_key(name)
    }

    /// Number of addressable keys (bare plus qualified).
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

/// Collects categories in call order, so collisions resolve deterministically.
#[derive(Debug, Default)]
pub struct QueryRegistryBuilder {
    registry: QueryRegistry,
}

impl QueryRegistryBuilder {
    pub fn namespace<'a, I>(mut self, category: &str, queries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.registry.register(category, queries);
        self
    }

    pub fn build(self) -> QueryRegistry {
        self.registry
    }
}
