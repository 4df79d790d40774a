//! The schema source consumed by the validator.

use crate::{definition::SchemaDefinition, error::SchemaDefinitionProviderError};

/// Supplies the current schema snapshot.
///
/// Called once per validation; each call may return a different snapshot.
/// Where the schema comes from (a file, a live metadata query, a cache) and
/// whether failed fetches are retried is up to the implementation.
pub trait SchemaDefinitionProvider: Send + Sync {
    fn fetch_schema(&self) -> Result<SchemaDefinition, SchemaDefinitionProviderError>;
}

impl<F> SchemaDefinitionProvider for F
where
    F: Fn() -> Result<SchemaDefinition, SchemaDefinitionProviderError> + Send + Sync,
{
    fn fetch_schema(&self) -> Result<SchemaDefinition, SchemaDefinitionProviderError> {
        self()
    }
}

/// Provider that always returns the same in-memory snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticSchemaProvider {
    schema: SchemaDefinition,
}

impl StaticSchemaProvider {
    pub fn new(schema: impl Into<SchemaDefinition>) -> Self {
        Self {
            schema: schema.into(),
        }
    }
}

impl SchemaDefinitionProvider for StaticSchemaProvider {
    fn fetch_schema(&self) -> Result<SchemaDefinition, SchemaDefinitionProviderError> {
        Ok(self.schema.clone())
    }
}
