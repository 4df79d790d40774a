//! Fetch-then-check validation of statements against the current schema.

use log::{debug, warn};
use rayon::prelude::*;

use crate::{
    ast::dml::Statement,
    check::SchemaCheck,
    definition::SchemaDefinition,
    error::{SchemaDefinitionProviderError, SchemaError},
    nonempty::{NonEmpty, Validated},
    provider::SchemaDefinitionProvider,
};

/// Validates statements against the schema supplied by a
/// [`SchemaDefinitionProvider`], using an injected [`SchemaCheck`].
///
/// Each call fetches a fresh snapshot. A provider failure ends the call with
/// that single error and the check is not run; otherwise the check's result is
/// returned unchanged. Nothing is retried.
pub struct SchemaValidator<P, C> {
    provider: P,
    check: C,
}

impl<P, C> SchemaValidator<P, C>
where
    P: SchemaDefinitionProvider,
    C: SchemaCheck,
{
    pub fn new(provider: P, check: C) -> Self {
        Self { provider, check }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn check(&self) -> &C {
        &self.check
    }

    /// Validate one statement against a freshly fetched schema.
    pub fn validate(&self, statement: &Statement) -> Validated {
        let schema = self
            .fetch()
            .map_err(|e| NonEmpty::new(SchemaError::from(e)))?;
        self.run_check(&schema, statement)
    }

    /// Validate many statements against a single snapshot.
    ///
    /// Statements are checked in parallel; results keep the input order.
    /// A provider failure is returned as-is since no statement was checked.
    pub fn validate_batch(
        &self,
        statements: &[Statement],
    ) -> Result<Vec<Validated>, SchemaDefinitionProviderError> {
        let schema = self.fetch()?;
        Ok(statements
            .par_iter()
            .map(|statement| self.run_check(&schema, statement))
            .collect())
    }

    fn fetch(&self) -> Result<SchemaDefinition, SchemaDefinitionProviderError> {
        match self.provider.fetch_schema() {
            Ok(schema) => {
                debug!("fetched schema snapshot with {} statements", schema.len());
                Ok(schema)
            }
            Err(e) => {
                warn!("{e}");
                Err(e)
            }
        }
    }

    fn run_check(&self, schema: &SchemaDefinition, statement: &Statement) -> Validated {
        let result = self.check.check(schema, statement);
        match &result {
            Ok(()) => debug!("{} on '{}' passed", statement.kind(), statement.table()),
            Err(errors) => debug!(
                "{} on '{}' failed with {} violation(s)",
                statement.kind(),
                statement.table(),
                errors.len()
            ),
        }
        result
    }
}
