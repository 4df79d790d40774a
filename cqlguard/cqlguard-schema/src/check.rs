//! Pluggable validation rules.

use std::sync::Arc;

use crate::{
    ast::dml::Statement,
    definition::SchemaDefinition,
    nonempty::{Validated, combine},
};

/// A rule set deciding whether a statement is consistent with a schema.
///
/// Implementations report every violation they find rather than stopping at
/// the first one.
pub trait SchemaCheck: Send + Sync {
    fn check(&self, schema: &SchemaDefinition, statement: &Statement) -> Validated;
}

impl<F> SchemaCheck for F
where
    F: Fn(&SchemaDefinition, &Statement) -> Validated + Send + Sync,
{
    fn check(&self, schema: &SchemaDefinition, statement: &Statement) -> Validated {
        self(schema, statement)
    }
}

/// Runs several checks in registration order and concatenates their errors.
#[derive(Default, Clone)]
pub struct CheckSet {
    checks: Vec<Arc<dyn SchemaCheck>>,
}

impl CheckSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, check: Arc<dyn SchemaCheck>) {
        self.checks.push(check);
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl SchemaCheck for CheckSet {
    fn check(&self, schema: &SchemaDefinition, statement: &Statement) -> Validated {
        self.checks.iter().fold(Ok(()), |acc, check| {
            combine(acc, check.check(schema, statement))
        })
    }
}
