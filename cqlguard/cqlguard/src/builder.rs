//! Assembly of a [`SchemaValidator`] from registered checks.

use std::sync::Arc;

#[cfg(feature = "rules")]
use cqlguard_rules::StructuralCheck;
use cqlguard_schema::{CheckSet, SchemaCheck, SchemaDefinitionProvider, SchemaValidator};
use log::debug;

/// Builder for a [`SchemaValidator`] running a [`CheckSet`].
///
/// Checks run in registration order and their errors are concatenated in
/// that order.
#[derive(Default)]
pub struct SchemaValidatorBuilder {
    checks: CheckSet,
}

impl SchemaValidatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a check.
    pub fn with_check(self, check: Box<dyn SchemaCheck>) -> Self {
        self.with_shared_check(Arc::from(check))
    }

    /// Register a check that is also used elsewhere.
    pub fn with_shared_check(mut self, check: Arc<dyn SchemaCheck>) -> Self {
        self.checks.push(check);
        self
    }

    /// Register all built-in checks ([`StructuralCheck`](cqlguard_rules::StructuralCheck)).
    pub fn with_default_checks(self) -> Self {
        let s = self;
        #[cfg(feature = "rules")]
        let s = s.with_check(Box::new(StructuralCheck::new()));
        s
    }

    /// Build a validator reading schema snapshots from `provider`.
    pub fn build<P: SchemaDefinitionProvider>(self, provider: P) -> SchemaValidator<P, CheckSet> {
        debug!("building schema validator with {} check(s)", self.checks.len());
        SchemaValidator::new(provider, self.checks)
    }
}
