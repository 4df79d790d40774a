//! Parsed CQL statement trees.
//!
//! Producing these from CQL text is the job of an external parser; this
//! module only fixes their shape so that providers, checks and the
//! validator agree on it.
//!
//! - [`ddl`] — data-definition statements that make up a schema snapshot
//! - [`dml`] — data-manipulation statements checked against that snapshot

pub mod ddl;
pub mod dml;

use std::fmt;

/// A possibly keyspace-qualified object name (`ks.table` or `table`).
///
/// Names are compared verbatim; case folding of unquoted identifiers is the
/// parser's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub keyspace: Option<String>,
    pub name: String,
}

impl QualifiedName {
    /// A name resolved against the session keyspace.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            keyspace: None,
            name: name.into(),
        }
    }

    pub fn qualified(keyspace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            keyspace: Some(keyspace.into()),
            name: name.into(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.keyspace {
            Some(keyspace) => write!(f, "{keyspace}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}
