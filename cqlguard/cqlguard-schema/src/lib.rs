//! Schema-aware validation of CQL statements.
//!
//! A [`SchemaValidator`] asks a [`SchemaDefinitionProvider`] for the current
//! [`SchemaDefinition`] and runs an injected [`SchemaCheck`] over it and the
//! statement. Failures accumulate into a [`NonEmpty`] list of [`SchemaError`]s
//! so a caller sees every violation in one pass.
//!
//! Key components:
//! - [`ast`] — DDL / DML statement trees
//! - [`catalog`] — replay of a snapshot into keyspaces, tables and columns
//! - [`nonempty`] — the accumulating failure channel

pub mod ast;
pub mod catalog;
mod check;
mod definition;
mod error;
pub mod nonempty;
mod provider;
mod validator;

pub use ast::{
    QualifiedName,
    ddl::{
        AlterTable, AlterTableOperation, ColumnDefinition, CreateIndex, CreateKeyspace,
        CreateTable, CreateType, DataDefinition,
    },
    dml::{
        Assignment, Delete, Insert, Literal, Operator, Relation, Select, Selection, Statement,
        Term, Update,
    },
};
pub use catalog::{Catalog, ColumnDef, ColumnKind, KeyspaceDef, TableDef, UserTypeDef};
pub use check::{CheckSet, SchemaCheck};
pub use definition::SchemaDefinition;
pub use error::{SchemaDefinitionProviderError, SchemaError, SchemaValidatorError};
pub use nonempty::{NonEmpty, Validated, Violations, combine};
pub use provider::{SchemaDefinitionProvider, StaticSchemaProvider};
pub use validator::SchemaValidator;
