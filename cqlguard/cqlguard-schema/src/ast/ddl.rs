//! Data-definition statements.

use cqlguard_core::CqlType;

use super::QualifiedName;

/// One data-definition statement of a schema snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum DataDefinition {
    /// `USE ks` — sets the keyspace for unqualified names that follow.
    Use(String),
    CreateKeyspace(CreateKeyspace),
    DropKeyspace {
        name: String,
        if_exists: bool,
    },
    CreateTable(CreateTable),
    AlterTable(AlterTable),
    DropTable {
        table: QualifiedName,
        if_exists: bool,
    },
    CreateType(CreateType),
    DropType {
        name: QualifiedName,
        if_exists: bool,
    },
    CreateIndex(CreateIndex),
    DropIndex {
        name: QualifiedName,
        if_exists: bool,
    },
}

/// `CREATE KEYSPACE`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateKeyspace {
    pub name: String,
    pub if_not_exists: bool,
    /// Replication map entries in declaration order, e.g. `("class", "SimpleStrategy")`.
    pub replication: Vec<(String, String)>,
    pub durable_writes: bool,
}

/// A column as declared in `CREATE TABLE` or `ALTER TABLE ... ADD`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: String,
    pub ty: CqlType,
    pub is_static: bool,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, ty: CqlType) -> Self {
        Self {
            name: name.into(),
            ty,
            is_static: false,
        }
    }

    pub fn new_static(name: impl Into<String>, ty: CqlType) -> Self {
        Self {
            is_static: true,
            ..Self::new(name, ty)
        }
    }
}

/// `CREATE TABLE`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    pub table: QualifiedName,
    pub if_not_exists: bool,
    pub columns: Vec<ColumnDefinition>,
    /// Partition key column names, in key order.
    pub partition_key: Vec<String>,
    /// Clustering column names, in clustering order.
    pub clustering_columns: Vec<String>,
}

/// `ALTER TABLE`
#[derive(Debug, Clone, PartialEq)]
pub struct AlterTable {
    pub table: QualifiedName,
    pub operation: AlterTableOperation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlterTableOperation {
    Add(Vec<ColumnDefinition>),
    Drop(Vec<String>),
    /// `(from, to)` pairs; only primary key columns may be renamed.
    Rename(Vec<(String, String)>),
}

/// `CREATE TYPE`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateType {
    pub name: QualifiedName,
    pub if_not_exists: bool,
    pub fields: Vec<(String, CqlType)>,
}

/// `CREATE INDEX`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndex {
    /// `None` lets the server derive `<table>_<column>_idx`.
    pub name: Option<String>,
    pub table: QualifiedName,
    pub column: String,
    pub if_not_exists: bool,
}

impl CreateIndex {
    pub fn effective_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("{}_{}_idx", self.table.name, self.column))
    }
}
