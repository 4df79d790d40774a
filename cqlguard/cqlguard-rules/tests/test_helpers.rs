//! Schema and statement fixtures for rule tests.

use cqlguard_core::CqlType;
use cqlguard_schema::{
    Assignment, ColumnDefinition, CreateKeyspace, CreateTable, CreateType, DataDefinition,
    Insert, Literal, QualifiedName, Relation, SchemaDefinition, Select, Selection, Term,
};

pub fn create_keyspace(name: &str) -> DataDefinition {
    DataDefinition::CreateKeyspace(CreateKeyspace {
        name: name.to_string(),
        if_not_exists: false,
        replication: vec![("class".to_string(), "SimpleStrategy".to_string())],
        durable_writes: true,
    })
}

pub fn create_table(
    name: &str,
    columns: Vec<ColumnDefinition>,
    partition_key: &[&str],
    clustering: &[&str],
) -> DataDefinition {
    DataDefinition::CreateTable(CreateTable {
        table: QualifiedName::new(name),
        if_not_exists: false,
        columns,
        partition_key: partition_key.iter().map(|s| s.to_string()).collect(),
        clustering_columns: clustering.iter().map(|s| s.to_string()).collect(),
    })
}

/// `shop.users(id uuid PRIMARY KEY, ...)` and
/// `shop.orders(customer, placed, ...)` clustered by `placed`.
pub fn shop_schema() -> SchemaDefinition {
    SchemaDefinition::new(vec![
        create_keyspace("shop"),
        DataDefinition::Use("shop".to_string()),
        DataDefinition::CreateType(CreateType {
            name: QualifiedName::new("address"),
            if_not_exists: false,
            fields: vec![
                ("street".to_string(), CqlType::Text),
                ("zip".to_string(), CqlType::Int),
            ],
        }),
        create_table(
            "users",
            vec![
                ColumnDefinition::new("id", CqlType::Uuid),
                ColumnDefinition::new("name", CqlType::Text),
                ColumnDefinition::new("age", CqlType::Int),
                ColumnDefinition::new("emails", CqlType::Set(Box::new(CqlType::Text))),
                ColumnDefinition::new(
                    "prefs",
                    CqlType::Map(Box::new(CqlType::Text), Box::new(CqlType::Boolean)),
                ),
                ColumnDefinition::new(
                    "home",
                    CqlType::Frozen(Box::new(CqlType::Udt("address".to_string()))),
                ),
            ],
            &["id"],
            &[],
        ),
        create_table(
            "orders",
            vec![
                ColumnDefinition::new("customer", CqlType::Uuid),
                ColumnDefinition::new("placed", CqlType::Timestamp),
                ColumnDefinition::new_static("tier", CqlType::Text),
                ColumnDefinition::new("total", CqlType::Decimal),
                ColumnDefinition::new("quantity", CqlType::SmallInt),
            ],
            &["customer"],
            &["placed"],
        ),
    ])
}

pub fn lit(literal: Literal) -> Term {
    Term::literal(literal)
}

pub fn text(value: &str) -> Literal {
    Literal::String(value.to_string())
}

pub fn insert(table: &str, values: Vec<(&str, Term)>) -> Insert {
    Insert {
        table: QualifiedName::new(table),
        values: values
            .into_iter()
            .map(|(column, value)| Assignment::new(column, value))
            .collect(),
        if_not_exists: false,
    }
}

pub fn select(table: QualifiedName, columns: &[&str], where_clause: Vec<Relation>) -> Select {
    Select {
        table,
        selection: if columns.is_empty() {
            Selection::All
        } else {
            Selection::Columns(columns.iter().map(|s| s.to_string()).collect())
        },
        where_clause,
        limit: None,
        allow_filtering: false,
    }
}
