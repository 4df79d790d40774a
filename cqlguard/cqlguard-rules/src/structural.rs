//! Name, type and primary key checks against a replayed schema snapshot.

use std::collections::HashSet;

use cqlguard_core::CqlType;
use cqlguard_schema::{
    Assignment, Catalog, ColumnDef, Delete, Insert, KeyspaceDef, Literal, NonEmpty, Operator,
    Relation, SchemaCheck, SchemaDefinition, SchemaError, Select, Selection, Statement,
    TableDef, Term, Update, Validated, Violations,
};
use log::debug;

use crate::literal::literal_fits;

/// Checks that a statement is consistent with the schema snapshot.
///
/// The snapshot is replayed into a [`Catalog`] first; if that fails, the
/// replay errors are returned and the statement is not inspected. Otherwise:
///
/// - the target keyspace (explicit or from `USE`) and table must exist
/// - every column the statement names must exist
/// - literal values must fit the column type; bind markers and `NULL` always do
/// - an `INSERT` must set every primary key column
/// - an `UPDATE` must not assign, and a `DELETE` must not remove, primary key
///   columns
/// - `CONTAINS` needs a collection column, `CONTAINS KEY` a map column
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuralCheck;

impl StructuralCheck {
    pub fn new() -> Self {
        Self
    }
}

impl SchemaCheck for StructuralCheck {
    fn check(&self, schema: &SchemaDefinition, statement: &Statement) -> Validated {
        let catalog = Catalog::from_definition(schema).inspect_err(|errors| {
            debug!("schema snapshot failed to replay: {} error(s)", errors.len());
        })?;

        let target = statement.table();
        let Some(keyspace_name) = catalog.resolve_keyspace(target) else {
            return fail(format!("no keyspace specified for table '{target}'"));
        };
        let Some(keyspace) = catalog.keyspace(keyspace_name) else {
            return fail(format!("unknown keyspace '{keyspace_name}'"));
        };
        let Some(table) = keyspace.tables.get(&target.name) else {
            return fail(format!(
                "unknown table '{}' in keyspace '{keyspace_name}'",
                target.name
            ));
        };

        let mut scope = TableScope {
            keyspace,
            table,
            violations: Violations::new(),
        };
        match statement {
            Statement::Insert(insert) => scope.check_insert(insert),
            Statement::Update(update) => scope.check_update(update),
            Statement::Select(select) => scope.check_select(select),
            Statement::Delete(delete) => scope.check_delete(delete),
        }
        debug!(
            "{} on {keyspace_name}.{}: {} violation(s)",
            statement.kind(),
            table.name,
            scope.violations.len()
        );
        scope.violations.finish()
    }
}

fn fail(message: String) -> Validated {
    Err(NonEmpty::new(SchemaError::validator(message)))
}

struct TableScope<'a> {
    keyspace: &'a KeyspaceDef,
    table: &'a TableDef,
    violations: Violations,
}

impl<'a> TableScope<'a> {
    fn check_insert(&mut self, insert: &Insert) {
        let mut seen = HashSet::new();
        for assignment in &insert.values {
            if let Some(column) = self.assigned_column(&mut seen, assignment) {
                self.check_term(column, &column.ty, &assignment.value);
            }
        }
        let table = self.table;
        for key in table.primary_key() {
            if !seen.contains(key.name.as_str()) {
                self.violations.report(format!(
                    "missing primary key column '{}' in INSERT into '{}'",
                    key.name, table.name
                ));
            }
        }
    }

    fn check_update(&mut self, update: &Update) {
        let mut seen = HashSet::new();
        for assignment in &update.assignments {
            let Some(column) = self.assigned_column(&mut seen, assignment) else {
                continue;
            };
            if column.kind.is_primary_key() {
                self.violations.report(format!(
                    "cannot assign primary key column '{}' in UPDATE",
                    column.name
                ));
            } else {
                self.check_term(column, &column.ty, &assignment.value);
            }
        }
        self.check_relations(&update.where_clause);
    }

    fn check_select(&mut self, select: &Select) {
        if let Selection::Columns(columns) = &select.selection {
            for name in columns {
                self.column(name);
            }
        }
        self.check_relations(&select.where_clause);
    }

    fn check_delete(&mut self, delete: &Delete) {
        for name in &delete.columns {
            if let Some(column) = self.column(name)
                && column.kind.is_primary_key()
            {
                self.violations
                    .report(format!("cannot delete primary key column '{name}'"));
            }
        }
        self.check_relations(&delete.where_clause);
    }

    /// Resolve the column of an assignment, reporting unknown and repeated ones.
    fn assigned_column<'s>(
        &mut self,
        seen: &mut HashSet<&'s str>,
        assignment: &'s Assignment,
    ) -> Option<&'a ColumnDef> {
        if !seen.insert(assignment.column.as_str()) {
            self.violations.report(format!(
                "column '{}' is assigned more than once",
                assignment.column
            ));
            return None;
        }
        self.column(&assignment.column)
    }

    fn check_relations(&mut self, relations: &[Relation]) {
        for relation in relations {
            self.check_relation(relation);
        }
    }

    fn check_relation(&mut self, relation: &Relation) {
        let Some(column) = self.column(&relation.column) else {
            return;
        };
        match relation.operator {
            Operator::In => match &relation.value {
                Term::Literal(Literal::List(values) | Literal::Tuple(values)) => {
                    for value in values {
                        self.check_literal(&column.name, &column.ty, value);
                    }
                }
                Term::Literal(other) => self.violations.report(format!(
                    "IN on column '{}' expects a list of values, found {} literal",
                    column.name,
                    other.kind()
                )),
                Term::BindMarker(_) => {}
            },
            Operator::Contains => match column.ty.unfrozen() {
                CqlType::List(elem) | CqlType::Set(elem) | CqlType::Map(_, elem) => {
                    self.check_term(column, elem, &relation.value);
                }
                other => self.violations.report(format!(
                    "CONTAINS on column '{}' requires a collection, found {other}",
                    column.name
                )),
            },
            Operator::ContainsKey => match column.ty.unfrozen() {
                CqlType::Map(key, _) => self.check_term(column, key, &relation.value),
                other => self.violations.report(format!(
                    "CONTAINS KEY on column '{}' requires a map, found {other}",
                    column.name
                )),
            },
            _ => self.check_term(column, &column.ty, &relation.value),
        }
    }

    fn column(&mut self, name: &str) -> Option<&'a ColumnDef> {
        let table = self.table;
        let column = table.column(name);
        if column.is_none() {
            self.violations.report(format!(
                "unknown column '{name}' in table '{}'",
                table.name
            ));
        }
        column
    }

    fn check_term(&mut self, column: &ColumnDef, expected: &CqlType, term: &Term) {
        if let Term::Literal(literal) = term {
            self.check_literal(&column.name, expected, literal);
        }
    }

    fn check_literal(&mut self, column: &str, expected: &CqlType, literal: &Literal) {
        if !literal_fits(expected, literal, self.keyspace) {
            self.violations.report(format!(
                "invalid {} literal for column '{column}' of type {expected}",
                literal.kind()
            ));
        }
    }
}
