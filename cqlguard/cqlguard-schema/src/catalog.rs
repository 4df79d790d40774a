//! Queryable view of a schema snapshot.
//!
//! [`Catalog::from_definition`] replays the data-definition statements of a
//! [`SchemaDefinition`] in order, tracking the `USE` keyspace the same way a
//! session would. Statements that do not apply cleanly (dropping an unknown
//! table, re-creating a keyspace without `IF NOT EXISTS`, ...) are reported
//! and skipped, so one replay surfaces every inconsistency in the snapshot.

use std::collections::{BTreeMap, BTreeSet};

use cqlguard_core::CqlType;

use crate::{
    ast::{
        QualifiedName,
        ddl::{
            AlterTable, AlterTableOperation, CreateIndex, CreateTable, CreateType, DataDefinition,
        },
    },
    definition::SchemaDefinition,
    error::{SchemaError, SchemaValidatorError},
    nonempty::{NonEmpty, Violations},
};

/// Role of a column in its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Position within the partition key.
    PartitionKey(usize),
    /// Position within the clustering columns.
    Clustering(usize),
    Static,
    Regular,
}

impl ColumnKind {
    pub fn is_primary_key(self) -> bool {
        matches!(self, ColumnKind::PartitionKey(_) | ColumnKind::Clustering(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub ty: CqlType,
    pub kind: ColumnKind,
}

/// A table and its columns in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDef {
    pub name: String,
    pub columns: Vec<ColumnDef>,
}

impl TableDef {
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Partition key columns followed by clustering columns, in key order.
    pub fn primary_key(&self) -> Vec<&ColumnDef> {
        let mut key: Vec<&ColumnDef> = self
            .columns
            .iter()
            .filter(|c| c.kind.is_primary_key())
            .collect();
        key.sort_by_key(|c| match c.kind {
            ColumnKind::PartitionKey(i) => (0, i),
            ColumnKind::Clustering(i) => (1, i),
            _ => unreachable!("filtered to primary key columns"),
        });
        key
    }

    pub fn has_clustering_columns(&self) -> bool {
        self.columns
            .iter()
            .any(|c| matches!(c.kind, ColumnKind::Clustering(_)))
    }

    fn from_create(def: &CreateTable) -> Result<Self, SchemaValidatorError> {
        let table = &def.table;
        if def.partition_key.is_empty() {
            return Err(SchemaValidatorError::new(format!(
                "table '{table}' has no partition key"
            )));
        }

        let mut columns: Vec<ColumnDef> = Vec::with_capacity(def.columns.len());
        for column in &def.columns {
            if columns.iter().any(|c| c.name == column.name) {
                return Err(SchemaValidatorError::new(format!(
                    "column '{}' declared twice in table '{table}'",
                    column.name
                )));
            }
            let partition = def.partition_key.iter().position(|k| *k == column.name);
            let clustering = def.clustering_columns.iter().position(|k| *k == column.name);
            let kind = match (partition, clustering) {
                (Some(i), _) => ColumnKind::PartitionKey(i),
                (None, Some(i)) => ColumnKind::Clustering(i),
                (None, None) if column.is_static => ColumnKind::Static,
                (None, None) => ColumnKind::Regular,
            };
            if column.is_static && kind.is_primary_key() {
                return Err(SchemaValidatorError::new(format!(
                    "primary key column '{}' of table '{table}' cannot be static",
                    column.name
                )));
            }
            if column.is_static && def.clustering_columns.is_empty() {
                return Err(SchemaValidatorError::new(format!(
                    "static column '{}' requires clustering columns in table '{table}'",
                    column.name
                )));
            }
            columns.push(ColumnDef {
                name: column.name.clone(),
                ty: column.ty.clone(),
                kind,
            });
        }

        for key in def.partition_key.iter().chain(&def.clustering_columns) {
            if !columns.iter().any(|c| c.name == *key) {
                return Err(SchemaValidatorError::new(format!(
                    "primary key column '{key}' of table '{table}' is not declared"
                )));
            }
        }

        Ok(Self {
            name: table.name.clone(),
            columns,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserTypeDef {
    pub name: String,
    pub fields: Vec<(String, CqlType)>,
}

impl UserTypeDef {
    pub fn field(&self, name: &str) -> Option<&CqlType> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, ty)| ty)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexDef {
    pub table: String,
    pub column: String,
}

/// Tables, user types and secondary indexes of one keyspace.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyspaceDef {
    pub name: String,
    pub tables: BTreeMap<String, TableDef>,
    pub types: BTreeMap<String, UserTypeDef>,
    pub indexes: BTreeMap<String, IndexDef>,
}

impl KeyspaceDef {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tables: BTreeMap::new(),
            types: BTreeMap::new(),
            indexes: BTreeMap::new(),
        }
    }

    pub fn is_indexed(&self, table: &str, column: &str) -> bool {
        self.indexes
            .values()
            .any(|idx| idx.table == table && idx.column == column)
    }

    /// Every user type referenced by `ty` must be defined in this keyspace.
    fn check_type_refs(&self, ty: &CqlType) -> Result<(), SchemaValidatorError> {
        match ty {
            CqlType::Udt(name) if !self.types.contains_key(name) => Err(
                SchemaValidatorError::new(format!(
                    "unknown type '{name}' in keyspace '{}'",
                    self.name
                )),
            ),
            CqlType::List(elem) | CqlType::Set(elem) | CqlType::Frozen(elem) => {
                self.check_type_refs(elem)
            }
            CqlType::Map(key, value) => {
                self.check_type_refs(key)?;
                self.check_type_refs(value)
            }
            CqlType::Tuple(elems) => elems.iter().try_for_each(|e| self.check_type_refs(e)),
            _ => Ok(()),
        }
    }
}

/// Keyspaces known after replaying a schema snapshot.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    keyspaces: BTreeMap<String, KeyspaceDef>,
    current_keyspace: Option<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay `schema` from an empty catalog, collecting every statement that
    /// fails to apply.
    pub fn from_definition(schema: &SchemaDefinition) -> Result<Self, NonEmpty<SchemaError>> {
        let mut catalog = Self::new();
        let mut violations = Violations::new();
        for ddl in schema.iter() {
            if let Err(e) = catalog.apply(ddl) {
                violations.push(e);
            }
        }
        violations.finish().map(|()| catalog)
    }

    /// Apply one data-definition statement. On error the catalog is unchanged.
    pub fn apply(&mut self, ddl: &DataDefinition) -> Result<(), SchemaValidatorError> {
        match ddl {
            DataDefinition::Use(name) => {
                if !self.keyspaces.contains_key(name) {
                    return Err(SchemaValidatorError::new(format!(
                        "cannot use unknown keyspace '{name}'"
                    )));
                }
                self.current_keyspace = Some(name.clone());
            }
            DataDefinition::CreateKeyspace(def) => {
                if self.keyspaces.contains_key(&def.name) {
                    if def.if_not_exists {
                        return Ok(());
                    }
                    return Err(SchemaValidatorError::new(format!(
                        "keyspace '{}' already exists",
                        def.name
                    )));
                }
                self.keyspaces
                    .insert(def.name.clone(), KeyspaceDef::new(&def.name));
            }
            DataDefinition::DropKeyspace { name, if_exists } => {
                if self.keyspaces.remove(name).is_none() && !if_exists {
                    return Err(SchemaValidatorError::new(format!(
                        "cannot drop unknown keyspace '{name}'"
                    )));
                }
                if self.current_keyspace.as_ref() == Some(name) {
                    self.current_keyspace = None;
                }
            }
            DataDefinition::CreateTable(def) => self.create_table(def)?,
            DataDefinition::AlterTable(def) => self.alter_table(def)?,
            DataDefinition::DropTable { table, if_exists } => {
                let keyspace = self.keyspace_mut(table)?;
                if keyspace.tables.remove(&table.name).is_none() {
                    if *if_exists {
                        return Ok(());
                    }
                    return Err(SchemaValidatorError::new(format!(
                        "cannot drop unknown table '{table}'"
                    )));
                }
                keyspace.indexes.retain(|_, idx| idx.table != table.name);
            }
            DataDefinition::CreateType(def) => self.create_type(def)?,
            DataDefinition::DropType { name, if_exists } => {
                let keyspace = self.keyspace_mut(name)?;
                if keyspace.types.remove(&name.name).is_none() && !if_exists {
                    return Err(SchemaValidatorError::new(format!(
                        "cannot drop unknown type '{name}'"
                    )));
                }
            }
            DataDefinition::CreateIndex(def) => self.create_index(def)?,
            DataDefinition::DropIndex { name, if_exists } => {
                let keyspace = self.keyspace_mut(name)?;
                if keyspace.indexes.remove(&name.name).is_none() && !if_exists {
                    return Err(SchemaValidatorError::new(format!(
                        "cannot drop unknown index '{name}'"
                    )));
                }
            }
        }
        Ok(())
    }

    /// The keyspace selected by the most recent `USE`, if it still exists.
    pub fn current_keyspace(&self) -> Option<&str> {
        self.current_keyspace.as_deref()
    }

    pub fn keyspace(&self, name: &str) -> Option<&KeyspaceDef> {
        self.keyspaces.get(name)
    }

    /// The keyspace `name` refers to: its own qualifier, else the `USE` keyspace.
    pub fn resolve_keyspace<'a>(&'a self, name: &'a QualifiedName) -> Option<&'a str> {
        name.keyspace.as_deref().or(self.current_keyspace())
    }

    pub fn table(&self, name: &QualifiedName) -> Option<&TableDef> {
        self.keyspace(self.resolve_keyspace(name)?)?
            .tables
            .get(&name.name)
    }

    pub fn user_type(&self, keyspace: &str, name: &str) -> Option<&UserTypeDef> {
        self.keyspace(keyspace)?.types.get(name)
    }

    fn keyspace_mut(
        &mut self,
        name: &QualifiedName,
    ) -> Result<&mut KeyspaceDef, SchemaValidatorError> {
        let keyspace = name
            .keyspace
            .clone()
            .or_else(|| self.current_keyspace.clone())
            .ok_or_else(|| {
                SchemaValidatorError::new(format!("no keyspace specified for '{}'", name.name))
            })?;
        self.keyspaces
            .get_mut(&keyspace)
            .ok_or_else(|| SchemaValidatorError::new(format!("unknown keyspace '{keyspace}'")))
    }

    fn create_table(&mut self, def: &CreateTable) -> Result<(), SchemaValidatorError> {
        let keyspace = self.keyspace_mut(&def.table)?;
        if keyspace.tables.contains_key(&def.table.name) {
            if def.if_not_exists {
                return Ok(());
            }
            return Err(SchemaValidatorError::new(format!(
                "table '{}' already exists",
                def.table
            )));
        }
        for column in &def.columns {
            keyspace.check_type_refs(&column.ty)?;
        }
        let table = TableDef::from_create(def)?;
        keyspace.tables.insert(def.table.name.clone(), table);
        Ok(())
    }

    fn alter_table(&mut self, def: &AlterTable) -> Result<(), SchemaValidatorError> {
        let name = &def.table;
        let keyspace = self.keyspace_mut(name)?;
        let Some(table) = keyspace.tables.get(&name.name) else {
            return Err(SchemaValidatorError::new(format!(
                "cannot alter unknown table '{name}'"
            )));
        };

        match &def.operation {
            AlterTableOperation::Add(columns) => {
                for (i, column) in columns.iter().enumerate() {
                    let repeated = columns[..i].iter().any(|c| c.name == column.name);
                    if repeated || table.column(&column.name).is_some() {
                        return Err(SchemaValidatorError::new(format!(
                            "column '{}' already exists in table '{name}'",
                            column.name
                        )));
                    }
                    if column.is_static && !table.has_clustering_columns() {
                        return Err(SchemaValidatorError::new(format!(
                            "static column '{}' requires clustering columns in table '{name}'",
                            column.name
                        )));
                    }
                    keyspace.check_type_refs(&column.ty)?;
                }
            }
            AlterTableOperation::Drop(columns) => {
                for column in columns {
                    match table.column(column) {
                        None => {
                            return Err(SchemaValidatorError::new(format!(
                                "cannot drop unknown column '{column}' from table '{name}'"
                            )));
                        }
                        Some(c) if c.kind.is_primary_key() => {
                            return Err(SchemaValidatorError::new(format!(
                                "cannot drop primary key column '{column}' from table '{name}'"
                            )));
                        }
                        Some(_) if keyspace.is_indexed(&name.name, column) => {
                            return Err(SchemaValidatorError::new(format!(
                                "cannot drop indexed column '{column}' from table '{name}'"
                            )));
                        }
                        Some(_) => {}
                    }
                }
            }
            AlterTableOperation::Rename(pairs) => {
                let mut names: BTreeSet<&str> =
                    table.columns.iter().map(|c| c.name.as_str()).collect();
                let mut renamed: BTreeSet<&str> = BTreeSet::new();
                for (from, to) in pairs {
                    if !renamed.insert(from.as_str()) {
                        return Err(SchemaValidatorError::new(format!(
                            "column '{from}' renamed more than once in table '{name}'"
                        )));
                    }
                    match table.column(from) {
                        None => {
                            return Err(SchemaValidatorError::new(format!(
                                "cannot rename unknown column '{from}' in table '{name}'"
                            )));
                        }
                        Some(c) if !c.kind.is_primary_key() => {
                            return Err(SchemaValidatorError::new(format!(
                                "cannot rename non primary key column '{from}' in table '{name}'"
                            )));
                        }
                        Some(_) => {}
                    }
                    names.remove(from.as_str());
                    if !names.insert(to.as_str()) {
                        return Err(SchemaValidatorError::new(format!(
                            "cannot rename '{from}' to existing column '{to}' in table '{name}'"
                        )));
                    }
                }
            }
        }

        let Some(table) = keyspace.tables.get_mut(&name.name) else {
            unreachable!("table presence checked above");
        };
        match &def.operation {
            AlterTableOperation::Add(columns) => {
                table.columns.extend(columns.iter().map(|c| ColumnDef {
                    name: c.name.clone(),
                    ty: c.ty.clone(),
                    kind: if c.is_static {
                        ColumnKind::Static
                    } else {
                        ColumnKind::Regular
                    },
                }));
            }
            AlterTableOperation::Drop(columns) => {
                table.columns.retain(|c| !columns.contains(&c.name));
            }
            AlterTableOperation::Rename(pairs) => {
                for (from, to) in pairs {
                    if let Some(column) = table.columns.iter_mut().find(|c| c.name == *from) {
                        column.name = to.clone();
                    }
                    for index in keyspace.indexes.values_mut() {
                        if index.table == name.name && index.column == *from {
                            index.column = to.clone();
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn create_type(&mut self, def: &CreateType) -> Result<(), SchemaValidatorError> {
        let keyspace = self.keyspace_mut(&def.name)?;
        if keyspace.types.contains_key(&def.name.name) {
            if def.if_not_exists {
                return Ok(());
            }
            return Err(SchemaValidatorError::new(format!(
                "type '{}' already exists",
                def.name
            )));
        }
        for (_, ty) in &def.fields {
            keyspace.check_type_refs(ty)?;
        }
        keyspace.types.insert(
            def.name.name.clone(),
            UserTypeDef {
                name: def.name.name.clone(),
                fields: def.fields.clone(),
            },
        );
        Ok(())
    }

    fn create_index(&mut self, def: &CreateIndex) -> Result<(), SchemaValidatorError> {
        let index_name = def.effective_name();
        let keyspace = self.keyspace_mut(&def.table)?;
        let Some(table) = keyspace.tables.get(&def.table.name) else {
            return Err(SchemaValidatorError::new(format!(
                "cannot index unknown table '{}'",
                def.table
            )));
        };
        if table.column(&def.column).is_none() {
            return Err(SchemaValidatorError::new(format!(
                "cannot index unknown column '{}' of table '{}'",
                def.column, def.table
            )));
        }
        if keyspace.indexes.contains_key(&index_name) {
            if def.if_not_exists {
                return Ok(());
            }
            return Err(SchemaValidatorError::new(format!(
                "index '{index_name}' already exists"
            )));
        }
        keyspace.indexes.insert(
            index_name,
            IndexDef {
                table: def.table.name.clone(),
                column: def.column.clone(),
            },
        );
        Ok(())
    }
}
