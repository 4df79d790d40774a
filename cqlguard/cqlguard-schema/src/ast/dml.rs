//! Data-manipulation statements.

use std::fmt;

use super::QualifiedName;

/// A single statement to be checked before it is sent to a cluster.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Insert(Insert),
    Update(Update),
    Select(Select),
    Delete(Delete),
}

impl Statement {
    /// The table the statement operates on.
    pub fn table(&self) -> &QualifiedName {
        match self {
            Statement::Insert(s) => &s.table,
            Statement::Update(s) => &s.table,
            Statement::Select(s) => &s.table,
            Statement::Delete(s) => &s.table,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Insert(_) => "INSERT",
            Statement::Update(_) => "UPDATE",
            Statement::Select(_) => "SELECT",
            Statement::Delete(_) => "DELETE",
        }
    }

    /// WHERE-clause relations; inserts have none.
    pub fn relations(&self) -> &[Relation] {
        match self {
            Statement::Insert(_) => &[],
            Statement::Update(s) => &s.where_clause,
            Statement::Select(s) => &s.where_clause,
            Statement::Delete(s) => &s.where_clause,
        }
    }
}

/// `INSERT INTO table (c1, c2) VALUES (v1, v2)`
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: QualifiedName,
    pub values: Vec<Assignment>,
    pub if_not_exists: bool,
}

/// `UPDATE table SET c = v WHERE ...`
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: QualifiedName,
    pub assignments: Vec<Assignment>,
    pub where_clause: Vec<Relation>,
}

/// `SELECT ... FROM table WHERE ...`
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: QualifiedName,
    pub selection: Selection,
    pub where_clause: Vec<Relation>,
    pub limit: Option<u64>,
    pub allow_filtering: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// `SELECT *`
    All,
    Columns(Vec<String>),
}

/// `DELETE [c1, c2] FROM table WHERE ...`
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: QualifiedName,
    /// Empty deletes whole rows.
    pub columns: Vec<String>,
    pub where_clause: Vec<Relation>,
}

/// `column = term` in an INSERT column list or UPDATE SET clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Term,
}

impl Assignment {
    pub fn new(column: impl Into<String>, value: Term) -> Self {
        Self {
            column: column.into(),
            value,
        }
    }
}

/// `column <op> term` in a WHERE clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    pub column: String,
    pub operator: Operator,
    pub value: Term,
}

impl Relation {
    pub fn new(column: impl Into<String>, operator: Operator, value: Term) -> Self {
        Self {
            column: column.into(),
            operator,
            value,
        }
    }

    pub fn eq(column: impl Into<String>, value: Term) -> Self {
        Self::new(column, Operator::Eq, value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    In,
    Contains,
    ContainsKey,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::In => "IN",
            Operator::Contains => "CONTAINS",
            Operator::ContainsKey => "CONTAINS KEY",
        })
    }
}

/// A value position in a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Literal(Literal),
    /// `?` or `:name`; the bound value is only known at execution time.
    BindMarker(Option<String>),
}

impl Term {
    pub fn literal(literal: Literal) -> Self {
        Self::Literal(literal)
    }

    pub fn marker() -> Self {
        Self::BindMarker(None)
    }
}

/// CQL constants and collection literals.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Blob(Vec<u8>),
    Uuid(u128),
    /// `[a, b]`
    List(Vec<Literal>),
    /// `{a, b}`; an empty `{}` is also a valid empty map.
    Set(Vec<Literal>),
    /// `{k: v}`
    Map(Vec<(Literal, Literal)>),
    /// `(a, b)`
    Tuple(Vec<Literal>),
    /// `{field: value}` for user-defined types.
    Udt(Vec<(String, Literal)>),
}

impl Literal {
    pub fn kind(&self) -> &'static str {
        match self {
            Literal::Null => "null",
            Literal::Boolean(_) => "boolean",
            Literal::Integer(_) => "integer",
            Literal::Float(_) => "float",
            Literal::String(_) => "string",
            Literal::Blob(_) => "blob",
            Literal::Uuid(_) => "uuid",
            Literal::List(_) => "list",
            Literal::Set(_) => "set",
            Literal::Map(_) => "map",
            Literal::Tuple(_) => "tuple",
            Literal::Udt(_) => "user type",
        }
    }
}
