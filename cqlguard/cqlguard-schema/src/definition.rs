use std::ops::Deref;

use crate::ast::ddl::DataDefinition;

/// An immutable schema snapshot: data-definition statements in the order
/// they were applied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaDefinition(Vec<DataDefinition>);

impl SchemaDefinition {
    pub fn new(statements: Vec<DataDefinition>) -> Self {
        Self(statements)
    }

    pub fn as_slice(&self) -> &[DataDefinition] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataDefinition> {
        self.0.iter()
    }
}

impl From<Vec<DataDefinition>> for SchemaDefinition {
    fn from(value: Vec<DataDefinition>) -> Self {
        Self(value)
    }
}

impl FromIterator<DataDefinition> for SchemaDefinition {
    fn from_iter<I: IntoIterator<Item = DataDefinition>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for SchemaDefinition {
    type Target = [DataDefinition];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
