//! Built-in [`SchemaCheck`](cqlguard_schema::SchemaCheck) rules.
//!
//! [`StructuralCheck`] verifies that a statement only refers to keyspaces,
//! tables and columns present in the schema snapshot, that literal values fit
//! the declared column types, and that primary key columns are used the way
//! CQL requires. Every violation is reported.

mod literal;
mod structural;

pub use literal::literal_fits;
pub use structural::StructuralCheck;
