//! Schema-aware validation of CQL statements, plus the primitive value codecs
//! used to put bound values on the wire.
//!
//! ```ignore
//! let validator = SchemaValidatorBuilder::new()
//!     .with_default_checks()
//!     .build(StaticSchemaProvider::new(snapshot));
//! validator.validate(&statement)?;
//! ```

mod builder;

pub use builder::SchemaValidatorBuilder;
pub use cqlguard_core as core;
#[cfg(feature = "rules")]
pub use cqlguard_rules as rules;
pub use cqlguard_schema as schema;
