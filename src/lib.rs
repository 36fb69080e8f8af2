// Merge Accounting - Typed Records
// Data-transfer objects for the Merge Accounting API with JSON decode,
// encode and shape validation

#[macro_use]
mod macros;

pub mod nullable;   // Set / null / omitted field state
pub mod expandable; // Related record: id or embedded object
pub mod error;
pub mod fields;     // Static field descriptor tables
pub mod schema;     // Shape Layer - Schema Validation
pub mod record;     // TypedRecord contract
pub mod enums;
pub mod entities;
pub mod registry;

// Re-export commonly used types
pub use nullable::Nullable;
pub use expandable::Expandable;
pub use error::{Error, Result};
pub use fields::{FieldDef, FieldKind, ItemKind, RecordSchema};
pub use schema::{SchemaValidator, ValidationConfig, ValidationError, ValidationResult};
pub use record::TypedRecord;
pub use registry::RecordRegistry;
pub use enums::*;
pub use entities::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
