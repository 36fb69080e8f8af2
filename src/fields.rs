// 🏛️ Field Descriptors - the per-record schema table
// Each record declares its fields once; decoding, encoding and validation
// all read from the same table.

// ============================================================================
// FIELD KINDS
// ============================================================================

/// Resolves a record's schema lazily so records can embed each other
/// (including themselves) without const cycles.
pub type SchemaFn = fn() -> &'static RecordSchema;

/// Expected JSON shape of a declared field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    String,
    Number,
    Integer,
    Boolean,

    /// ISO-8601 date-time with offset, e.g. `2024-03-31T00:00:00Z`
    DateTime,

    /// Closed set of uppercase tokens
    Enum(&'static [&'static str]),

    /// Embedded record
    Record(SchemaFn),

    /// Either the id of a related record or the record itself
    Expandable(SchemaFn),

    /// Free-form JSON object (`field_mappings`, `integration_params`)
    Object,

    /// Any JSON value
    Json,

    List(ItemKind),
}

/// Element kind of a list field.
#[derive(Debug, Clone, Copy)]
pub enum ItemKind {
    String,
    Number,
    Record(SchemaFn),
    Expandable(SchemaFn),
    Json,
}

impl FieldKind {
    /// Human-readable name used in validation messages
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::DateTime => "date-time string",
            FieldKind::Enum(_) => "enum string",
            FieldKind::Record(_) => "object",
            FieldKind::Expandable(_) => "id string or object",
            FieldKind::Object => "object",
            FieldKind::Json => "any JSON value",
            FieldKind::List(_) => "array",
        }
    }
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::String => "string",
            ItemKind::Number => "number",
            ItemKind::Record(_) => "object",
            ItemKind::Expandable(_) => "id string or object",
            ItemKind::Json => "any JSON value",
        }
    }
}

// ============================================================================
// FIELD DEFINITION
// ============================================================================

/// One declared field: wire key, expected kind, and whether it must be present.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    /// Wire key, snake_case as the API sends it
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

// ============================================================================
// RECORD SCHEMA
// ============================================================================

/// Static descriptor table of one record type.
#[derive(Debug)]
pub struct RecordSchema {
    pub name: &'static str,
    pub fields: &'static [FieldDef],
}

impl RecordSchema {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|def| def.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|def| def.required)
    }

    pub fn declares(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|def| def.name).collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
