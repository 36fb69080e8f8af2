// 📐 Shape Layer - Schema Validation
// Checks arbitrary JSON against a record's descriptor table

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fields::{FieldDef, FieldKind, ItemKind, RecordSchema};

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// First shape mismatch found in a candidate payload.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("[{context}] {field}: {message}")]
pub struct ValidationError {
    /// Dotted path from the validated root, e.g. `line_items[0].account`
    pub field: String,
    pub message: String,
    /// Record whose schema the field belongs to
    pub context: String,
}

impl ValidationError {
    fn new(context: &str, field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
            context: context.to_string(),
        }
    }

    fn nested_under(mut self, parent: &str) -> Self {
        self.field = format!("{}.{}", parent, self.field);
        self
    }
}

pub type ValidationResult = Result<(), ValidationError>;

// ============================================================================
// CONFIGURATION
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Check every list element against its item kind. Off by default: the
    /// API's generated clients only check that list fields are arrays.
    pub deep_lists: bool,
}

// ============================================================================
// SCHEMA VALIDATOR
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct SchemaValidator {
    config: ValidationConfig,
}

impl SchemaValidator {
    pub fn new() -> Self {
        SchemaValidator::default()
    }

    pub fn with_config(config: ValidationConfig) -> Self {
        SchemaValidator { config }
    }

    /// Builder: toggle element-level list checks
    pub fn with_deep_lists(mut self, deep: bool) -> Self {
        self.config.deep_lists = deep;
        self
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate `candidate` against `schema`, stopping at the first mismatch.
    pub fn validate(&self, schema: &RecordSchema, candidate: &Value) -> ValidationResult {
        let result = self.validate_object(schema, candidate);
        if let Err(err) = &result {
            tracing::debug!(record = schema.name, field = %err.field, "validation failed: {}", err.message);
        }
        result
    }

    fn validate_object(&self, schema: &RecordSchema, candidate: &Value) -> ValidationResult {
        let object = candidate.as_object().ok_or_else(|| {
            ValidationError::new(
                schema.name,
                "<root>",
                format!("expected object, found {}", json_type(candidate)),
            )
        })?;

        for def in schema.fields {
            match object.get(def.name) {
                None | Some(Value::Null) => {
                    if def.required {
                        return Err(ValidationError::new(schema.name, def.name, "required field is missing"));
                    }
                }
                Some(value) => self.check_field(schema, def, value)?,
            }
        }

        Ok(())
    }

    fn check_field(&self, schema: &RecordSchema, def: &FieldDef, value: &Value) -> ValidationResult {
        let mismatch = || {
            ValidationError::new(
                schema.name,
                def.name,
                format!("expected {}, found {}", def.kind.label(), json_type(value)),
            )
        };

        match def.kind {
            FieldKind::String => value.is_string().then_some(()).ok_or_else(mismatch),
            FieldKind::Number => value.is_number().then_some(()).ok_or_else(mismatch),
            FieldKind::Integer => (value.is_i64() || value.is_u64()).then_some(()).ok_or_else(mismatch),
            FieldKind::Boolean => value.is_boolean().then_some(()).ok_or_else(mismatch),
            FieldKind::Object => value.is_object().then_some(()).ok_or_else(mismatch),
            FieldKind::Json => Ok(()),
            FieldKind::DateTime => {
                let raw = value.as_str().ok_or_else(mismatch)?;
                raw.parse::<DateTime<FixedOffset>>().map(|_| ()).map_err(|err| {
                    ValidationError::new(schema.name, def.name, format!("invalid date-time `{}`: {}", raw, err))
                })
            }
            FieldKind::Enum(values) => {
                let raw = value.as_str().ok_or_else(mismatch)?;
                if values.contains(&raw) {
                    Ok(())
                } else {
                    Err(ValidationError::new(
                        schema.name,
                        def.name,
                        format!("`{}` is not a recognized value", raw),
                    ))
                }
            }
            FieldKind::Record(nested) => {
                if !value.is_object() {
                    return Err(mismatch());
                }
                self.validate_object(nested(), value)
                    .map_err(|err| err.nested_under(def.name))
            }
            FieldKind::Expandable(nested) => {
                if value.is_string() {
                    return Ok(());
                }
                if !value.is_object() {
                    return Err(mismatch());
                }
                self.validate_object(nested(), value)
                    .map_err(|err| err.nested_under(def.name))
            }
            FieldKind::List(item) => {
                let elements = value.as_array().ok_or_else(mismatch)?;
                if !self.config.deep_lists {
                    return Ok(());
                }
                for (index, element) in elements.iter().enumerate() {
                    let path = format!("{}[{}]", def.name, index);
                    self.check_item(schema, &path, item, element)?;
                }
                Ok(())
            }
        }
    }

    fn check_item(&self, schema: &RecordSchema, path: &str, item: ItemKind, value: &Value) -> ValidationResult {
        let mismatch = || {
            ValidationError::new(
                schema.name,
                path,
                format!("expected {}, found {}", item.label(), json_type(value)),
            )
        };

        match item {
            ItemKind::String => value.is_string().then_some(()).ok_or_else(mismatch),
            ItemKind::Number => value.is_number().then_some(()).ok_or_else(mismatch),
            ItemKind::Json => Ok(()),
            ItemKind::Record(nested) => {
                if !value.is_object() {
                    return Err(mismatch());
                }
                self.validate_object(nested(), value)
                    .map_err(|err| err.nested_under(path))
            }
            ItemKind::Expandable(nested) => {
                if value.is_string() {
                    return Ok(());
                }
                if !value.is_object() {
                    return Err(mismatch());
                }
                self.validate_object(nested(), value)
                    .map_err(|err| err.nested_under(path))
            }
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// TESTS
// ============================================================================
