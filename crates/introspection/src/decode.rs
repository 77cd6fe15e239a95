//! Decoding of introspection responses from raw JSON.

use crate::error::{IntrospectionError, Result};
use crate::types::{FullType, IntrospectionResponse, Schema, TypeRef};

/// Maximum number of NON_NULL/LIST wrappers tolerated on a single type
/// reference. Well-formed responses stay far below this; a chain that
/// exceeds it indicates a malformed or cyclic document.
const MAX_WRAPPER_DEPTH: usize = 32;

/// Decodes a raw introspection response into a [`Schema`].
///
/// Fields a server omits are left at their defaults; only the
/// `data.__schema` envelope is required. After deserialization every type
/// reference reachable from fields, arguments, and input fields is checked
/// so that wrapper chains terminate at a named type within
/// [`MAX_WRAPPER_DEPTH`] levels, keeping later type rendering total.
///
/// # Errors
///
/// Returns [`IntrospectionError::Parse`] if the input is not valid JSON or
/// lacks the `data.__schema` envelope, and [`IntrospectionError::Invalid`]
/// if a type wrapper carries no inner type or nests past the depth cap.
#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn decode_response(input: &[u8]) -> Result<Schema> {
    let response: IntrospectionResponse =
        serde_json::from_slice(input).map_err(|e| IntrospectionError::Parse(e.to_string()))?;

    let schema = response.data.schema;
    for full_type in &schema.types {
        validate_type(full_type)?;
    }

    tracing::debug!(types = schema.types.len(), "Decoded introspection response");
    Ok(schema)
}

fn validate_type(full_type: &FullType) -> Result<()> {
    for field in full_type.fields.as_deref().unwrap_or_default() {
        let context = format!("type {}, field {}", full_type.name, field.name);
        validate_type_ref(&field.type_ref, &context)?;
        for arg in &field.args {
            let context = format!(
                "type {}, field {}, argument {}",
                full_type.name, field.name, arg.name
            );
            validate_type_ref(&arg.type_ref, &context)?;
        }
    }
    for input_field in full_type.input_fields.as_deref().unwrap_or_default() {
        let context = format!("input type {}, field {}", full_type.name, input_field.name);
        validate_type_ref(&input_field.type_ref, &context)?;
    }
    Ok(())
}

/// Checks that a wrapper chain terminates at a named, non-wrapper kind.
fn validate_type_ref(type_ref: &TypeRef, context: &str) -> Result<()> {
    let mut current = type_ref;
    for _ in 0..MAX_WRAPPER_DEPTH {
        if !current.kind.is_wrapper() {
            return Ok(());
        }
        match current.of_type.as_deref() {
            Some(inner) => current = inner,
            None => {
                return Err(IntrospectionError::Invalid(format!(
                    "{context}: {:?} wrapper has no inner type",
                    current.kind
                )))
            }
        }
    }
    Err(IntrospectionError::Invalid(format!(
        "{context}: type wrapper chain exceeds {MAX_WRAPPER_DEPTH} levels"
    )))
}
