//! Operation generation from an introspection response file.

use anyhow::{Context, Result};
use colored::Colorize;
use gqlparse_introspection::{decode_response, generate_operation, OperationKind, Schema};
use std::path::Path;

/// Decodes `input` and prints one smoke-test operation per root field,
/// blank-line separated, in declaration order.
///
/// Query operations are always printed. Mutation operations are printed
/// when `include_mutations` is set; a schema that declares no mutation
/// root at all only produces a notice on stderr.
pub fn run(input: &Path, include_mutations: bool) -> Result<()> {
    let raw = std::fs::read(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let schema = decode_response(&raw)
        .with_context(|| format!("Failed to decode {}", input.display()))?;

    print_query_operations(&schema)?;
    if include_mutations {
        print_mutation_operations(&schema)?;
    }
    Ok(())
}

fn print_query_operations(schema: &Schema) -> Result<()> {
    let root_name = &schema.query_type.name;
    let query_type = schema
        .find_operation_type(root_name)
        .with_context(|| format!("Could not find query type with name '{root_name}'"))?;

    let fields = query_type.fields.as_deref().unwrap_or_default();
    tracing::debug!(fields = fields.len(), "Generating query operations");
    for field in fields {
        println!("{}\n", generate_operation(field, OperationKind::Query));
    }
    Ok(())
}

fn print_mutation_operations(schema: &Schema) -> Result<()> {
    let Some(root) = &schema.mutation_type else {
        eprintln!("{}", "No mutations defined in the schema.".yellow());
        return Ok(());
    };

    let mutation_type = schema
        .find_operation_type(&root.name)
        .with_context(|| format!("Could not find mutation type with name '{}'", root.name))?;

    let fields = mutation_type.fields.as_deref().unwrap_or_default();
    tracing::debug!(fields = fields.len(), "Generating mutation operations");
    for field in fields {
        println!("{}\n", generate_operation(field, OperationKind::Mutation));
    }
    Ok(())
}
