//! Smoke-test operation synthesis from introspected root fields.

use crate::types::Field;
use std::fmt;

/// The operation kind a root field is generated under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    /// The GraphQL keyword opening the operation.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Builds a single-line GraphQL operation exercising `field`.
///
/// Every argument becomes a `$name: Type` variable declaration in the
/// operation header and a `name: $name` binding at the call site, in
/// declared order. When the field has no arguments the header is just the
/// operation keyword. Composite return types (object, interface, union)
/// get a minimal `{ __typename }` selection so the operation is valid
/// GraphQL as-is.
///
/// # Examples
///
/// ```
/// # use gqlparse_introspection::{generate_operation, Field, OperationKind};
/// let field = Field {
///     name: "ping".to_string(),
///     ..Field::default()
/// };
/// assert_eq!(generate_operation(&field, OperationKind::Query), "query { ping }");
/// ```
#[must_use]
pub fn generate_operation(field: &Field, kind: OperationKind) -> String {
    let mut var_defs = Vec::with_capacity(field.args.len());
    let mut bindings = Vec::with_capacity(field.args.len());
    for arg in &field.args {
        var_defs.push(format!("${}: {}", arg.name, arg.type_ref.to_type_string()));
        bindings.push(format!("{}: ${}", arg.name, arg.name));
    }

    let header = if var_defs.is_empty() {
        kind.keyword().to_string()
    } else {
        format!("{} {}({})", kind.keyword(), field.name, var_defs.join(", "))
    };

    let mut call = field.name.clone();
    if !bindings.is_empty() {
        call.push('(');
        call.push_str(&bindings.join(", "));
        call.push(')');
    }

    let selection = if field.type_ref.is_composite() {
        " { __typename }"
    } else {
        ""
    };

    format!("{header} {{ {call}{selection} }}")
}
