//! Type definitions for GraphQL introspection responses.
//!
//! These types mirror the structure of GraphQL introspection query responses
//! and can be deserialized from JSON using serde. Servers are allowed to omit
//! fields; omitted fields are left at their default values. Only the
//! `data.__schema` envelope itself is mandatory.

use serde::{Deserialize, Serialize};

/// Top-level introspection response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntrospectionResponse {
    pub data: IntrospectionData,
}

/// Data field of the introspection response containing the schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntrospectionData {
    #[serde(rename = "__schema")]
    pub schema: Schema,
}

/// Complete GraphQL schema information from introspection.
///
/// Constructed once during decoding and read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Schema {
    pub query_type: NamedTypeRef,
    pub mutation_type: Option<NamedTypeRef>,
    pub subscription_type: Option<NamedTypeRef>,
    pub types: Vec<FullType>,
}

impl Schema {
    /// Finds the declared type `name`, requiring it to carry fields.
    ///
    /// A type with a matching name but an empty or absent fields list (a
    /// leaf scalar, or an object declared without fields) is treated as not
    /// found. The scan returns the first type matching both conditions.
    #[must_use]
    pub fn find_operation_type(&self, name: &str) -> Option<&FullType> {
        self.types
            .iter()
            .find(|full_type| full_type.name == name && full_type.has_fields())
    }
}

/// A type reference carrying just a name, as used for the schema roots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedTypeRef {
    pub name: String,
}

/// A named type declaration from the introspection result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FullType {
    pub kind: TypeKind,
    pub name: String,
    pub description: Option<String>,
    pub fields: Option<Vec<Field>>,
    pub input_fields: Option<Vec<InputValue>>,
    pub enum_values: Option<Vec<EnumValue>>,
    pub possible_types: Option<Vec<NamedTypeRef>>,
}

impl FullType {
    /// Whether this type declares at least one field.
    #[must_use]
    pub fn has_fields(&self) -> bool {
        self.fields.as_ref().is_some_and(|fields| !fields.is_empty())
    }
}

/// A field of an object or interface type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    pub args: Vec<InputValue>,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

/// An argument or input object field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputValue {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    pub default_value: Option<String>,
}

/// An enum value definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
}

/// A type as declared at a use site: either a named type or a NON_NULL/LIST
/// wrapper around an inner reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeRef {
    pub kind: TypeKind,
    pub name: Option<String>,
    pub of_type: Option<Box<TypeRef>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum TypeKind {
    #[default]
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TypeKind {
    /// NON_NULL and LIST wrap an inner type rather than naming one.
    #[must_use]
    pub const fn is_wrapper(self) -> bool {
        matches!(self, Self::NonNull | Self::List)
    }
}

impl TypeRef {
    /// Converts the type reference to a GraphQL type string.
    ///
    /// Handles type wrappers like `NonNull` and `List` to generate strings like:
    /// - `String` for a simple scalar
    /// - `String!` for a non-null scalar
    /// - `[String]` for a list
    /// - `[String!]!` for a non-null list of non-null strings
    ///
    /// # Examples
    ///
    /// ```
    /// # use gqlparse_introspection::{TypeRef, TypeKind};
    /// let type_ref = TypeRef {
    ///     kind: TypeKind::NonNull,
    ///     name: None,
    ///     of_type: Some(Box::new(TypeRef {
    ///         kind: TypeKind::Scalar,
    ///         name: Some("String".to_string()),
    ///         of_type: None,
    ///     })),
    /// };
    /// assert_eq!(type_ref.to_type_string(), "String!");
    /// ```
    #[must_use]
    pub fn to_type_string(&self) -> String {
        match self.kind {
            TypeKind::NonNull => self.of_type.as_ref().map_or_else(
                || "!".to_string(),
                |of_type| format!("{}!", of_type.to_type_string()),
            ),
            TypeKind::List => self.of_type.as_ref().map_or_else(
                || "[]".to_string(),
                |of_type| format!("[{}]", of_type.to_type_string()),
            ),
            _ => self.name.as_deref().unwrap_or_default().to_string(),
        }
    }

    /// Strips NON_NULL and LIST wrappers, returning the innermost reference.
    #[must_use]
    pub fn unwrapped(&self) -> &Self {
        let mut current = self;
        while current.kind.is_wrapper() {
            match current.of_type.as_deref() {
                Some(inner) => current = inner,
                None => break,
            }
        }
        current
    }

    /// Whether the innermost type is an object, interface, or union.
    ///
    /// Composite types require a selection set when queried.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        matches!(
            self.unwrapped().kind,
            TypeKind::Object | TypeKind::Interface | TypeKind::Union
        )
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_type_string())
    }
}
