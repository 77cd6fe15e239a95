//! GraphQL introspection decoding and smoke-test operation synthesis.
//!
//! This crate decodes a GraphQL introspection response (the JSON result of
//! querying an endpoint's `__schema` meta-field) into a typed schema and
//! synthesizes one query or mutation operation per root field, suitable as
//! smoke-test requests against the originating endpoint.
//!
//! # Examples
//!
//! ```
//! use gqlparse_introspection::{decode_response, generate_operation, OperationKind};
//!
//! let raw = br#"{"data":{"__schema":{
//!     "queryType":{"name":"Query"},
//!     "types":[{"kind":"OBJECT","name":"Query","fields":[
//!         {"name":"ping","type":{"kind":"SCALAR","name":"String"}}
//!     ]}]
//! }}}"#;
//!
//! let schema = decode_response(raw)?;
//! let query_type = schema
//!     .find_operation_type(&schema.query_type.name)
//!     .expect("query root type");
//!
//! for field in query_type.fields.as_deref().unwrap_or_default() {
//!     assert_eq!(generate_operation(field, OperationKind::Query), "query { ping }");
//! }
//! # Ok::<(), gqlparse_introspection::IntrospectionError>(())
//! ```

mod decode;
mod error;
mod operation;
mod query;
mod types;

pub use decode::decode_response;
pub use error::{IntrospectionError, Result};
pub use operation::{generate_operation, OperationKind};
pub use query::{curl_example, form_request_body, json_request_body, INTROSPECTION_QUERY};
pub use types::{
    EnumValue, Field, FullType, InputValue, IntrospectionData, IntrospectionResponse,
    NamedTypeRef, Schema, TypeKind, TypeRef,
};
