//! The fixed introspection query and its request encodings.

use url::form_urlencoded;

/// Standard GraphQL introspection query, compacted to a single line so it
/// can be pasted into request bodies without escaping newlines.
///
/// The query fetches the query, mutation, and subscription root types, all
/// type definitions with their fields and arguments, and directive
/// definitions. Nested `ofType` selections go 7 levels deep to handle
/// wrappers like `[[[String!]!]!]`.
pub const INTROSPECTION_QUERY: &str = "{__schema{queryType{name}mutationType{name}subscriptionType{name}types{...FullType}directives{name description locations args{...InputValue}}}}fragment FullType on __Type{kind name description fields(includeDeprecated:true){name description args{...InputValue}type{...TypeRef}isDeprecated deprecationReason}inputFields{...InputValue}interfaces{...TypeRef}enumValues(includeDeprecated:true){name description isDeprecated deprecationReason}possibleTypes{...TypeRef}}fragment InputValue on __InputValue{name description type{...TypeRef}defaultValue}fragment TypeRef on __Type{kind name ofType{kind name ofType{kind name ofType{kind name ofType{kind name ofType{kind name ofType{kind name}}}}}}}";

/// JSON request body carrying the introspection query.
#[must_use]
pub fn json_request_body() -> String {
    serde_json::json!({ "query": INTROSPECTION_QUERY }).to_string()
}

/// `application/x-www-form-urlencoded` request body carrying the query.
#[must_use]
pub fn form_request_body() -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("query", INTROSPECTION_QUERY)
        .finish()
}

/// Example curl invocation POSTing the introspection query to `url`.
#[must_use]
pub fn curl_example(url: &str) -> String {
    format!(
        "curl -X POST {url} -H \"Content-Type: application/json\" -d '{}'",
        json_request_body()
    )
}
