//! End-to-end tests driving a realistic introspection response through
//! decoding, root type lookup, and operation synthesis.

use gqlparse_introspection::{decode_response, generate_operation, OperationKind, Schema};

const FIXTURE: &[u8] = include_bytes!("fixtures/introspection.json");

fn decode_fixture() -> Schema {
    decode_response(FIXTURE).expect("fixture decodes")
}

fn operations_for(schema: &Schema, root_name: &str, kind: OperationKind) -> Vec<String> {
    let root = schema
        .find_operation_type(root_name)
        .expect("root type present");
    root.fields
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|field| generate_operation(field, kind))
        .collect()
}

#[test]
fn test_query_operations_in_declaration_order() {
    let schema = decode_fixture();
    let operations = operations_for(&schema, &schema.query_type.name, OperationKind::Query);

    assert_eq!(
        operations,
        vec![
            "query { ping }",
            "query user($id: ID!) { user(id: $id) { __typename } }",
            "query { colors }",
            "query search($filter: SearchFilter, $first: Int) { search(filter: $filter, first: $first) { __typename } }",
        ]
    );
}

#[test]
fn test_mutation_operations() {
    let schema = decode_fixture();
    let root_name = schema
        .mutation_type
        .as_ref()
        .expect("mutation root")
        .name
        .clone();
    let operations = operations_for(&schema, &root_name, OperationKind::Mutation);

    assert_eq!(
        operations,
        vec!["mutation createUser($input: CreateUserInput!) { createUser(input: $input) { __typename } }"]
    );
}

#[test]
fn test_leaf_types_are_not_operation_roots() {
    let schema = decode_fixture();

    // Scalars, enums, and input objects carry no fields, so the
    // name+fields-present lookup treats them as absent.
    assert!(schema.find_operation_type("String").is_none());
    assert!(schema.find_operation_type("Color").is_none());
    assert!(schema.find_operation_type("SearchFilter").is_none());

    // Ordinary object types do qualify; only the caller decides which
    // names are operation roots.
    assert!(schema.find_operation_type("User").is_some());
}

#[test]
fn test_declared_but_fieldless_mutation_root_is_not_found() {
    let raw = br#"{"data":{"__schema":{
        "queryType":{"name":"Query"},
        "mutationType":{"name":"Mutation"},
        "types":[
            {"kind":"OBJECT","name":"Query","fields":[
                {"name":"ping","type":{"kind":"SCALAR","name":"String"}}
            ]},
            {"kind":"OBJECT","name":"Mutation","fields":[]}
        ]
    }}}"#;

    let schema = decode_response(raw).expect("decodes");
    let root_name = &schema.mutation_type.as_ref().expect("declared").name;
    assert!(schema.find_operation_type(root_name).is_none());
}

#[test]
fn test_input_default_values_do_not_affect_synthesis() {
    let schema = decode_fixture();
    let query_type = schema.find_operation_type("Query").expect("query root");
    let search = query_type
        .fields
        .as_deref()
        .unwrap_or_default()
        .iter()
        .find(|field| field.name == "search")
        .expect("search field");

    assert_eq!(search.args[1].default_value.as_deref(), Some("10"));
    assert!(!generate_operation(search, OperationKind::Query).contains("10"));
}
