//! Printing the fixed introspection query in request-ready encodings.

use gqlparse_introspection::{curl_example, form_request_body, json_request_body};

/// Prints the introspection query as a JSON request body, a URL-encoded
/// form body, and a ready-to-run curl example against `url`.
///
/// This mode reads no input; `url` is only displayed in the curl example.
pub fn run(url: &str) {
    println!("JSON encoding:");
    println!("{}\n", json_request_body());

    println!("URL encoding:");
    println!("{}\n", form_request_body());

    println!("curl example:");
    println!("{}", curl_example(url));
}
