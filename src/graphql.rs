//! GraphQL documents for the GoRest `/graphql` endpoint.
//!
//! The endpoint accepts a JSON envelope with a single `query` field holding
//! either a query or a mutation document. Builders here produce the document
//! text: string values are escaped as GraphQL literals, ids are interpolated
//! bare since the API uses numeric ids.

use crate::types::{NewUser, UserStatus};
use serde::Serialize;

/// JSON envelope posted to `/graphql`.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
}

impl GraphQlRequest {
    fn new(query: String) -> Self {
        Self { query }
    }
}

/// Look up a user by id, selecting every field the scenarios assert on.
pub fn user_query(id: &str) -> GraphQlRequest {
    GraphQlRequest::new(format!(
        "query {{ user(id: {id}) {{ id name email gender status }} }}"
    ))
}

/// Create a user through the `createUser` mutation.
pub fn create_user_mutation(user: &NewUser) -> GraphQlRequest {
    GraphQlRequest::new(format!(
        "mutation {{ createUser(input: {{ name: {}, gender: {}, email: {}, status: {} }}) \
         {{ user {{ id name email gender status }} }} }}",
        literal(&user.name),
        literal(user.gender.as_str()),
        literal(&user.email),
        literal(user.status.as_str()),
    ))
}

/// Rename a user and change their status through the `updateUser` mutation.
pub fn update_user_mutation(id: &str, name: &str, status: UserStatus) -> GraphQlRequest {
    GraphQlRequest::new(format!(
        "mutation {{ updateUser(input: {{ id: {id}, name: {}, status: {} }}) \
         {{ user {{ id name status }} }} }}",
        literal(name),
        literal(status.as_str()),
    ))
}

/// Delete a user through the `deleteUser` mutation. The response echoes the
/// deleted user.
pub fn delete_user_mutation(id: &str) -> GraphQlRequest {
    GraphQlRequest::new(format!(
        "mutation {{ deleteUser(input: {{ id: {id} }}) {{ user {{ id name email gender status }} }} }}"
    ))
}

/// Quote a string as a GraphQL literal, escaping backslashes, quotes and
/// newlines.
fn literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
