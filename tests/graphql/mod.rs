//! GraphQL scenarios against the unified `/graphql` endpoint.
//!
//! Query and mutation documents come from `gorest_e2e::graphql`; every call
//! is a POST with a `{ "query": ... }` envelope and the endpoint answers 200
//! even for "not found", so the assertions inspect the `data` tree.

use crate::common;

use gorest_e2e::graphql::{
    create_user_mutation, delete_user_mutation, update_user_mutation, user_query,
};
use gorest_e2e::types::{Gender, NewUser, UserStatus};
use serde_json::Value;

/// A user created over REST is visible through the GraphQL query.
#[tokio::test]
async fn get_user_by_id() {
    common::init_tracing();
    let Some(ctx) = common::live_context() else {
        return;
    };

    let user = ctx.user_for_run(&NewUser::new(
        "Lucas Ortega",
        Gender::Male,
        "lucas.ortega@gmail.com",
        UserStatus::Active,
    ));
    let created = ctx
        .client
        .post("/users", &user)
        .await
        .expect("create call failed");
    assert_eq!(
        created.status.as_u16(),
        201,
        "create failed: {:?}",
        created.body
    );
    let id = created.id_at("/id").expect("created user id missing");

    let resp = ctx
        .client
        .graphql(&user_query(&id))
        .await
        .expect("graphql query failed");

    assert_eq!(resp.status.as_u16(), 200);
    assert_eq!(resp.id_at("/data/user/id").as_deref(), Some(id.as_str()));
    assert_eq!(resp.str_at("/data/user/name"), Some("Lucas Ortega"));
}

/// The `createUser` mutation assigns an id and echoes the input.
#[tokio::test]
async fn create_user() {
    common::init_tracing();
    let Some(ctx) = common::live_context() else {
        return;
    };

    let user = ctx.user_for_run(&NewUser::new(
        "María González",
        Gender::Female,
        "maria.gonzalez@gmail.com",
        UserStatus::Active,
    ));

    let resp = ctx
        .client
        .graphql(&create_user_mutation(&user))
        .await
        .expect("graphql create failed");

    assert_eq!(resp.status.as_u16(), 200);
    assert!(
        resp.id_at("/data/createUser/user/id").is_some(),
        "created user id should not be null: {:?}",
        resp.body
    );
    assert_eq!(
        resp.str_at("/data/createUser/user/name"),
        Some("María González")
    );
    assert_eq!(resp.str_at("/data/createUser/user/status"), Some("active"));
}

/// The `updateUser` mutation changes name and status of a user created in
/// the same scenario.
#[tokio::test]
async fn update_user() {
    common::init_tracing();
    let Some(ctx) = common::live_context() else {
        return;
    };

    let user = ctx.user_for_run(&NewUser::new(
        "Lucas Ramírez",
        Gender::Male,
        "lucas.ramirez@gmail.com",
        UserStatus::Active,
    ));
    let created = ctx
        .client
        .graphql(&create_user_mutation(&user))
        .await
        .expect("graphql create failed");
    assert_eq!(
        created.status.as_u16(),
        200,
        "create failed: {:?}",
        created.body
    );
    let id = created
        .id_at("/data/createUser/user/id")
        .expect("created user id missing");

    let updated = ctx
        .client
        .graphql(&update_user_mutation(
            &id,
            "Lucas R. (updated)",
            UserStatus::Inactive,
        ))
        .await
        .expect("graphql update failed");

    assert_eq!(updated.status.as_u16(), 200);
    assert_eq!(
        updated.str_at("/data/updateUser/user/name"),
        Some("Lucas R. (updated)")
    );
    assert_eq!(
        updated.str_at("/data/updateUser/user/status"),
        Some("inactive")
    );
}

/// The `deleteUser` mutation echoes the deleted user; querying the same id
/// afterwards yields a null user.
#[tokio::test]
async fn delete_user() {
    common::init_tracing();
    let Some(ctx) = common::live_context() else {
        return;
    };

    let user = ctx.user_for_run(&NewUser::new(
        "Diego Torres",
        Gender::Male,
        "diego.torres@gmail.com",
        UserStatus::Active,
    ));
    let created = ctx
        .client
        .graphql(&create_user_mutation(&user))
        .await
        .expect("graphql create failed");
    assert_eq!(
        created.status.as_u16(),
        200,
        "create failed: {:?}",
        created.body
    );
    let id = created
        .id_at("/data/createUser/user/id")
        .expect("created user id missing");

    let deleted = ctx
        .client
        .graphql(&delete_user_mutation(&id))
        .await
        .expect("graphql delete failed");
    assert_eq!(deleted.status.as_u16(), 200);
    assert_eq!(
        deleted.id_at("/data/deleteUser/user/id").as_deref(),
        Some(id.as_str()),
        "delete should echo the deleted id: {:?}",
        deleted.body
    );

    let fetched = ctx
        .client
        .graphql(&user_query(&id))
        .await
        .expect("graphql query failed");
    assert_eq!(fetched.status.as_u16(), 200);
    assert_eq!(
        fetched.pointer("/data/user"),
        Some(&Value::Null),
        "deleted user should be null: {:?}",
        fetched.body
    );
}
