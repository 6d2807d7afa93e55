//! HTTP-level integration tests for the `/workspaces` resource and the
//! membership rule.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete_auth, get_auth, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

/// Signup, login, create a workspace, and find it in the caller's list.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_to_workspace_scenario(pool: PgPool) {
    common::register_user(&pool, "alice").await;
    let token = common::login(&pool, "alice").await;

    let body = json!({ "name": "Eng", "description": "team" });
    let response = post_json_auth(build_test_app(pool.clone()), "/workspaces/", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["workspace"]["name"], "Eng");
    assert_eq!(created["role"]["role"], 1);
    assert_eq!(created["role"]["workspace_id"], created["workspace"]["id"]);

    let response = get_auth(build_test_app(pool), "/workspaces/", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let list = body_json(response).await;
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|w| w["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Eng"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_requires_name(pool: PgPool) {
    let token = common::register_and_login(&pool, "alice").await;

    for body in [json!({ "description": "x" }), json!({ "name": "  " })] {
        let response =
            post_json_auth(build_test_app(pool.clone()), "/workspaces", &token, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_only_shows_own_workspaces(pool: PgPool) {
    let alice = common::register_and_login(&pool, "alice").await;
    let bob = common::register_and_login(&pool, "bob").await;
    common::create_workspace(&pool, &alice, "Eng").await;
    common::create_workspace(&pool, &bob, "Ops").await;

    let response = get_auth(build_test_app(pool), "/workspaces", &bob).await;
    let list = body_json(response).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Ops");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_description_is_a_json_string(pool: PgPool) {
    let token = common::register_and_login(&pool, "alice").await;
    let id = common::create_workspace(&pool, &token, "Eng").await;

    let response = get_auth(build_test_app(pool), &format!("/workspaces/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!("Eng workspace"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_member_is_forbidden(pool: PgPool) {
    let alice = common::register_and_login(&pool, "alice").await;
    let bob = common::register_and_login(&pool, "bob").await;
    let eng = common::create_workspace(&pool, &alice, "Eng").await;
    // Bob is a member of a different workspace, which grants nothing on Eng.
    common::create_workspace(&pool, &bob, "Ops").await;

    let uri = format!("/workspaces/{eng}");
    let response = get_auth(build_test_app(pool.clone()), &uri, &bob).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["code"], "FORBIDDEN");

    let response =
        put_json_auth(build_test_app(pool.clone()), &uri, &bob, json!({ "name": "Mine" })).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(build_test_app(pool.clone()), &uri, &bob).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_json_auth(
        build_test_app(pool),
        &format!("/workspaces/{eng}/tasks"),
        &bob,
        json!({ "title": "sneaky" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_only_overwrites_non_empty_fields(pool: PgPool) {
    let token = common::register_and_login(&pool, "alice").await;
    let id = common::create_workspace(&pool, &token, "Eng").await;

    let body = json!({ "name": "Engineering", "description": "" });
    let response =
        put_json_auth(build_test_app(pool), &format!("/workspaces/{id}"), &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Engineering");
    assert_eq!(json["description"], "Eng workspace");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_rejects_whitespace_name(pool: PgPool) {
    let token = common::register_and_login(&pool, "alice").await;
    let id = common::create_workspace(&pool, &token, "Eng").await;

    let body = json!({ "name": "   " });
    let response =
        put_json_auth(build_test_app(pool.clone()), &format!("/workspaces/{id}"), &token, body)
            .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = get_auth(build_test_app(pool), "/workspaces", &token).await;
    assert_eq!(body_json(response).await[0]["name"], "Eng");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_workspace_cascades(pool: PgPool) {
    let token = common::register_and_login(&pool, "alice").await;
    let id = common::create_workspace(&pool, &token, "Eng").await;

    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/workspaces/{id}/tasks"),
        &token,
        json!({ "title": "Ship it" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response =
        delete_auth(build_test_app(pool.clone()), &format!("/workspaces/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(build_test_app(pool.clone()), "/workspaces", &token).await;
    assert_eq!(body_json(response).await, json!([]));

    let response =
        get_auth(build_test_app(pool.clone()), &format!("/workspaces/{id}/tasks"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let live_tasks: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE workspace_id = $1 AND deleted_at IS NULL")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(live_tasks, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_bad_path_param_is_bad_request(pool: PgPool) {
    let token = common::register_and_login(&pool, "alice").await;

    let id = common::create_workspace(&pool, &token, "Eng").await;

    for uri in [
        "/workspaces/not-a-number".to_string(),
        "/workspaces/not-a-number/tasks".to_string(),
        format!("/workspaces/{id}/tasks/abc"),
        format!("/workspaces/{id}/tasks/abc/subtasks"),
    ] {
        let response = get_auth(build_test_app(pool.clone()), &uri, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "BAD_REQUEST", "uri: {uri}");
        assert!(json["error"].is_string());
    }
}
