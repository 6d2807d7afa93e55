use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    gorello_db::health_check(&pool).await.unwrap();

    let tables = ["users", "workspaces", "user_workspace_roles", "tasks", "sub_tasks"];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// `updated_at` is maintained by trigger on every update.
#[sqlx::test(migrations = "./migrations")]
async fn test_updated_at_trigger(pool: PgPool) {
    let (id, created): (i64, chrono::DateTime<chrono::Utc>) = sqlx::query_as(
        "INSERT INTO workspaces (name) VALUES ('Eng') RETURNING id, updated_at",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    let (updated,): (chrono::DateTime<chrono::Utc>,) = sqlx::query_as(
        "UPDATE workspaces SET name = 'Engineering' WHERE id = $1 RETURNING updated_at",
    )
    .bind(id)
    .fetch_one(&pool)
    .await
    .unwrap();

    assert!(updated >= created);
}
