use sqlx::PgPool;

use super::repo_types::{Goal, GoalFields};

/// Load every goal in storage order.
pub async fn list_all(db: &PgPool) -> Result<Vec<Goal>, sqlx::Error> {
    sqlx::query_as::<_, Goal>(
        r#"
        SELECT id, title, description, target_date, priority, completed
        FROM goals
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await
}

/// Insert a new goal; the table assigns the id.
pub async fn insert(db: &PgPool, fields: &GoalFields) -> Result<Goal, sqlx::Error> {
    sqlx::query_as::<_, Goal>(
        r#"
        INSERT INTO goals (title, description, target_date, priority, completed)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, description, target_date, priority, completed
        "#,
    )
    .bind(&fields.title)
    .bind(&fields.description)
    .bind(fields.target_date)
    .bind(fields.priority.as_str())
    .bind(fields.completed)
    .fetch_one(db)
    .await
}

/// Replace every field of the goal at `id`. Returns None when the id is
/// no longer present.
pub async fn update(
    db: &PgPool,
    id: i64,
    fields: &GoalFields,
) -> Result<Option<Goal>, sqlx::Error> {
    sqlx::query_as::<_, Goal>(
        r#"
        UPDATE goals
        SET title = $1, description = $2, target_date = $3, priority = $4, completed = $5
        WHERE id = $6
        RETURNING id, title, description, target_date, priority, completed
        "#,
    )
    .bind(&fields.title)
    .bind(&fields.description)
    .bind(fields.target_date)
    .bind(fields.priority.as_str())
    .bind(fields.completed)
    .bind(id)
    .fetch_optional(db)
    .await
}

/// Delete the goal at `id`; reports whether a row was actually removed.
pub async fn delete(db: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM goals WHERE id = $1"#)
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}
