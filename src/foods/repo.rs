use sqlx::PgPool;

use super::repo_types::{FoodFields, FoodRecord};

/// Load the whole catalog in storage order.
pub async fn list_all(db: &PgPool) -> Result<Vec<FoodRecord>, sqlx::Error> {
    sqlx::query_as::<_, FoodRecord>(
        r#"
        SELECT id, food_name, calories, category, description, protein, carbs, fats
        FROM food_choices
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await
}

/// Insert a new entry; the table assigns the id.
pub async fn insert(db: &PgPool, fields: &FoodFields) -> Result<FoodRecord, sqlx::Error> {
    sqlx::query_as::<_, FoodRecord>(
        r#"
        INSERT INTO food_choices (food_name, calories, category, description, protein, carbs, fats)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, food_name, calories, category, description, protein, carbs, fats
        "#,
    )
    .bind(&fields.name)
    .bind(fields.calories)
    .bind(fields.category.as_str())
    .bind(&fields.description)
    .bind(fields.protein)
    .bind(fields.carbs)
    .bind(fields.fats)
    .fetch_one(db)
    .await
}

/// Replace every field of the entry at `id`. Returns None when the id is
/// no longer present.
pub async fn update(
    db: &PgPool,
    id: i64,
    fields: &FoodFields,
) -> Result<Option<FoodRecord>, sqlx::Error> {
    sqlx::query_as::<_, FoodRecord>(
        r#"
        UPDATE food_choices
        SET food_name = $1, calories = $2, category = $3, description = $4,
            protein = $5, carbs = $6, fats = $7
        WHERE id = $8
        RETURNING id, food_name, calories, category, description, protein, carbs, fats
        "#,
    )
    .bind(&fields.name)
    .bind(fields.calories)
    .bind(fields.category.as_str())
    .bind(&fields.description)
    .bind(fields.protein)
    .bind(fields.carbs)
    .bind(fields.fats)
    .bind(id)
    .fetch_optional(db)
    .await
}

/// Delete the entry at `id`; reports whether a row was actually removed.
pub async fn delete(db: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM food_choices WHERE id = $1"#)
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}
