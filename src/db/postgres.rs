use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::SkinStore,
    error::AppResult,
    models::{MoodLogEntry, NewMoodEntry, NewProduct, Product, StepName},
};

/// Creates the PostgreSQL pool shared by every store call
pub async fn create_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Applies the embedded schema migrations
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

/// Postgres-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl SkinStore for PgStore {
    async fn insert_mood(&self, entry: NewMoodEntry) -> AppResult<MoodLogEntry> {
        let row = sqlx::query_as::<_, MoodLogEntry>(
            r#"
            INSERT INTO skin_mood_entries (date, mood, notes, weather_temp, weather_humidity)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, date, mood, notes, weather_temp, weather_humidity, created_at
            "#,
        )
        .bind(entry.date)
        .bind(&entry.mood)
        .bind(&entry.notes)
        .bind(entry.weather_temp)
        .bind(entry.weather_humidity)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(id = row.id, mood = %row.mood, "Mood entry stored");

        Ok(row)
    }

    async fn recent_moods(&self, limit: i64) -> AppResult<Vec<MoodLogEntry>> {
        let rows = sqlx::query_as::<_, MoodLogEntry>(
            r#"
            SELECT id, date, mood, notes, weather_temp, weather_humidity, created_at
            FROM skin_mood_entries
            ORDER BY date DESC, created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn list_products(&self, category: Option<StepName>) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, category, skin_types, concerns, ingredients, description,
                   weather_conditions
            FROM products
            WHERE $1::TEXT IS NULL OR category = $1
            ORDER BY id
            "#,
        )
        .bind(category.map(|c| c.category()))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn seed_products(&self, products: &[NewProduct]) -> AppResult<u64> {
        let owned = |tags: &[&str]| -> Vec<String> { tags.iter().map(|t| t.to_string()).collect() };
        let mut inserted = 0;

        for product in products {
            let result = sqlx::query(
                r#"
                INSERT INTO products
                    (name, category, skin_types, concerns, ingredients, description, weather_conditions)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ON CONFLICT (name) DO NOTHING
                "#,
            )
            .bind(product.name)
            .bind(product.category)
            .bind(owned(product.skin_types))
            .bind(owned(product.concerns))
            .bind(owned(product.ingredients))
            .bind(product.description)
            .bind(owned(product.weather_conditions))
            .execute(&self.pool)
            .await?;

            inserted += result.rows_affected();
        }

        tracing::info!(inserted, total = products.len(), "Product catalog seeded");

        Ok(inserted)
    }
}
