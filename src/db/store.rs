use crate::{
    error::AppResult,
    models::{MoodLogEntry, NewMoodEntry, NewProduct, Product, StepName},
};

/// Persistence for the mood log and the product catalog
///
/// Each call is a single independent statement; callers never hold a
/// transaction across calls.
#[async_trait::async_trait]
pub trait SkinStore: Send + Sync {
    /// Persists a mood entry and returns it with its id and timestamp
    async fn insert_mood(&self, entry: NewMoodEntry) -> AppResult<MoodLogEntry>;

    /// Most recent entries first
    async fn recent_moods(&self, limit: i64) -> AppResult<Vec<MoodLogEntry>>;

    /// Catalog products, optionally restricted to one routine category
    async fn list_products(&self, category: Option<StepName>) -> AppResult<Vec<Product>>;

    /// Inserts products that are not in the catalog yet (matched by name)
    ///
    /// Returns how many were inserted.
    async fn seed_products(&self, products: &[NewProduct]) -> AppResult<u64>;
}
