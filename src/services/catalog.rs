use std::sync::Arc;

use crate::{
    db::SkinStore,
    error::AppResult,
    models::{
        product::ANY_TAG, Product, RecommendedStep, RoutineStep, SkinType, StepName,
        WeatherCondition,
    },
};

/// Attribute filter over the product catalog
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub skin_type: Option<String>,
    pub category: Option<StepName>,
    pub conditions: Vec<WeatherCondition>,
    pub concerns: Vec<String>,
}

impl ProductQuery {
    /// Whether the product satisfies every populated part of the query
    ///
    /// Conditions and concerns are "any of" filters; `all` on the product
    /// side matches any skin type or weather.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(skin_type) = &self.skin_type {
            if !has_tag(&product.skin_types, skin_type) {
                return false;
            }
        }

        if let Some(category) = self.category {
            if !product.category.eq_ignore_ascii_case(category.category()) {
                return false;
            }
        }

        if !self.conditions.is_empty()
            && !self
                .conditions
                .iter()
                .any(|c| has_tag(&product.weather_conditions, c.as_str()))
        {
            return false;
        }

        if !self.concerns.is_empty()
            && !self
                .concerns
                .iter()
                .any(|c| product.concerns.iter().any(|pc| pc.eq_ignore_ascii_case(c)))
        {
            return false;
        }

        true
    }

    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        products.into_iter().filter(|p| self.matches(p)).collect()
    }
}

fn has_tag(tags: &[String], wanted: &str) -> bool {
    tags.iter()
        .any(|t| t.eq_ignore_ascii_case(ANY_TAG) || t.eq_ignore_ascii_case(wanted))
}

/// Searches the catalog
pub async fn find_products(
    store: Arc<dyn SkinStore>,
    query: &ProductQuery,
) -> AppResult<Vec<Product>> {
    let products = store.list_products(query.category).await?;
    let matched = query.apply(products);

    tracing::debug!(
        skin_type = ?query.skin_type,
        category = ?query.category,
        concerns = ?query.concerns,
        results = matched.len(),
        "Catalog search completed"
    );

    Ok(matched)
}

/// Attaches matching catalog products to each routine step
///
/// The catalog is read once and partitioned by step category.
pub async fn enrich_routine(
    store: Arc<dyn SkinStore>,
    routine: Vec<RoutineStep>,
    skin_type: SkinType,
    concerns: &[String],
    conditions: &[WeatherCondition],
) -> AppResult<Vec<RecommendedStep>> {
    let catalog = store.list_products(None).await?;

    let enriched = routine
        .into_iter()
        .map(|step| {
            let query = ProductQuery {
                skin_type: Some(skin_type.as_str().to_string()),
                category: Some(step.step),
                conditions: conditions.to_vec(),
                concerns: concerns.to_vec(),
            };
            let products = catalog
                .iter()
                .filter(|p| query.matches(p))
                .cloned()
                .collect();
            RecommendedStep { step, products }
        })
        .collect();

    Ok(enriched)
}
