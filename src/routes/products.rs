use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Product, StepName, WeatherCondition},
    routes::AppState,
    services::catalog::{self, ProductQuery},
};

#[derive(Debug, Deserialize)]
pub struct ProductSearchQuery {
    skin_type: Option<String>,
    concern: Option<String>,
    condition: Option<String>,
    category: Option<String>,
}

impl ProductSearchQuery {
    fn into_query(self) -> AppResult<ProductQuery> {
        let category = match self.category.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(StepName::from_category(raw).ok_or_else(|| {
                AppError::InvalidInput(format!("Unknown product category: {}", raw))
            })?),
        };

        let conditions = match self.condition.as_deref().map(str::trim) {
            None | Some("") => Vec::new(),
            Some(raw) => vec![WeatherCondition::parse(raw).ok_or_else(|| {
                AppError::InvalidInput(format!("Unknown weather condition: {}", raw))
            })?],
        };

        let non_blank = |value: Option<String>| {
            value
                .map(|v| v.trim().to_lowercase())
                .filter(|v| !v.is_empty())
        };

        Ok(ProductQuery {
            skin_type: non_blank(self.skin_type),
            category,
            conditions,
            concerns: non_blank(self.concern).into_iter().collect(),
        })
    }
}

/// Handler for catalog search
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProductSearchQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let query = params.into_query()?;
    let products = catalog::find_products(state.store.clone(), &query).await?;
    Ok(Json(products))
}
