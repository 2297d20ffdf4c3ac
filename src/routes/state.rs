use std::sync::Arc;

use crate::{db::SkinStore, services::WeatherService};

/// Shared application state
///
/// Holds only injected collaborators; the scoring engine itself is stateless.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SkinStore>,
    pub weather: WeatherService,
}

impl AppState {
    pub fn new(store: Arc<dyn SkinStore>, weather: WeatherService) -> Self {
        Self { store, weather }
    }
}
