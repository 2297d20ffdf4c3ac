use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use chrono::Utc;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use skincast::{
    db::SkinStore,
    error::AppResult,
    models::{
        product::SEED_PRODUCTS, Coordinates, MoodLogEntry, NewMoodEntry, NewProduct, Product,
        StepName, WeatherReading,
    },
    routes::{create_router, AppState},
    services::{WeatherProvider, WeatherService},
};

/// In-memory store standing in for Postgres
#[derive(Default)]
struct MemoryStore {
    moods: Mutex<Vec<MoodLogEntry>>,
    products: Mutex<Vec<Product>>,
}

#[async_trait::async_trait]
impl SkinStore for MemoryStore {
    async fn insert_mood(&self, entry: NewMoodEntry) -> AppResult<MoodLogEntry> {
        let mut moods = self.moods.lock().await;
        let stored = MoodLogEntry {
            id: moods.len() as i64 + 1,
            date: entry.date,
            mood: entry.mood,
            notes: entry.notes,
            weather_temp: entry.weather_temp,
            weather_humidity: entry.weather_humidity,
            created_at: Utc::now(),
        };
        moods.push(stored.clone());
        Ok(stored)
    }

    async fn recent_moods(&self, limit: i64) -> AppResult<Vec<MoodLogEntry>> {
        let mut moods = self.moods.lock().await.clone();
        moods.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        moods.truncate(limit as usize);
        Ok(moods)
    }

    async fn list_products(&self, category: Option<StepName>) -> AppResult<Vec<Product>> {
        let products = self.products.lock().await;
        Ok(products
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c.category()))
            .cloned()
            .collect())
    }

    async fn seed_products(&self, seed: &[NewProduct]) -> AppResult<u64> {
        let mut products = self.products.lock().await;
        let mut inserted = 0;
        for new in seed {
            if products.iter().any(|p| p.name == new.name) {
                continue;
            }
            let id = products.len() as i32 + 1;
            products.push(new.into_product(id));
            inserted += 1;
        }
        Ok(inserted)
    }
}

/// Provider reporting hot, humid, high-UV weather everywhere
struct SteamyProvider;

#[async_trait::async_trait]
impl WeatherProvider for SteamyProvider {
    async fn fetch_current(&self, _coords: Coordinates) -> AppResult<WeatherReading> {
        Ok(WeatherReading::new(85.0, 32.0, 7.0).with_place("Testville"))
    }

    fn name(&self) -> &'static str {
        "steamy"
    }
}

async fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::default());
    store.seed_products(SEED_PRODUCTS).await.unwrap();
    store
}

async fn create_test_server(provider: Option<Arc<dyn WeatherProvider>>) -> TestServer {
    let store = seeded_store().await;
    let weather = WeatherService::new(provider, "istanbul".to_string());
    let app = create_router(AppState::new(store, weather));
    TestServer::new(app).unwrap()
}

async fn live_server() -> TestServer {
    let provider: Arc<dyn WeatherProvider> = Arc::new(SteamyProvider);
    create_test_server(Some(provider)).await
}

async fn fallback_server() -> TestServer {
    create_test_server(None).await
}

fn step_names(body: &Value) -> Vec<String> {
    body["routine"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["step"].as_str().unwrap().to_string())
        .collect()
}

fn product_names(step: &Value) -> Vec<&str> {
    step["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let server = fallback_server().await;
    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_request_id_is_generated_and_echoed() {
    let server = fallback_server().await;

    let response = server.get("/health").await;
    let generated = response.header("x-request-id");
    assert!(!generated.is_empty());

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("trace-42"),
        )
        .await;
    assert_eq!(response.header("x-request-id"), "trace-42");
}

#[tokio::test]
async fn test_full_routine_in_live_weather() {
    let server = live_server().await;

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({
            "skin_type": "oily",
            "sensitivity": "sensitive",
            "concerns": ["acne"],
            "latitude": 41.0,
            "longitude": 29.0
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["weather"]["source"], "live");
    assert_eq!(body["weather"]["place"], "Testville");
    assert_eq!(body["weather"]["conditions"], json!(["hot", "humid"]));
    assert_eq!(body["skin_profile"]["skin_type"], "oily");
    assert_eq!(body["skin_profile"]["sensitive"], true);

    assert_eq!(
        step_names(&body),
        vec!["Cleanse", "Tone", "Treat", "Moisturize", "Protect"]
    );

    let routine = body["routine"].as_array().unwrap();
    assert_eq!(routine[0]["product"], "Gel or foam cleanser");
    assert_eq!(routine[1]["product"], "Alcohol-free calming toner");
    assert_eq!(routine[2]["product"], "Salicylic acid serum");
    assert_eq!(routine[3]["product"], "Light gel moisturizer");
    assert_eq!(routine[4]["product"], "Broad-spectrum SPF 50+");
    assert_eq!(routine[4]["reason"], "UV index is 7 - sun protection needed");

    assert_eq!(product_names(&routine[0]), vec!["Gentle Foam Cleanser"]);
    assert_eq!(product_names(&routine[2]), vec!["BHA Treatment"]);
    assert_eq!(product_names(&routine[3]), vec!["Light Gel Moisturizer"]);
}

#[tokio::test]
async fn test_climate_fallback_routine() {
    let server = fallback_server().await;

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({
            "skin_type": "dry",
            "sensitivity": "resistant",
            "city": "ankara"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["weather"]["source"], "climate_default");
    assert_eq!(body["weather"]["place"], "Ankara");
    assert_eq!(body["weather"]["humidity"], 55.0);

    let steps = step_names(&body);
    assert!(steps.len() == 3 || steps.len() == 4);
    assert_eq!(&steps[..3], &["Cleanse", "Tone", "Moisturize"]);

    let routine = body["routine"].as_array().unwrap();
    assert_eq!(routine[0]["product"], "Cream or milk cleanser");
    assert_eq!(routine[1]["product"], "Hydrating toner");
    assert_eq!(routine[2]["product"], "Medium-weight moisturizer");
}

#[tokio::test]
async fn test_recommendation_requires_skin_type() {
    let server = fallback_server().await;

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "sensitivity": "sensitive" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Missing required field: skin_type");
}

#[tokio::test]
async fn test_recommendation_rejects_bad_coordinates() {
    let server = fallback_server().await;

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({
            "skin_type": "oily",
            "sensitivity": "sensitive",
            "latitude": 120.0,
            "longitude": 29.0
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_quiz_questions() {
    let server = fallback_server().await;

    let response = server.get("/api/v1/quiz").await;
    response.assert_status_ok();

    let questions: Vec<Value> = response.json();
    assert_eq!(questions.len(), 6);
    assert_eq!(questions[0]["id"], 1);
    assert_eq!(questions[0]["axis"], "oily");
    assert_eq!(questions[0]["answers"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_quiz_submission() {
    let server = live_server().await;

    let response = server
        .post("/api/v1/quiz")
        .json(&json!({
            "answers": { "1": 90, "2": 90 },
            "city": "istanbul"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(
        body["base_score"],
        json!({ "oily": 90, "sensitive": 50, "pigmented": 50, "wrinkle": 50 })
    );
    assert_eq!(body["base_type"]["code"], "OSPW");
    assert_eq!(
        body["modifiers"],
        json!({ "oily": 30, "sensitive": 5, "pigmented": 15, "wrinkle": 0 })
    );
    assert_eq!(
        body["adjusted_score"],
        json!({ "oily": 100, "sensitive": 55, "pigmented": 65, "wrinkle": 50 })
    );
    assert_eq!(body["adjusted_type"]["code"], "OSPW");

    let concerns: Vec<&str> = body["priorities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["concern"].as_str().unwrap())
        .collect();
    assert_eq!(concerns, vec!["excess_oil", "pigmentation"]);

    assert_eq!(
        step_names(&body),
        vec!["Cleanse", "Tone", "Moisturize", "Protect"]
    );
}

#[tokio::test]
async fn test_quiz_clamps_oversized_answer_scores() {
    let server = fallback_server().await;

    let response = server
        .post("/api/v1/quiz")
        .json(&json!({ "answers": { "1": i32::MAX, "2": i32::MAX } }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["base_score"]["oily"], 100);
    assert_eq!(body["base_type"]["code"], "OSPW");
}

#[tokio::test]
async fn test_quiz_rejects_non_numeric_question_ids() {
    let server = fallback_server().await;

    let response = server
        .post("/api/v1/quiz")
        .json(&json!({ "answers": { "oily": 90 } }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_baumann_analysis() {
    let server = live_server().await;

    let response = server
        .post("/api/v1/baumann")
        .json(&json!({
            "oily": 60,
            "sensitive": 40,
            "pigmented": 40,
            "wrinkle": 70,
            "latitude": 41.0,
            "longitude": 29.0
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["base_type"]["code"], "ORNW");
    assert_eq!(
        body["adjusted_score"],
        json!({ "oily": 90, "sensitive": 45, "pigmented": 55, "wrinkle": 70 })
    );
    assert_eq!(body["adjusted_type"]["code"], "ORPW");

    let priorities = body["priorities"].as_array().unwrap();
    assert_eq!(priorities.len(), 3);
    assert_eq!(priorities[0]["concern"], "excess_oil");
    assert_eq!(priorities[0]["priority"], "high");
    assert_eq!(priorities[1]["concern"], "pigmentation");
    assert_eq!(priorities[1]["priority"], "high");
    assert_eq!(priorities[2]["concern"], "aging");
    assert_eq!(priorities[2]["priority"], "medium");

    assert_eq!(body["skin_profile"]["sensitive"], false);
    let routine = body["routine"].as_array().unwrap();
    assert_eq!(routine.len(), 5);
    assert_eq!(routine[2]["product"], "Vitamin C serum");
}

#[tokio::test]
async fn test_cities() {
    let server = fallback_server().await;

    let response = server.get("/api/v1/cities").await;
    response.assert_status_ok();

    let cities: Vec<Value> = response.json();
    assert_eq!(cities.len(), 12);
    assert!(cities.iter().any(|c| c["key"] == "istanbul"));
}

#[tokio::test]
async fn test_weather_endpoint() {
    let server = live_server().await;

    let response = server
        .get("/api/v1/weather")
        .add_query_param("lat", 41.0)
        .add_query_param("lon", 29.0)
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["source"], "live");
    assert_eq!(body["humidity"], 85.0);
    assert_eq!(body["temperature"], 32.0);
    assert_eq!(body["uv_index"], 7.0);
}

#[tokio::test]
async fn test_weather_endpoint_falls_back_to_default_city() {
    let server = fallback_server().await;

    let response = server.get("/api/v1/weather").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["source"], "climate_default");
    assert_eq!(body["place"], "İstanbul");
    assert_eq!(body["humidity"], 73.0);
}

#[tokio::test]
async fn test_mood_log_and_history() {
    let server = live_server().await;

    let response = server
        .post("/api/v1/mood")
        .json(&json!({
            "mood": "Irritated",
            "notes": "Red cheeks after the wind",
            "date": "2024-06-01",
            "city": "istanbul"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert_eq!(created["mood"], "irritated");
    assert_eq!(created["weather_temp"], 32.0);
    assert_eq!(created["weather_humidity"], 85);

    let response = server
        .post("/api/v1/mood")
        .json(&json!({ "mood": "glowing", "date": "2024-06-03" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert!(created["weather_temp"].is_null());
    assert!(created["weather_humidity"].is_null());

    let response = server.get("/api/v1/mood").await;
    response.assert_status_ok();
    let history: Vec<Value> = response.json();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["mood"], "glowing");
    assert_eq!(history[1]["mood"], "irritated");

    let response = server.get("/api/v1/mood").add_query_param("limit", 1).await;
    let history: Vec<Value> = response.json();
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn test_mood_validation() {
    let server = fallback_server().await;

    let response = server.post("/api/v1/mood").json(&json!({ "notes": "hi" })).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/api/v1/mood")
        .json(&json!({ "mood": "x".repeat(21) }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server.get("/api/v1/mood").add_query_param("limit", 0).await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_product_search() {
    let server = fallback_server().await;

    let response = server.get("/api/v1/products").await;
    response.assert_status_ok();
    let all: Vec<Value> = response.json();
    assert_eq!(all.len(), SEED_PRODUCTS.len());

    let response = server
        .get("/api/v1/products")
        .add_query_param("skin_type", "dry")
        .add_query_param("category", "treat")
        .await;
    response.assert_status_ok();
    let treats: Vec<Value> = response.json();
    let names: Vec<&str> = treats.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Vitamin C Serum"]);

    let response = server
        .get("/api/v1/products")
        .add_query_param("concern", "acne")
        .add_query_param("condition", "humid")
        .await;
    let matched: Vec<Value> = response.json();
    let names: Vec<&str> = matched.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec!["Gentle Foam Cleanser", "BHA Treatment", "Light Gel Moisturizer"]
    );
}

#[tokio::test]
async fn test_product_search_rejects_unknown_category() {
    let server = fallback_server().await;

    let response = server
        .get("/api/v1/products")
        .add_query_param("category", "exfoliate")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
