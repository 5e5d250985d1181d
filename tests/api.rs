//! End-to-end handler tests against the bundled data/ artifacts.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Json, State};
use serde_json::{json, Value};

use hoopcast::classifier::Classifier;
use hoopcast::dataset::ReferenceTable;
use hoopcast::handlers::predict;
use hoopcast::models::PredictionInput;
use hoopcast::AppState;

fn data_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("data");
    path.push(name);
    path
}

fn app_state() -> AppState {
    let table =
        ReferenceTable::load(&data_path("nba_logreg.csv")).expect("bundled dataset should load");
    let classifier = Classifier::load(&data_path("players_classifier.json"))
        .expect("bundled classifier artifact should load");
    AppState {
        table: Arc::new(table),
        classifier: Arc::new(classifier),
    }
}

async fn post(state: &AppState, body: Value) -> Value {
    let input: PredictionInput = serde_json::from_value(body).expect("valid request body");
    let Json(response) = predict::query(State(state.clone()), Json(input))
        .await
        .expect("handler should answer");
    serde_json::to_value(&response).expect("response serializes")
}

#[test]
fn bundled_dataset_deduplicates() {
    let state = app_state();
    // 28 source rows: one exact duplicate and one repeated name.
    assert_eq!(state.table.len(), 26);
    // The later of the two Chris Smith rows is the one kept.
    assert_eq!(state.table.get("Chris Smith").unwrap().gp, 43);
}

#[tokio::test]
async fn lookup_returns_the_stored_record() {
    let state = app_state();
    let response = post(&state, json!({ "name": "Malik Sealy" })).await;

    // Raw record shape: stat keys, no name, no prediction fields.
    assert_eq!(response["GP"], json!(58));
    assert_eq!(response["MIN"], json!(11.6));
    assert_eq!(response["FG%"], json!(41.8));
    assert_eq!(response["TARGET_5Yrs"], json!(1.0));
    assert!(response.get("Name").is_none());
    assert!(response.get("prediction").is_none());
}

#[tokio::test]
async fn lookup_is_idempotent() {
    let state = app_state();
    let first = post(&state, json!({ "name": "Robert Horry" })).await;
    let second = post(&state, json!({ "name": "Robert Horry" })).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_player_gets_the_sentinel() {
    let state = app_state();
    let response = post(&state, json!({ "name": "Nonexistent Player XYZ" })).await;
    assert_eq!(
        response,
        json!({
            "prediction": -1,
            "prediction_proba": -1.0,
            "warnings": "Unknown player"
        })
    );
}

#[tokio::test]
async fn full_stat_line_predicts_without_warnings() {
    let state = app_state();
    let body = json!({
        "GP": 58, "MIN": 11.6, "PTS": 5.7, "FGM": 2.3, "FGA": 5.5,
        "FTM": 0.9, "FTA": 1.3, "OREB": 1.0, "DREB": 0.9, "REB": 1.9,
        "AST": 0.8, "STL": 0.6, "BLK": 0.1, "TOV": 1.0
    });

    let response = post(&state, body.clone()).await;
    let prediction = response["prediction"].as_i64().unwrap();
    let proba = response["prediction_proba"].as_f64().unwrap();
    assert!(prediction == 0 || prediction == 1);
    assert!((0.0..=1.0).contains(&proba));
    assert_eq!(response["warnings"], json!(""));

    // Deterministic across calls.
    assert_eq!(response, post(&state, body).await);
}

#[tokio::test]
async fn a_name_never_reaches_the_classifier() {
    let state = app_state();
    // Stats that would classify fine are ignored once a name is set.
    let response = post(
        &state,
        json!({ "name": "Malik Sealy", "GP": 58, "PTS": 5.7 }),
    )
    .await;
    assert!(response.get("prediction").is_none());
}

#[tokio::test]
async fn omitted_fields_default_to_zero_and_warn() {
    let state = app_state();
    let response = post(&state, json!({ "GP": 58, "MIN": 11.6, "PTS": 5.7 })).await;

    let warnings = response["warnings"].as_str().unwrap();
    // 11 of the 14 numeric fields were left to default.
    assert_eq!(warnings.lines().count(), 11);
    assert!(warnings.contains("Received param FGM = 0"));
    assert!(!warnings.contains("Received param GP = 0"));
}

#[tokio::test]
async fn explicit_zero_warns_like_an_absent_field() {
    let state = app_state();
    let explicit = post(&state, json!({ "GP": 58, "BLK": 0.0 })).await;
    let absent = post(&state, json!({ "GP": 58 })).await;
    assert_eq!(explicit, absent);
}

#[tokio::test]
async fn health_reports_the_table_size() {
    let state = app_state();
    let Json(health) = hoopcast::handlers::health::check(State(state)).await;
    let value = serde_json::to_value(&health).unwrap();
    assert_eq!(value["status"], json!("healthy"));
    assert_eq!(value["players"], json!(26));
}
