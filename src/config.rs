//! Configuration module

use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the reference dataset CSV
    pub dataset_path: PathBuf,

    /// Path to the serialized classifier artifact
    pub model_path: PathBuf,

    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            dataset_path: env::var("DATASET_PATH")
                .unwrap_or_else(|_| "data/nba_logreg.csv".to_string())
                .into(),

            model_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| "data/players_classifier.json".to_string())
                .into(),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
        }
    }
}
