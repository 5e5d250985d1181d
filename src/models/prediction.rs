//! Prediction request/response models

use serde::{Deserialize, Serialize};

/// Feature fields in model order. The classifier artifact was trained
/// against exactly this layout (GP included, 14 features), and the
/// zero-value warnings iterate it so their ordering is reproducible.
pub const FEATURE_FIELDS: [&str; 14] = [
    "GP", "MIN", "PTS", "FGM", "FGA", "FTM", "FTA", "OREB", "DREB", "REB", "AST", "STL", "BLK",
    "TOV",
];

/// Request body for `POST /`.
///
/// All fields are optional on the wire; numeric fields default to 0
/// and unrecognized fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "GP", default)]
    pub gp: u32,
    #[serde(rename = "MIN", default)]
    pub min: f64,
    #[serde(rename = "PTS", default)]
    pub pts: f64,
    #[serde(rename = "FGM", default)]
    pub fgm: f64,
    #[serde(rename = "FGA", default)]
    pub fga: f64,
    #[serde(rename = "FTM", default)]
    pub ftm: f64,
    #[serde(rename = "FTA", default)]
    pub fta: f64,
    #[serde(rename = "OREB", default)]
    pub oreb: f64,
    #[serde(rename = "DREB", default)]
    pub dreb: f64,
    #[serde(rename = "REB", default)]
    pub reb: f64,
    #[serde(rename = "AST", default)]
    pub ast: f64,
    #[serde(rename = "STL", default)]
    pub stl: f64,
    #[serde(rename = "BLK", default)]
    pub blk: f64,
    #[serde(rename = "TOV", default)]
    pub tov: f64,
}

/// Classification response body, also used as the unknown-player
/// sentinel (`prediction = -1`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutput {
    pub prediction: i32,
    pub prediction_proba: f64,
    #[serde(default)]
    pub warnings: String,
}

impl PredictionOutput {
    /// Sentinel for a name with no reference-table entry.
    pub fn unknown_player() -> Self {
        Self {
            prediction: -1,
            prediction_proba: -1.0,
            warnings: "Unknown player".to_string(),
        }
    }
}

/// The two request modes, decided once at the parse boundary.
///
/// A non-empty `name` selects a lookup and the numeric fields are
/// ignored; otherwise the stat line is classified and `name` plays no
/// part. There is no third mode and no ambiguity.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerQuery {
    Lookup { name: String },
    Predict { stats: StatLine },
}

impl From<PredictionInput> for PlayerQuery {
    fn from(input: PredictionInput) -> Self {
        match &input.name {
            Some(name) if !name.is_empty() => PlayerQuery::Lookup { name: name.clone() },
            _ => PlayerQuery::Predict {
                stats: StatLine::from(input),
            },
        }
    }
}

/// The 14 numeric request fields, detached from the lookup name.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatLine {
    pub gp: u32,
    pub min: f64,
    pub pts: f64,
    pub fgm: f64,
    pub fga: f64,
    pub ftm: f64,
    pub fta: f64,
    pub oreb: f64,
    pub dreb: f64,
    pub reb: f64,
    pub ast: f64,
    pub stl: f64,
    pub blk: f64,
    pub tov: f64,
}

impl StatLine {
    /// Values paired with their wire names, in [`FEATURE_FIELDS`] order.
    pub fn fields(&self) -> [(&'static str, f64); FEATURE_FIELDS.len()] {
        [
            ("GP", f64::from(self.gp)),
            ("MIN", self.min),
            ("PTS", self.pts),
            ("FGM", self.fgm),
            ("FGA", self.fga),
            ("FTM", self.ftm),
            ("FTA", self.fta),
            ("OREB", self.oreb),
            ("DREB", self.dreb),
            ("REB", self.reb),
            ("AST", self.ast),
            ("STL", self.stl),
            ("BLK", self.blk),
            ("TOV", self.tov),
        ]
    }

    /// The classifier input vector, in model order.
    pub fn feature_vector(&self) -> Vec<f64> {
        self.fields().iter().map(|&(_, value)| value).collect()
    }
}

impl From<PredictionInput> for StatLine {
    fn from(input: PredictionInput) -> Self {
        Self {
            gp: input.gp,
            min: input.min,
            pts: input.pts,
            fgm: input.fgm,
            fga: input.fga,
            ftm: input.ftm,
            fta: input.fta,
            oreb: input.oreb,
            dreb: input.dreb,
            reb: input.reb,
            ast: input.ast,
            stl: input.stl,
            blk: input.blk,
            tov: input.tov,
        }
    }
}
