//! Prediction handler: the dispatch core
//!
//! One endpoint, two mutually exclusive modes decided by the presence
//! of a non-empty `name` in the body. Lookup hits answer with the raw
//! stored record; everything else answers with a `PredictionOutput`.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::models::{PlayerQuery, PlayerRecord, PredictionInput, PredictionOutput, StatLine};
use crate::{AppResult, AppState};

/// Response body for `POST /`.
///
/// The two variants have deliberately different shapes; callers must
/// branch on whether a `prediction` key is present.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QueryResponse {
    Record(PlayerRecord),
    Prediction(PredictionOutput),
}

/// Handle a lookup-or-predict request
pub async fn query(
    State(state): State<AppState>,
    Json(input): Json<PredictionInput>,
) -> AppResult<Json<QueryResponse>> {
    match PlayerQuery::from(input) {
        PlayerQuery::Lookup { name } => match state.table.get(&name) {
            Some(record) => {
                tracing::debug!("lookup hit: {}", name);
                Ok(Json(QueryResponse::Record(record.clone())))
            }
            None => {
                tracing::debug!("lookup miss: {}", name);
                Ok(Json(QueryResponse::Prediction(
                    PredictionOutput::unknown_player(),
                )))
            }
        },
        PlayerQuery::Predict { stats } => {
            let verdict = state.classifier.predict(&stats.feature_vector())?;
            tracing::debug!(
                "predicted {} (p = {:.3})",
                verdict.label,
                verdict.confidence
            );
            Ok(Json(QueryResponse::Prediction(PredictionOutput {
                prediction: verdict.label,
                prediction_proba: verdict.confidence,
                warnings: zero_warnings(&stats),
            })))
        }
    }
}

/// One line per zero-valued numeric field, in model order.
///
/// A field the caller omitted defaults to 0 and warns exactly like an
/// explicit 0; the two are indistinguishable after parsing. Non-empty
/// output carries a trailing newline.
fn zero_warnings(stats: &StatLine) -> String {
    let mut warnings = String::new();
    for (field, value) in stats.fields() {
        if value == 0.0 {
            warnings.push_str(&format!("Received param {field} = 0\n"));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FEATURE_FIELDS;

    fn full_stat_line() -> StatLine {
        StatLine {
            gp: 58,
            min: 11.6,
            pts: 5.7,
            fgm: 2.3,
            fga: 5.5,
            ftm: 0.9,
            fta: 1.3,
            oreb: 1.0,
            dreb: 0.9,
            reb: 1.9,
            ast: 0.8,
            stl: 0.6,
            blk: 0.1,
            tov: 1.0,
        }
    }

    #[test]
    fn no_warnings_when_all_fields_are_nonzero() {
        assert_eq!(zero_warnings(&full_stat_line()), "");
    }

    #[test]
    fn one_line_per_zero_field() {
        let stats = StatLine {
            blk: 0.0,
            tov: 0.0,
            ..full_stat_line()
        };
        let warnings = zero_warnings(&stats);
        assert_eq!(
            warnings,
            "Received param BLK = 0\nReceived param TOV = 0\n"
        );
        assert_eq!(warnings.lines().count(), 2);
    }

    #[test]
    fn all_defaulted_fields_warn() {
        let warnings = zero_warnings(&StatLine::default());
        assert_eq!(warnings.lines().count(), FEATURE_FIELDS.len());
        assert!(warnings.starts_with("Received param GP = 0\n"));
        assert!(warnings.ends_with("Received param TOV = 0\n"));
    }
}
