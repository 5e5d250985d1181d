//! Player record model

use serde::{Deserialize, Serialize};

/// One row of the reference table: a rookie-season stat line plus the
/// 5-year-career target label.
///
/// Column names follow the source CSV headers. `name` is the table key
/// and is skipped on serialization, so a lookup response carries only
/// the statistical fields (this is the wire shape, not an oversight).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "Name", skip_serializing)]
    pub name: String,
    #[serde(rename = "GP")]
    pub gp: u32,
    #[serde(rename = "MIN")]
    pub min: f64,
    #[serde(rename = "PTS")]
    pub pts: f64,
    #[serde(rename = "FGM")]
    pub fgm: f64,
    #[serde(rename = "FGA")]
    pub fga: f64,
    #[serde(rename = "FG%")]
    pub fg_pct: f64,
    #[serde(rename = "FTM")]
    pub ftm: f64,
    #[serde(rename = "FTA")]
    pub fta: f64,
    #[serde(rename = "FT%")]
    pub ft_pct: f64,
    #[serde(rename = "OREB")]
    pub oreb: f64,
    #[serde(rename = "DREB")]
    pub dreb: f64,
    #[serde(rename = "REB")]
    pub reb: f64,
    #[serde(rename = "AST")]
    pub ast: f64,
    #[serde(rename = "STL")]
    pub stl: f64,
    #[serde(rename = "BLK")]
    pub blk: f64,
    #[serde(rename = "TOV")]
    pub tov: f64,
    #[serde(rename = "TARGET_5Yrs")]
    pub target_5yrs: f64,
}

impl PlayerRecord {
    /// Identity key over the restricted column set, with float fields
    /// compared by bit pattern. Two rows with the same key are exact
    /// duplicates for deduplication purposes.
    pub(crate) fn dedup_key(&self) -> (String, [u64; 17]) {
        (
            self.name.clone(),
            [
                u64::from(self.gp),
                self.min.to_bits(),
                self.pts.to_bits(),
                self.fgm.to_bits(),
                self.fga.to_bits(),
                self.fg_pct.to_bits(),
                self.ftm.to_bits(),
                self.fta.to_bits(),
                self.ft_pct.to_bits(),
                self.oreb.to_bits(),
                self.dreb.to_bits(),
                self.reb.to_bits(),
                self.ast.to_bits(),
                self.stl.to_bits(),
                self.blk.to_bits(),
                self.tov.to_bits(),
                self.target_5yrs.to_bits(),
            ],
        )
    }
}
