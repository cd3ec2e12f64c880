// ── Inbound data contract ──
//
// Shapes delivered by the external analysis engine. The chart treats
// them as opaque inputs: no scoring or collection happens here.

use serde::{Deserialize, Serialize};

use crate::band::Band;

/// Per-channel statistics for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelStat {
    pub channel: u16,
    /// Number of access points observed on this channel.
    pub ap_count: u32,
    /// Congestion summary in `[0, 1]`.
    pub utilization_score: f64,
}

/// One entry of the ordered recommendation list. Rank is positional:
/// the first element is rank 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub channel: u16,
    pub band: Band,
    #[serde(default)]
    pub is_dfs: bool,
}

/// Wire payload for a chart update. Either field may be omitted or
/// `null`; both default to an empty sequence.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChartUpdate {
    #[serde(default)]
    pub stats: Option<Vec<ChannelStat>>,
    #[serde(default)]
    pub recommendations: Option<Vec<Recommendation>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn update_defaults_missing_fields() {
        let update: ChartUpdate = serde_json::from_str("{}").unwrap();
        assert_eq!(update, ChartUpdate::default());
    }

    #[test]
    fn update_defaults_null_fields() {
        let update: ChartUpdate =
            serde_json::from_str(r#"{"stats": null, "recommendations": null}"#).unwrap();
        assert!(update.stats.is_none());
        assert!(update.recommendations.is_none());
    }

    #[test]
    fn update_parses_engine_payload() {
        let update: ChartUpdate = serde_json::from_str(
            r#"{
                "stats": [{"channel": 6, "ap_count": 4, "utilization_score": 0.65}],
                "recommendations": [{"channel": 6, "band": "2.4", "is_dfs": false}]
            }"#,
        )
        .unwrap();

        let stats = update.stats.unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].channel, 6);
        assert_eq!(stats[0].ap_count, 4);

        let recs = update.recommendations.unwrap();
        assert_eq!(recs[0].band, Band::TwoGhz);
        assert!(!recs[0].is_dfs);
    }

    #[test]
    fn recommendation_dfs_flag_defaults_false() {
        let rec: Recommendation =
            serde_json::from_str(r#"{"channel": 52, "band": "5"}"#).unwrap();
        assert!(!rec.is_dfs);
    }
}
