//! Built-in demo payload for running without an analysis engine.

use airview_core::{Band, ChannelStat, ChartUpdate, Recommendation};

/// A plausible apartment-building scan: crowded 2.4 GHz mid-band, a
/// couple of quiet 5 GHz channels.
pub fn sample_update() -> ChartUpdate {
    let stat = |channel, ap_count, utilization_score| ChannelStat {
        channel,
        ap_count,
        utilization_score,
    };
    ChartUpdate {
        stats: Some(vec![
            stat(1, 3, 0.35),
            stat(3, 1, 0.18),
            stat(6, 7, 0.82),
            stat(7, 2, 0.44),
            stat(9, 1, 0.22),
            stat(11, 4, 0.61),
            stat(36, 2, 0.15),
            stat(44, 1, 0.08),
            stat(149, 3, 0.29),
            stat(157, 1, 0.12),
        ]),
        recommendations: Some(vec![
            Recommendation {
                channel: 44,
                band: Band::FiveGhz,
                is_dfs: false,
            },
            Recommendation {
                channel: 1,
                band: Band::TwoGhz,
                is_dfs: false,
            },
            Recommendation {
                channel: 100,
                band: Band::FiveGhz,
                is_dfs: true,
            },
        ]),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn sample_covers_both_bands() {
        let update = sample_update();
        let stats = update.stats.unwrap();
        assert!(stats.iter().any(|s| Band::TwoGhz.channels().contains(&s.channel)));
        assert!(stats.iter().any(|s| Band::FiveGhz.channels().contains(&s.channel)));
        assert_eq!(update.recommendations.unwrap().len(), 3);
    }
}
