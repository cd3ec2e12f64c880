//! Frequency band enumeration and per-band channel tables.
//!
//! The band is a closed enum: there is no fallback from an unrecognized
//! label to a default channel set. Parsing happens at the edge via
//! [`FromStr`] and rejects anything that is not `"2.4"` or `"5"`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::error::ChartError;

/// 2.4 GHz channels shown on the axis.
const CHANNELS_2G: &[u16] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

/// The classic non-overlapping trio for 20 MHz deployments.
const NON_OVERLAPPING_2G: &[u16] = &[1, 6, 11];

/// UNII-1 and UNII-3 channels. All 5 GHz channels are 20 MHz apart,
/// so the whole set counts as non-overlapping for marker purposes.
const CHANNELS_5G: &[u16] = &[36, 40, 44, 48, 149, 153, 157, 161, 165];

/// Wireless frequency band selector for the chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum Band {
    #[default]
    #[strum(to_string = "2.4")]
    #[serde(rename = "2.4")]
    TwoGhz,
    #[strum(to_string = "5")]
    #[serde(rename = "5")]
    FiveGhz,
}

impl Band {
    /// Ordered channel axis for this band.
    pub fn channels(self) -> &'static [u16] {
        match self {
            Band::TwoGhz => CHANNELS_2G,
            Band::FiveGhz => CHANNELS_5G,
        }
    }

    /// Channels flagged with the non-overlapping marker.
    pub fn non_overlapping(self) -> &'static [u16] {
        match self {
            Band::TwoGhz => NON_OVERLAPPING_2G,
            Band::FiveGhz => CHANNELS_5G,
        }
    }

    pub fn is_non_overlapping(self, channel: u16) -> bool {
        self.non_overlapping().contains(&channel)
    }
}

impl FromStr for Band {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2.4" | "2.4GHz" | "2.4ghz" => Ok(Band::TwoGhz),
            "5" | "5GHz" | "5ghz" => Ok(Band::FiveGhz),
            other => Err(ChartError::UnknownBand {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn two_ghz_axis_and_markers() {
        assert_eq!(Band::TwoGhz.channels(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
        assert_eq!(Band::TwoGhz.non_overlapping(), &[1, 6, 11]);
        assert!(Band::TwoGhz.is_non_overlapping(6));
        assert!(!Band::TwoGhz.is_non_overlapping(4));
    }

    #[test]
    fn five_ghz_is_entirely_non_overlapping() {
        for &ch in Band::FiveGhz.channels() {
            assert!(Band::FiveGhz.is_non_overlapping(ch));
        }
    }

    #[test]
    fn labels_round_trip() {
        assert_eq!(Band::TwoGhz.to_string(), "2.4");
        assert_eq!(Band::FiveGhz.to_string(), "5");
        assert_eq!("2.4".parse::<Band>().unwrap(), Band::TwoGhz);
        assert_eq!("5GHz".parse::<Band>().unwrap(), Band::FiveGhz);
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "6".parse::<Band>().unwrap_err();
        assert!(matches!(err, ChartError::UnknownBand { .. }));
    }

    #[test]
    fn serde_uses_wire_labels() {
        assert_eq!(serde_json::to_string(&Band::FiveGhz).unwrap(), "\"5\"");
        let band: Band = serde_json::from_str("\"2.4\"").unwrap();
        assert_eq!(band, Band::TwoGhz);
    }
}
