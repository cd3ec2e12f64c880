//! Chart configuration and sparse option overrides.
//!
//! [`ChartConfig`] carries every layout constant the pipeline reads.
//! Callers never mutate it after `init`: overrides arrive once, as a
//! sparse [`ChartOptions`], and are merged shallowly over the defaults.

use serde::{Deserialize, Serialize};

use crate::palette;
use crate::scene::Color;

/// Per-side padding around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Padding {
    fn default() -> Self {
        // The bottom pad holds x-labels, markers, badges, the legend,
        // and the recommendations panel.
        Self {
            top: 24.0,
            right: 16.0,
            bottom: 120.0,
            left: 48.0,
        }
    }
}

/// Layout constants for one chart instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Height of the plot area (bars at full scale), excluding padding.
    pub chart_height: f32,
    pub bar_width: f32,
    pub bar_gap: f32,
    pub padding: Padding,
    pub low_color: Color,
    pub medium_color: Color,
    pub high_color: Color,
    /// Accent for recommended channels (rank badges, top panel entry).
    pub accent_color: Color,
    /// Scores below this are the low tier.
    pub low_threshold: f64,
    /// Scores at or above this are the high tier.
    pub high_threshold: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            chart_height: 200.0,
            bar_width: 28.0,
            bar_gap: 10.0,
            padding: Padding::default(),
            low_color: palette::UTIL_LOW,
            medium_color: palette::UTIL_MEDIUM,
            high_color: palette::UTIL_HIGH,
            accent_color: palette::ACCENT,
            low_threshold: 0.3,
            high_threshold: 0.6,
        }
    }
}

impl ChartConfig {
    /// Apply a sparse override set on top of this configuration.
    pub fn merged(mut self, options: ChartOptions) -> Self {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = options.$field {
                    self.$field = value;
                })*
            };
        }
        take!(
            chart_height,
            bar_width,
            bar_gap,
            padding,
            low_color,
            medium_color,
            high_color,
            accent_color,
            low_threshold,
            high_threshold,
        );
        self
    }
}

/// Sparse configuration overrides accepted at `init`. Unset fields keep
/// their defaults. Deserializable from TOML/JSON with colors written as
/// `"#rrggbb"` literals.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartOptions {
    pub chart_height: Option<f32>,
    pub bar_width: Option<f32>,
    pub bar_gap: Option<f32>,
    pub padding: Option<Padding>,
    pub low_color: Option<Color>,
    pub medium_color: Option<Color>,
    pub high_color: Option<Color>,
    pub accent_color: Option<Color>,
    pub low_threshold: Option<f64>,
    pub high_threshold: Option<f64>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn merged_keeps_defaults_for_unset_fields() {
        let cfg = ChartConfig::default().merged(ChartOptions {
            chart_height: Some(150.0),
            high_color: Some(Color::new(0xff, 0x00, 0x00)),
            ..ChartOptions::default()
        });

        assert_eq!(cfg.chart_height, 150.0);
        assert_eq!(cfg.high_color, Color::new(0xff, 0x00, 0x00));
        // Untouched fields stay at their defaults.
        assert_eq!(cfg.bar_width, ChartConfig::default().bar_width);
        assert_eq!(cfg.low_threshold, 0.3);
        assert_eq!(cfg.high_threshold, 0.6);
    }

    #[test]
    fn empty_options_are_a_no_op() {
        let cfg = ChartConfig::default().merged(ChartOptions::default());
        assert_eq!(cfg, ChartConfig::default());
    }

    #[test]
    fn options_parse_from_json_with_color_literals() {
        let options: ChartOptions = serde_json::from_str(
            r##"{"bar_width": 20.0, "accent_color": "#ff79c6"}"##,
        )
        .unwrap();
        assert_eq!(options.bar_width, Some(20.0));
        assert_eq!(options.accent_color, Some(Color::new(0xff, 0x79, 0xc6)));
    }

    #[test]
    fn options_reject_unknown_fields() {
        let result: Result<ChartOptions, _> =
            serde_json::from_str(r#"{"bar_widht": 20.0}"#);
        assert!(result.is_err());
    }
}
