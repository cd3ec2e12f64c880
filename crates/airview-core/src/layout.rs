//! The render pipeline: (band, stats, recommendations, config) → [`Scene`].
//!
//! Pure layout and scaling arithmetic. Nothing here touches a surface;
//! the produced scene is handed to a renderer wholesale. Groups emitted,
//! in painter order: `axis-y`, `bars`, `markers`, `badges`, `axis-x`,
//! `legend`, `recommendations` (the last only when recommendations exist).

use std::collections::HashMap;

use crate::band::Band;
use crate::config::ChartConfig;
use crate::model::{ChannelStat, Recommendation};
use crate::palette;
use crate::scene::{Node, Paint, Scene, TextAnchor};

/// How many recommendations receive badges and panel entries.
pub const TOP_RECOMMENDATIONS: usize = 3;

/// Most gridlines drawn above zero.
const TICK_COUNT_MAX: u32 = 5;

// Vertical offsets below the bar baseline.
const MARKER_DROP: f32 = 4.0;
const MARKER_HEIGHT: f32 = 3.0;
const X_LABEL_DROP: f32 = 18.0;
const BADGE_DROP: f32 = 32.0;
const BADGE_RADIUS: f32 = 8.0;
const LEGEND_DROP: f32 = 56.0;
const PANEL_DROP: f32 = 80.0;

const PANEL_ENTRY_WIDTH: f32 = 148.0;
const PANEL_ENTRY_HEIGHT: f32 = 26.0;
const PANEL_ENTRY_GAP: f32 = 10.0;

const LABEL_SIZE: f32 = 11.0;
const SWATCH_SIZE: f32 = 12.0;

/// Utilization tier a channel's score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    pub fn color(self, config: &ChartConfig) -> crate::scene::Color {
        match self {
            Tier::Low => config.low_color,
            Tier::Medium => config.medium_color,
            Tier::High => config.high_color,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Low => "Low",
            Tier::Medium => "Medium",
            Tier::High => "High",
        }
    }
}

/// Classify a utilization score. Boundary values resolve to the higher
/// tier: exactly `low_threshold` is Medium, exactly `high_threshold` is
/// High.
pub fn utilization_tier(score: f64, config: &ChartConfig) -> Tier {
    if score < config.low_threshold {
        Tier::Low
    } else if score < config.high_threshold {
        Tier::Medium
    } else {
        Tier::High
    }
}

/// Vertical scale denominator: the maximum `ap_count`, floored at 1 so
/// an empty or all-zero dataset still renders flat bars.
pub fn max_ap_count(stats: &[ChannelStat]) -> u32 {
    stats
        .iter()
        .map(|s| s.ap_count)
        .max()
        .unwrap_or(0)
        .max(1)
}

/// Y-axis tick step for a given maximum (`max >= 1`).
fn tick_step(max: u32) -> u32 {
    let count = max.min(TICK_COUNT_MAX);
    max.div_ceil(count)
}

/// Statistics keyed by channel; duplicate channels: last write wins.
pub fn stat_index(stats: &[ChannelStat]) -> HashMap<u16, &ChannelStat> {
    let mut index = HashMap::with_capacity(stats.len());
    for stat in stats {
        index.insert(stat.channel, stat);
    }
    index
}

/// 1-based rank by channel for the recommendation ordering.
pub fn rank_index(recommendations: &[Recommendation]) -> HashMap<u16, usize> {
    let mut index = HashMap::with_capacity(recommendations.len());
    for (position, rec) in recommendations.iter().enumerate() {
        index.insert(rec.channel, position + 1);
    }
    index
}

/// Build the full chart scene from current state. Deterministic and
/// side-effect free; every call regenerates the output from scratch.
#[allow(clippy::cast_precision_loss)]
pub fn build_scene(
    band: Band,
    stats: &[ChannelStat],
    recommendations: &[Recommendation],
    config: &ChartConfig,
) -> Scene {
    let channels = band.channels();
    let pad = config.padding;
    let slot = config.bar_width + config.bar_gap;

    let width = channels.len() as f32 * slot + pad.left + pad.right;
    let height = config.chart_height + pad.top + pad.bottom;
    let baseline = pad.top + config.chart_height;
    let plot_right = width - pad.right;

    let max = max_ap_count(stats);
    let stats_by_channel = stat_index(stats);
    let rank_by_channel = rank_index(recommendations);

    let bar_x = |i: usize| pad.left + i as f32 * slot;
    let bar_center = |i: usize| bar_x(i) + config.bar_width / 2.0;
    let scaled = |count: u32| count as f32 / max as f32 * config.chart_height;

    // ── Y-axis: gridlines, tick labels, rotated title ──
    let mut axis_y = Vec::new();
    let step = tick_step(max);
    let mut tick = 0u32;
    loop {
        let y = baseline - scaled(tick);
        axis_y.push(Node::Line {
            x1: pad.left,
            y1: y,
            x2: plot_right,
            y2: y,
            stroke: palette::GRID,
            width: if tick == 0 { 1.0 } else { 0.5 },
        });
        axis_y.push(Node::Text {
            x: pad.left - 8.0,
            y: y + 4.0,
            content: tick.to_string(),
            size: LABEL_SIZE,
            fill: palette::TEXT,
            anchor: TextAnchor::End,
            rotation: None,
            bold: false,
        });
        // Checked step: near u32::MAX the next tick would overflow.
        match tick.checked_add(step) {
            Some(next) if next <= max => tick = next,
            _ => break,
        }
    }
    axis_y.push(Node::Text {
        x: 14.0,
        y: pad.top + config.chart_height / 2.0,
        content: "APs".to_owned(),
        size: LABEL_SIZE,
        fill: palette::TEXT,
        anchor: TextAnchor::Middle,
        rotation: Some(-90.0),
        bold: false,
    });

    // ── Bars with AP-count labels ──
    let mut bars = Vec::new();
    let mut markers = Vec::new();
    let mut badges = Vec::new();
    let mut axis_x = Vec::new();

    for (i, &channel) in channels.iter().enumerate() {
        let stat = stats_by_channel.get(&channel);
        let ap_count = stat.map_or(0, |s| s.ap_count);

        if let Some(stat) = stat.filter(|s| s.ap_count > 0) {
            let bar_height = scaled(stat.ap_count);
            let tier = utilization_tier(stat.utilization_score, config);
            bars.push(Node::Rect {
                x: bar_x(i),
                y: baseline - bar_height,
                width: config.bar_width,
                height: bar_height,
                fill: Some(Paint::FadeDown(tier.color(config))),
                stroke: None,
                corner_radius: 2.0,
            });
            bars.push(Node::Text {
                x: bar_center(i),
                y: baseline - bar_height - 4.0,
                content: ap_count.to_string(),
                size: LABEL_SIZE,
                fill: palette::TEXT,
                anchor: TextAnchor::Middle,
                rotation: None,
                bold: false,
            });
        }

        let non_overlapping = band.is_non_overlapping(channel);
        if non_overlapping {
            markers.push(Node::Rect {
                x: bar_x(i),
                y: baseline + MARKER_DROP,
                width: config.bar_width,
                height: MARKER_HEIGHT,
                fill: Some(Paint::Solid(palette::MARKER)),
                stroke: None,
                corner_radius: 0.0,
            });
        }

        if let Some(&rank) = rank_by_channel.get(&channel).filter(|&&r| r <= TOP_RECOMMENDATIONS) {
            badges.push(Node::Circle {
                cx: bar_center(i),
                cy: baseline + BADGE_DROP,
                radius: BADGE_RADIUS,
                fill: Paint::Solid(config.accent_color),
            });
            badges.push(Node::Text {
                x: bar_center(i),
                y: baseline + BADGE_DROP + 3.5,
                content: rank.to_string(),
                size: LABEL_SIZE,
                fill: palette::BADGE_TEXT,
                anchor: TextAnchor::Middle,
                rotation: None,
                bold: true,
            });
        }

        axis_x.push(Node::Text {
            x: bar_center(i),
            y: baseline + X_LABEL_DROP,
            content: channel.to_string(),
            size: LABEL_SIZE,
            fill: if non_overlapping {
                palette::MARKER
            } else {
                palette::TEXT
            },
            anchor: TextAnchor::Middle,
            rotation: None,
            bold: non_overlapping,
        });
    }

    let mut nodes = vec![
        Node::group("axis-y", axis_y),
        Node::group("bars", bars),
        Node::group("markers", markers),
        Node::group("badges", badges),
        Node::group("axis-x", axis_x),
        Node::group("legend", build_legend(config, baseline)),
    ];
    if !recommendations.is_empty() {
        nodes.push(Node::group(
            "recommendations",
            build_panel(recommendations, config, baseline),
        ));
    }

    Scene {
        width,
        height,
        nodes,
    }
}

/// Fixed four-entry legend: the three utilization tiers plus the
/// non-overlapping marker. Always drawn, data or not.
fn build_legend(config: &ChartConfig, baseline: f32) -> Vec<Node> {
    let y = baseline + LEGEND_DROP;
    let entries = [
        (Tier::Low.color(config), "Low"),
        (Tier::Medium.color(config), "Medium"),
        (Tier::High.color(config), "High"),
        (palette::MARKER, "Non-overlapping"),
    ];

    let mut nodes = Vec::new();
    let mut x = config.padding.left;
    for (color, label) in entries {
        nodes.push(Node::Rect {
            x,
            y: y - SWATCH_SIZE,
            width: SWATCH_SIZE,
            height: SWATCH_SIZE,
            fill: Some(Paint::Solid(color)),
            stroke: None,
            corner_radius: 2.0,
        });
        nodes.push(Node::Text {
            x: x + SWATCH_SIZE + 5.0,
            y: y - 2.0,
            content: label.to_owned(),
            size: LABEL_SIZE,
            fill: palette::TEXT,
            anchor: TextAnchor::Start,
            rotation: None,
            bold: false,
        });
        // Advance past swatch + label; labels are short enough that a
        // character-width estimate keeps the legend on one row.
        #[allow(clippy::cast_precision_loss)]
        {
            x += SWATCH_SIZE + 5.0 + label.len() as f32 * 6.5 + 18.0;
        }
    }
    nodes
}

/// Recommendations panel: up to the top three entries in original order,
/// the first one emphasized with the accent border and panel background.
fn build_panel(
    recommendations: &[Recommendation],
    config: &ChartConfig,
    baseline: f32,
) -> Vec<Node> {
    let y = baseline + PANEL_DROP;
    let mut nodes = Vec::new();

    for (i, rec) in recommendations.iter().take(TOP_RECOMMENDATIONS).enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let x = config.padding.left + i as f32 * (PANEL_ENTRY_WIDTH + PANEL_ENTRY_GAP);
        let emphasized = i == 0;

        nodes.push(Node::Rect {
            x,
            y,
            width: PANEL_ENTRY_WIDTH,
            height: PANEL_ENTRY_HEIGHT,
            fill: emphasized.then_some(Paint::Solid(palette::PANEL_BG)),
            stroke: Some(if emphasized {
                config.accent_color
            } else {
                palette::GRID
            }),
            corner_radius: 4.0,
        });
        nodes.push(Node::Text {
            x: x + 10.0,
            y: y + 17.0,
            content: format!("#{} Ch {} ({})", i + 1, rec.channel, rec.band),
            size: LABEL_SIZE,
            fill: if emphasized {
                config.accent_color
            } else {
                palette::TEXT
            },
            anchor: TextAnchor::Start,
            rotation: None,
            bold: emphasized,
        });
        if rec.is_dfs {
            nodes.push(Node::Text {
                x: x + PANEL_ENTRY_WIDTH - 10.0,
                y: y + 17.0,
                content: "DFS".to_owned(),
                size: LABEL_SIZE - 1.0,
                fill: palette::UTIL_MEDIUM,
                anchor: TextAnchor::End,
                rotation: None,
                bold: false,
            });
        }
    }
    nodes
}
