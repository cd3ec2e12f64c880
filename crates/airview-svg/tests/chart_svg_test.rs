//! End-to-end: analysis-engine payload → chart → registry → SVG document.

use airview_core::{Band, ChannelChart, ChannelStat, ChartOptions, Recommendation, SurfaceRegistry};
use airview_svg::SvgSurface;

fn bound_chart() -> (ChannelChart, airview_svg::DocumentHandle) {
    let mut registry = SurfaceRegistry::new();
    let surface = SvgSurface::new();
    let handle = surface.handle();
    registry.register("channel-chart", surface);

    let mut chart = ChannelChart::new();
    chart.init(&registry, "channel-chart", ChartOptions::default());
    (chart, handle)
}

#[test]
fn worked_example_renders_bar_badge_and_panel() {
    let (mut chart, handle) = bound_chart();
    chart.update(
        vec![ChannelStat {
            channel: 6,
            ap_count: 4,
            utilization_score: 0.65,
        }],
        vec![Recommendation {
            channel: 6,
            band: Band::TwoGhz,
            is_dfs: false,
        }],
    );

    let doc = handle.document();
    // One high-tier bar with the opacity fade.
    assert_eq!(doc.matches("url(#fade-0)").count(), 1);
    assert!(doc.contains("stop-color=\"#ff6363\""));
    // Rank badge and the one-entry recommendations panel.
    assert!(doc.contains("<circle"));
    assert!(doc.contains(">#1 Ch 6 (2.4)</text>"));
    assert!(doc.contains("data-name=\"recommendations\""));
    // Axis tick labels run 0..=4.
    for tick in ["0", "1", "2", "3", "4"] {
        assert!(doc.contains(&format!(">{tick}</text>")), "missing tick {tick}");
    }
}

#[test]
fn empty_update_omits_panel_but_keeps_legend() {
    let (mut chart, handle) = bound_chart();
    chart.update(Vec::new(), Vec::new());

    let doc = handle.document();
    assert!(!doc.contains("data-name=\"recommendations\""));
    assert!(doc.contains("data-name=\"legend\""));
    assert!(doc.contains(">Non-overlapping</text>"));
}

#[test]
fn band_switch_redraws_the_axis() {
    let (mut chart, handle) = bound_chart();

    chart.set_band(Band::FiveGhz);
    let doc = handle.document();
    assert!(doc.contains(">36</text>"));
    assert!(!doc.contains(">11</text>"));

    chart.set_band(Band::TwoGhz);
    let doc = handle.document();
    assert!(doc.contains(">11</text>"));
    assert!(!doc.contains(">36</text>"));
}

#[test]
fn unknown_surface_id_leaves_the_document_untouched() {
    let mut registry = SurfaceRegistry::new();
    let surface = SvgSurface::new();
    let handle = surface.handle();
    registry.register("channel-chart", surface);

    let mut chart = ChannelChart::new();
    chart.init(&registry, "missing-id", ChartOptions::default());
    chart.update(
        vec![ChannelStat {
            channel: 6,
            ap_count: 4,
            utilization_score: 0.65,
        }],
        Vec::new(),
    );

    assert!(handle.document().is_empty());
}

#[test]
fn option_overrides_change_the_rendered_colors() {
    let mut registry = SurfaceRegistry::new();
    let surface = SvgSurface::new();
    let handle = surface.handle();
    registry.register("channel-chart", surface);

    let mut chart = ChannelChart::new();
    let options: ChartOptions =
        serde_json::from_str(r##"{"high_color": "#ff0000"}"##).expect("options parse");
    chart.init(&registry, "channel-chart", options);
    chart.update(
        vec![ChannelStat {
            channel: 1,
            ap_count: 2,
            utilization_score: 0.9,
        }],
        Vec::new(),
    );

    let doc = handle.document();
    assert!(doc.contains("stop-color=\"#ff0000\""));
    assert!(!doc.contains("stop-color=\"#ff6363\""));
}
