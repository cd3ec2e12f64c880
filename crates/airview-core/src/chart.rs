//! The chart instance: state holder plus the re-render triggers.
//!
//! One `ChannelChart` per output surface. Construct with [`new`],
//! bind a surface with [`init`], then feed it [`update`] / [`set_band`]
//! calls; each one re-renders the full scene into the bound surface.
//! A chart whose `init` failed (unknown surface id) stays inert: state
//! mutations still apply, but nothing is drawn.
//!
//! [`new`]: ChannelChart::new
//! [`init`]: ChannelChart::init
//! [`update`]: ChannelChart::update
//! [`set_band`]: ChannelChart::set_band

use tracing::{debug, warn};

use crate::band::Band;
use crate::config::{ChartConfig, ChartOptions};
use crate::layout;
use crate::model::{ChannelStat, ChartUpdate, Recommendation};
use crate::surface::{SharedSurface, SurfaceRegistry};

/// Channel utilization chart bound to at most one output surface.
pub struct ChannelChart {
    config: ChartConfig,
    band: Band,
    stats: Vec<ChannelStat>,
    recommendations: Vec<Recommendation>,
    surface: Option<SharedSurface>,
}

impl Default for ChannelChart {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelChart {
    /// An unbound chart with default configuration, the 2.4 GHz band,
    /// and no data.
    pub fn new() -> Self {
        Self {
            config: ChartConfig::default(),
            band: Band::default(),
            stats: Vec::new(),
            recommendations: Vec::new(),
            surface: None,
        }
    }

    /// Bind the chart to the surface registered under `surface_id`,
    /// merge `options` over the default configuration, and render.
    ///
    /// An unknown id is non-fatal: a warning is logged and the chart
    /// remains inert until a later `init` succeeds.
    pub fn init(&mut self, registry: &SurfaceRegistry, surface_id: &str, options: ChartOptions) {
        let Some(surface) = registry.resolve(surface_id) else {
            warn!(surface_id, "output surface not found; chart left unbound");
            return;
        };
        self.config = ChartConfig::default().merged(options);
        self.surface = Some(surface);
        debug!(surface_id, "chart bound to output surface");
        self.render();
    }

    /// Replace statistics and recommendations, then re-render.
    pub fn update(&mut self, stats: Vec<ChannelStat>, recommendations: Vec<Recommendation>) {
        self.stats = stats;
        self.recommendations = recommendations;
        self.render();
    }

    /// Apply a wire payload from the analysis engine. Absent fields
    /// default to empty sequences.
    pub fn apply(&mut self, update: ChartUpdate) {
        self.update(
            update.stats.unwrap_or_default(),
            update.recommendations.unwrap_or_default(),
        );
    }

    /// Switch the active band and re-render.
    pub fn set_band(&mut self, band: Band) {
        self.band = band;
        self.render();
    }

    pub fn band(&self) -> Band {
        self.band
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn stats(&self) -> &[ChannelStat] {
        &self.stats
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn is_bound(&self) -> bool {
        self.surface.is_some()
    }

    /// Rebuild the scene from current state and push it to the bound
    /// surface. A no-op while unbound.
    fn render(&self) {
        if let Some(surface) = &self.surface {
            let scene = layout::build_scene(
                self.band,
                &self.stats,
                &self.recommendations,
                &self.config,
            );
            surface.borrow_mut().replace(&scene);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::surface::MemorySurface;

    fn stat(channel: u16, ap_count: u32) -> ChannelStat {
        ChannelStat {
            channel,
            ap_count,
            utilization_score: 0.2,
        }
    }

    #[test]
    fn init_renders_immediately() {
        let mut registry = SurfaceRegistry::new();
        let surface = MemorySurface::new();
        let handle = surface.handle();
        registry.register("chart", surface);

        let mut chart = ChannelChart::new();
        chart.init(&registry, "chart", ChartOptions::default());

        assert!(chart.is_bound());
        let scene = handle.scene().unwrap();
        assert!(scene.group("legend").is_some());
    }

    #[test]
    fn init_with_unknown_id_is_silent_and_inert() {
        let registry = SurfaceRegistry::new();
        let mut chart = ChannelChart::new();
        chart.init(&registry, "missing-id", ChartOptions::default());
        assert!(!chart.is_bound());

        // Later updates mutate state without drawing anywhere.
        chart.update(vec![stat(6, 4)], Vec::new());
        assert_eq!(chart.stats().len(), 1);
    }

    #[test]
    fn set_band_round_trip_restores_the_axis() {
        let mut registry = SurfaceRegistry::new();
        let surface = MemorySurface::new();
        let handle = surface.handle();
        registry.register("chart", surface);
        let mut chart = ChannelChart::new();
        chart.init(&registry, "chart", ChartOptions::default());
        chart.update(vec![stat(6, 4)], Vec::new());

        chart.set_band(Band::FiveGhz);
        let scene = handle.scene().unwrap();
        assert_eq!(scene.group("axis-x").unwrap().len(), 9);

        chart.set_band(Band::TwoGhz);
        let scene = handle.scene().unwrap();
        assert_eq!(scene.group("axis-x").unwrap().len(), 11);
        // Statistics survived the band switches.
        assert_eq!(chart.stats().to_vec(), vec![stat(6, 4)]);
    }

    #[test]
    fn apply_defaults_absent_fields_to_empty() {
        let mut registry = SurfaceRegistry::new();
        registry.register("chart", MemorySurface::new());
        let mut chart = ChannelChart::new();
        chart.init(&registry, "chart", ChartOptions::default());

        chart.update(vec![stat(6, 4)], Vec::new());
        chart.apply(ChartUpdate::default());
        assert!(chart.stats().is_empty());
        assert!(chart.recommendations().is_empty());
    }

    #[test]
    fn init_applies_option_overrides() {
        let mut registry = SurfaceRegistry::new();
        registry.register("chart", MemorySurface::new());
        let mut chart = ChannelChart::new();
        chart.init(
            &registry,
            "chart",
            ChartOptions {
                chart_height: Some(100.0),
                ..ChartOptions::default()
            },
        );
        assert_eq!(chart.config().chart_height, 100.0);
        assert_eq!(chart.config().bar_width, ChartConfig::default().bar_width);
    }
}
