//! Layout engine and state holder for the WiFi channel utilization chart.
//!
//! This crate owns everything substrate-independent:
//!
//! - **[`ChannelChart`]** — Explicit chart instance holding configuration,
//!   the active [`Band`], and the last statistics/recommendations delivered
//!   by the analysis engine. [`init()`](ChannelChart::init) binds an output
//!   surface and performs the first render; [`update()`](ChannelChart::update)
//!   and [`set_band()`](ChannelChart::set_band) mutate state and re-render.
//!
//! - **Layout pipeline** ([`layout::build_scene`]) — Pure function of
//!   (band, stats, recommendations, config) producing a [`Scene`] of typed
//!   drawing primitives: bars, gridlines, axis labels, legend, and the
//!   recommendations panel. Scaling arithmetic lives here and nowhere else.
//!
//! - **Output surfaces** ([`surface`]) — The [`Surface`] full-redraw
//!   contract, a registry resolving surface ids to shared handles, and a
//!   scene-retaining [`MemorySurface`] for tests and primitive-walking
//!   consumers. Concrete renderers (SVG, terminal) live in sibling crates.
//!
//! Rendering is deterministic: every render regenerates the scene from
//! current state, with no hidden history or animation state.

pub mod band;
pub mod chart;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod palette;
pub mod scene;
pub mod surface;

// ── Primary re-exports ──────────────────────────────────────────────
pub use band::Band;
pub use chart::ChannelChart;
pub use config::{ChartConfig, ChartOptions, Padding};
pub use error::ChartError;
pub use model::{ChannelStat, ChartUpdate, Recommendation};
pub use scene::{Color, Node, Paint, Scene};
pub use surface::{MemorySurface, SceneHandle, SharedSurface, Surface, SurfaceRegistry};
