//! SVG rendering for airview scenes.
//!
//! [`render_document`] turns a [`Scene`](airview_core::Scene) into a
//! standalone SVG document; [`SvgSurface`] wraps that behind the
//! [`Surface`](airview_core::Surface) full-redraw contract so a
//! [`ChannelChart`](airview_core::ChannelChart) can draw into it through
//! the registry.

mod renderer;
mod surface;

pub use renderer::render_document;
pub use surface::{DocumentHandle, SvgSurface};
