//! Retained-document SVG surface.

use std::cell::RefCell;
use std::rc::Rc;

use airview_core::scene::Scene;
use airview_core::surface::Surface;

use crate::renderer::render_document;

/// An output surface that keeps the SVG document of the last render.
///
/// Take a [`DocumentHandle`] before registering the surface; the handle
/// reads back whatever the chart drew most recently.
#[derive(Debug, Default)]
pub struct SvgSurface {
    document: Rc<RefCell<String>>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A read-back handle onto this surface's retained document.
    pub fn handle(&self) -> DocumentHandle {
        DocumentHandle {
            document: Rc::clone(&self.document),
        }
    }
}

impl Surface for SvgSurface {
    fn replace(&mut self, scene: &Scene) {
        *self.document.borrow_mut() = render_document(scene);
    }
}

/// Read access to the document an [`SvgSurface`] last rendered.
#[derive(Debug, Clone)]
pub struct DocumentHandle {
    document: Rc<RefCell<String>>,
}

impl DocumentHandle {
    /// The current SVG document; empty until the first render.
    pub fn document(&self) -> String {
        self.document.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_overwrites_the_whole_document() {
        let mut surface = SvgSurface::new();
        let handle = surface.handle();
        assert!(handle.document().is_empty());

        surface.replace(&Scene {
            width: 10.0,
            height: 10.0,
            nodes: Vec::new(),
        });
        let first = handle.document();
        assert!(first.contains("viewBox=\"0 0 10 10\""));

        surface.replace(&Scene {
            width: 20.0,
            height: 20.0,
            nodes: Vec::new(),
        });
        let second = handle.document();
        assert!(second.contains("viewBox=\"0 0 20 20\""));
        assert!(!second.contains("0 0 10 10"));
    }
}
