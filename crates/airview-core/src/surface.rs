//! Output surfaces and the registry that resolves them by id.
//!
//! A surface is a single mutable visual container. The chart claims
//! exclusive ownership of its *contents* while bound: every render
//! replaces them wholesale. The registry hands out shared handles
//! (`Rc<RefCell<_>>` — the chart is single-threaded by contract) so the
//! embedding application can keep a handle for reading back what was
//! drawn.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::scene::Scene;

/// Full-redraw contract for anything a chart can draw into.
pub trait Surface {
    /// Replace the surface's entire prior contents with this scene.
    fn replace(&mut self, scene: &Scene);
}

/// Shared handle to a registered surface.
pub type SharedSurface = Rc<RefCell<dyn Surface>>;

/// Maps surface ids to shared surface handles.
#[derive(Default)]
pub struct SurfaceRegistry {
    surfaces: HashMap<String, SharedSurface>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface under an id, returning a handle the caller can
    /// keep for read-back. Re-registering an id replaces the old surface.
    pub fn register<S: Surface + 'static>(&mut self, id: impl Into<String>, surface: S) -> SharedSurface {
        let handle: SharedSurface = Rc::new(RefCell::new(surface));
        self.surfaces.insert(id.into(), Rc::clone(&handle));
        handle
    }

    /// Resolve an id to its surface, if registered.
    pub fn resolve(&self, id: &str) -> Option<SharedSurface> {
        self.surfaces.get(id).map(Rc::clone)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.surfaces.contains_key(id)
    }
}

/// A surface that simply retains the last scene drawn into it. Used by
/// tests and by consumers that walk the primitives themselves.
///
/// The retained scene is shared: take a [`SceneHandle`] before handing
/// the surface to the registry, and read back renders through it.
#[derive(Debug, Default)]
pub struct MemorySurface {
    scene: Rc<RefCell<Option<Scene>>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A read-back handle onto this surface's retained scene.
    pub fn handle(&self) -> SceneHandle {
        SceneHandle {
            scene: Rc::clone(&self.scene),
        }
    }
}

impl Surface for MemorySurface {
    fn replace(&mut self, scene: &Scene) {
        *self.scene.borrow_mut() = Some(scene.clone());
    }
}

/// Read access to the scene a [`MemorySurface`] last received.
#[derive(Debug, Clone)]
pub struct SceneHandle {
    scene: Rc<RefCell<Option<Scene>>>,
}

impl SceneHandle {
    /// The most recently drawn scene, if any render has happened.
    pub fn scene(&self) -> Option<Scene> {
        self.scene.borrow().clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn registry_resolves_registered_ids() {
        let mut registry = SurfaceRegistry::new();
        registry.register("chart", MemorySurface::new());
        assert!(registry.contains("chart"));
        assert!(registry.resolve("chart").is_some());
        assert!(registry.resolve("missing").is_none());
    }

    #[test]
    fn memory_surface_retains_only_the_last_scene() {
        let mut surface = MemorySurface::new();
        let handle = surface.handle();
        assert!(handle.scene().is_none());

        surface.replace(&Scene {
            width: 1.0,
            height: 1.0,
            nodes: Vec::new(),
        });
        surface.replace(&Scene {
            width: 2.0,
            height: 2.0,
            nodes: Vec::new(),
        });
        assert_eq!(handle.scene().unwrap().width, 2.0);
    }
}
