use log::{debug, info};
use wkt::ToWkt;

use crate::resolve::RouteResult;

/// Handle to a layer installed on a [`MapSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub u64);

/// The map a route layer is drawn on. Rendering itself is up to
/// the implementation, the presenter only adds and removes layers.
pub trait MapSurface {
    fn add_layer(&mut self, route: &RouteResult) -> LayerId;

    fn remove_layer(&mut self, layer: LayerId);

    /// Installs `route` in place of `previous`.
    ///
    /// The default adds before removing, within one `&mut` borrow.
    /// Surfaces that can swap a layer in a single step should override it.
    fn replace_layer(&mut self, previous: Option<LayerId>, route: &RouteResult) -> LayerId {
        let layer = self.add_layer(route);
        if let Some(previous) = previous {
            self.remove_layer(previous);
        }

        layer
    }
}

/// A surface without a screen. Keeps the installed layers
/// in memory and logs every route it is handed.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    layers: Vec<(LayerId, RouteResult)>,
    next: u64,
    installs: usize,
}

impl HeadlessSurface {
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// The most recently installed layer still present.
    pub fn current(&self) -> Option<&RouteResult> {
        self.layers.last().map(|(_, route)| route)
    }

    /// How many layers have been installed over the lifetime of the surface.
    pub fn installs(&self) -> usize {
        self.installs
    }

    fn allocate(&mut self, route: &RouteResult) -> LayerId {
        let layer = LayerId(self.next);
        self.next += 1;
        self.installs += 1;

        info!("Displaying route {}: {}", route.query, route.summary());
        debug!("Route geometry: {}", route.geometry.wkt_string());

        layer
    }
}

impl MapSurface for HeadlessSurface {
    fn add_layer(&mut self, route: &RouteResult) -> LayerId {
        let layer = self.allocate(route);
        self.layers.push((layer, route.clone()));
        layer
    }

    fn remove_layer(&mut self, layer: LayerId) {
        self.layers.retain(|(id, _)| *id != layer);
    }

    fn replace_layer(&mut self, previous: Option<LayerId>, route: &RouteResult) -> LayerId {
        let layer = self.allocate(route);

        let slot = previous.and_then(|previous| self.layers.iter().position(|(id, _)| *id == previous));
        match slot {
            Some(index) => self.layers[index] = (layer, route.clone()),
            None => self.layers.push((layer, route.clone())),
        }

        layer
    }
}
