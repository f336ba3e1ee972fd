use log::debug;

use crate::present::surface::{LayerId, MapSurface};
use crate::resolve::RouteResult;

struct DisplayedRoute {
    layer: LayerId,
    route: RouteResult,
}

/// Sole owner of the displayed route. Routes are only ever
/// replaced as a whole, never edited on the surface.
pub struct RouteLayerPresenter<S>
where
    S: MapSurface,
{
    surface: S,
    displayed: Option<DisplayedRoute>,
}

impl<S> RouteLayerPresenter<S>
where
    S: MapSurface,
{
    pub fn new(surface: S) -> Self {
        RouteLayerPresenter {
            surface,
            displayed: None,
        }
    }

    /// Replaces whatever is displayed with `route`.
    pub fn show(&mut self, route: RouteResult) {
        let previous = self.displayed.take().map(|displayed| displayed.layer);
        let layer = self.surface.replace_layer(previous, &route);

        self.displayed = Some(DisplayedRoute { layer, route });
    }

    /// Removes the displayed route, if any.
    pub fn clear(&mut self) {
        if let Some(displayed) = self.displayed.take() {
            debug!("Clearing route {}", displayed.route.query);
            self.surface.remove_layer(displayed.layer);
        }
    }

    pub fn displayed(&self) -> Option<&RouteResult> {
        self.displayed.as_ref().map(|displayed| &displayed.route)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
