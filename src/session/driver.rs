use std::future::Future;
use std::time::Duration;

use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use log::{debug, info};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
#[cfg(feature = "tracing")]
use tracing::Level;

use crate::config::DragConfig;
use crate::coordinator::{Command, DragCoordinator, DragState};
use crate::marker::{MarkerRole, Markers, Revision, VertexRef};
use crate::present::{HeadlessSurface, MapSurface, RouteLayerPresenter};
use crate::resolve::{ResolveError, RouteQuery, RouteResolver, RouteResult, VertexResolver};
use crate::service::WfsClient;
use crate::session::event::DragEvent;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(250);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of a lookup, tagged with what it was issued for.
enum Completion {
    Vertex {
        role: MarkerRole,
        revision: Revision,
        outcome: Result<VertexRef, ResolveError>,
    },
    Route {
        query: RouteQuery,
        outcome: Result<RouteResult, ResolveError>,
    },
}

/// A drag-to-route session: one coordinator, its two resolvers and the
/// presenter of the displayed route, all driven from a single task.
pub struct DragSession<V, R, S>
where
    V: VertexResolver,
    R: RouteResolver,
    S: MapSurface,
{
    coordinator: DragCoordinator,
    presenter: RouteLayerPresenter<S>,
    vertices: V,
    routes: R,

    tick_interval: Duration,
    request_timeout: Duration,
}

impl<V, R, S> DragSession<V, R, S>
where
    V: VertexResolver,
    R: RouteResolver,
    S: MapSurface,
{
    pub fn new(markers: Markers, vertices: V, routes: R, surface: S) -> Self {
        DragSession {
            coordinator: DragCoordinator::new(markers),
            presenter: RouteLayerPresenter::new(surface),
            vertices,
            routes,
            tick_interval: DEFAULT_TICK_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn from_config(config: &DragConfig, vertices: V, routes: R, surface: S) -> Self {
        DragSession::new(
            Markers::new(config.source, config.target),
            vertices,
            routes,
            surface,
        )
        .with_tick_interval(config.tick_interval)
        .with_request_timeout(config.request_timeout)
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Lookups still unanswered after `timeout` count as the
    /// service being unavailable, and are retried on a later tick.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn coordinator(&self) -> &DragCoordinator {
        &self.coordinator
    }

    pub fn presenter(&self) -> &RouteLayerPresenter<S> {
        &self.presenter
    }

    pub fn into_presenter(self) -> RouteLayerPresenter<S> {
        self.presenter
    }

    /// Queues the startup pass. The next [`DragSession::run`] resolves both
    /// markers at their initial positions and computes the first route,
    /// while still accepting drags.
    pub fn bootstrap(&mut self) {
        self.coordinator.bootstrap();
    }

    /// Runs the startup pass alone, returning once the session is idle.
    ///
    /// With the service down this returns after the retries are spent,
    /// leaving both markers without a vertex.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::INFO))]
    pub async fn initialize(&mut self) -> DragState {
        self.bootstrap();

        let (_, closed) = mpsc::channel(1);
        self.run(closed).await;

        info!("Session initialised ({})", self.coordinator.state());
        self.coordinator.state()
    }

    /// Runs the session until `events` is closed and all outstanding
    /// work has settled.
    ///
    /// Drag events are recorded as they arrive, lookups are issued only
    /// on ticks, and completions are applied as they land, in whatever
    /// order the resolvers finish.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::INFO))]
    pub async fn run(&mut self, mut events: mpsc::Receiver<DragEvent>) {
        let DragSession {
            coordinator,
            presenter,
            vertices,
            routes,
            tick_interval,
            request_timeout,
        } = self;

        let vertices: &V = vertices;
        let routes: &R = routes;
        let timeout = *request_timeout;

        let mut ticker = tokio::time::interval(*tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut in_flight = FuturesUnordered::new();
        let mut open = true;

        loop {
            tokio::select! {
                biased;

                event = events.recv(), if open => match event {
                    Some(DragEvent::DragEnd { role, position }) => {
                        coordinator.drag_end(role, position)
                    }
                    None => {
                        debug!("Drag events closed, settling outstanding work");
                        open = false;
                    }
                },
                Some(completion) = in_flight.next(), if !in_flight.is_empty() => {
                    let command = match completion {
                        Completion::Vertex { role, revision, outcome } => {
                            coordinator.vertex_resolved(role, revision, outcome, presenter)
                        }
                        Completion::Route { query, outcome } => {
                            coordinator.route_resolved(query, outcome, presenter);
                            None
                        }
                    };

                    if let Some(command) = command {
                        in_flight.push(dispatch(vertices, routes, command, timeout));
                    }
                },
                _ = ticker.tick() => {
                    if let Some(command) = coordinator.tick(presenter) {
                        in_flight.push(dispatch(vertices, routes, command, timeout));
                    }
                },
            }

            if !open && in_flight.is_empty() && coordinator.is_quiescent() {
                break;
            }
        }
    }
}

impl DragSession<WfsClient, WfsClient, HeadlessSurface> {
    /// A session against the configured feature service, drawing on a [`HeadlessSurface`].
    pub fn headless(config: &DragConfig) -> crate::Result<Self> {
        let client = WfsClient::from_config(config)?;

        Ok(DragSession::from_config(
            config,
            client.clone(),
            client,
            HeadlessSurface::default(),
        ))
    }
}

/// Starts the lookup a [`Command`] asks for.
fn dispatch<'a, V, R>(
    vertices: &'a V,
    routes: &'a R,
    command: Command,
    timeout: Duration,
) -> BoxFuture<'a, Completion>
where
    V: VertexResolver,
    R: RouteResolver,
{
    match command {
        Command::ResolveVertex {
            role,
            position,
            revision,
        } => async move {
            let outcome = within(timeout, vertices.resolve(&position)).await;
            Completion::Vertex {
                role,
                revision,
                outcome,
            }
        }
        .boxed(),
        Command::ResolveRoute { query } => async move {
            let outcome = within(timeout, routes.resolve(&query)).await;
            Completion::Route { query, outcome }
        }
        .boxed(),
    }
}

async fn within<T>(
    timeout: Duration,
    lookup: impl Future<Output = Result<T, ResolveError>>,
) -> Result<T, ResolveError> {
    tokio::time::timeout(timeout, lookup)
        .await
        .unwrap_or_else(|_| {
            Err(ResolveError::ServiceUnavailable(format!(
                "no response within {timeout:?}"
            )))
        })
}
