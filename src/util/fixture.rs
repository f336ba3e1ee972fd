//! Shared helpers for the unit tests: scripted resolvers that answer
//! from a table after a configurable delay, and route builders.

use crate::coord::LatLng;
use crate::marker::{Markers, VertexRef};
use crate::resolve::{ResolveError, RouteQuery, RouteResolver, RouteResult, VertexResolver};

use async_trait::async_trait;
use geo::{line_string, MultiLineString};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

pub(crate) const LOOKUP_DELAY: Duration = Duration::from_millis(40);

pub(crate) fn point(lat: f64, lng: f64) -> LatLng {
    LatLng::from_degree(lat, lng).expect("valid test coordinate")
}

pub(crate) fn source_start() -> LatLng {
    point(-1.283147351126288, 36.822524070739746)
}

pub(crate) fn target_start() -> LatLng {
    point(-1.286107765621784, 36.83449745178223)
}

pub(crate) fn markers() -> Markers {
    Markers::new(source_start(), target_start())
}

pub(crate) fn vertex(id: &str) -> VertexRef {
    VertexRef::new(id)
}

pub(crate) fn query(source: &str, target: &str) -> RouteQuery {
    RouteQuery::new(vertex(source), vertex(target))
}

/// A two point route between the vertices, tagged with `hours` and `km`.
pub(crate) fn route(source: &str, target: &str, hours: f64, km: f64) -> RouteResult {
    let offset = target.len() as f64 * 1e-3;

    RouteResult {
        query: query(source, target),
        geometry: MultiLineString::new(vec![line_string![
            (x: 36.8225, y: -1.2831),
            (x: 36.8344 + offset, y: -1.2861),
        ]]),
        travel_time: hours,
        travel_distance: km,
        street_names: vec!["Kenyatta Avenue".to_string()],
    }
}

type Answer<T> = (Duration, Result<T, ResolveError>);

/// Answers are queued per key. The last queued answer is repeated
/// once the queue drains; unknown keys fail as unavailable.
struct Script<K, T> {
    answers: Mutex<HashMap<K, VecDeque<Answer<T>>>>,
    calls: Mutex<Vec<K>>,
}

impl<K, T> Default for Script<K, T> {
    fn default() -> Self {
        Script {
            answers: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl<K, T> Script<K, T>
where
    K: std::hash::Hash + Eq + Clone + std::fmt::Debug,
    T: Clone,
{
    fn push(&self, key: K, delay: Duration, answer: Result<T, ResolveError>) {
        self.answers
            .lock()
            .unwrap()
            .entry(key)
            .or_default()
            .push_back((delay, answer));
    }

    async fn answer(&self, key: &K) -> Result<T, ResolveError> {
        self.calls.lock().unwrap().push(key.clone());

        let next = {
            let mut answers = self.answers.lock().unwrap();
            answers.get_mut(key).and_then(|queue| match queue.len() {
                0 => None,
                1 => queue.front().cloned(),
                _ => queue.pop_front(),
            })
        };

        match next {
            Some((delay, answer)) => {
                tokio::time::sleep(delay).await;
                answer
            }
            None => Err(ResolveError::ServiceUnavailable(format!("unscripted {key:?}"))),
        }
    }

    fn calls(&self) -> Vec<K> {
        self.calls.lock().unwrap().clone()
    }
}

#[derive(Default)]
pub(crate) struct ScriptedVertices(Script<LatLng, VertexRef>);

impl ScriptedVertices {
    pub(crate) fn answer(&self, at: LatLng, id: &str) -> &Self {
        self.0.push(at, LOOKUP_DELAY, Ok(vertex(id)));
        self
    }

    pub(crate) fn answer_after(&self, at: LatLng, delay: Duration, id: &str) -> &Self {
        self.0.push(at, delay, Ok(vertex(id)));
        self
    }

    pub(crate) fn nothing_near(&self, at: LatLng) -> &Self {
        self.0
            .push(at, LOOKUP_DELAY, Err(ResolveError::VertexNotFound(at)));
        self
    }

    pub(crate) fn stall(&self, at: LatLng, delay: Duration) -> &Self {
        self.0.push(
            at,
            delay,
            Err(ResolveError::ServiceUnavailable("stalled".to_string())),
        );
        self
    }

    pub(crate) fn calls(&self) -> Vec<LatLng> {
        self.0.calls()
    }
}

#[async_trait]
impl VertexResolver for ScriptedVertices {
    async fn resolve(&self, point: &LatLng) -> Result<VertexRef, ResolveError> {
        self.0.answer(point).await
    }
}

#[derive(Default)]
pub(crate) struct ScriptedRoutes(Script<RouteQuery, RouteResult>);

impl ScriptedRoutes {
    pub(crate) fn answer(&self, route: RouteResult) -> &Self {
        self.0.push(route.query.clone(), LOOKUP_DELAY, Ok(route));
        self
    }

    pub(crate) fn answer_after(&self, delay: Duration, route: RouteResult) -> &Self {
        self.0.push(route.query.clone(), delay, Ok(route));
        self
    }

    pub(crate) fn no_route(&self, query: RouteQuery) -> &Self {
        self.0.push(
            query.clone(),
            LOOKUP_DELAY,
            Err(ResolveError::NoRouteFound(query)),
        );
        self
    }

    pub(crate) fn unavailable(&self, query: RouteQuery) -> &Self {
        self.0.push(
            query,
            LOOKUP_DELAY,
            Err(ResolveError::ServiceUnavailable("503".to_string())),
        );
        self
    }

    pub(crate) fn calls(&self) -> Vec<RouteQuery> {
        self.0.calls()
    }
}

#[async_trait]
impl RouteResolver for ScriptedRoutes {
    async fn resolve(&self, query: &RouteQuery) -> Result<RouteResult, ResolveError> {
        self.0.answer(query).await
    }
}
