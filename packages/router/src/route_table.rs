//! The ordered table of route definitions.

use std::collections::{BTreeMap, HashSet};

use tracing::trace;

use crate::{error::DuplicateRouteError, route_definition::RouteDefinition, view::ViewId};

/// An ordered sequence of [`RouteDefinition`]s.
///
/// No two definitions share a path or a name; this is checked once, when the table is built.
///
/// # Matching order
/// Paths are matched against the definitions in declaration order and the first match wins. With
/// literal paths at most one definition can match, so order only becomes relevant once
/// parameterized patterns overlap with other routes: declare the more specific route first.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable<V = ViewId> {
    routes: Vec<RouteDefinition<V>>,
}

/// A successful match of a path against a [`RouteTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'a, V = ViewId> {
    /// The first definition whose pattern matched.
    pub route: &'a RouteDefinition<V>,
    /// Values captured by parameter segments, already percent-decoded.
    pub parameters: BTreeMap<String, String>,
}

impl<V> RouteTable<V> {
    /// Build a table from `routes`, keeping their order.
    ///
    /// ```rust
    /// # use waypoint_router::prelude::*;
    /// let table = RouteTable::new([
    ///     RouteDefinition::new("/", "Home", ViewId::from("HomePage")),
    ///     RouteDefinition::new("/", "Index", ViewId::from("IndexPage")),
    /// ]);
    /// assert_eq!(table.unwrap_err(), DuplicateRouteError::Path(String::from("/")));
    /// ```
    pub fn new(
        routes: impl IntoIterator<Item = RouteDefinition<V>>,
    ) -> Result<Self, DuplicateRouteError> {
        let routes: Vec<_> = routes.into_iter().collect();

        let mut paths = HashSet::with_capacity(routes.len());
        let mut names = HashSet::with_capacity(routes.len());
        for route in &routes {
            if !paths.insert(route.path()) {
                return Err(DuplicateRouteError::Path(route.path().to_string()));
            }
            if !names.insert(route.name()) {
                return Err(DuplicateRouteError::Name(route.name().to_string()));
            }
        }

        Ok(Self { routes })
    }

    /// Start declaring a table route by route.
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder::default()
    }

    /// Find the definition for a normalized `path`.
    ///
    /// The path must not contain a query string or fragment. Matching is case-sensitive and the
    /// first matching definition is returned.
    pub fn resolve(&self, path: &str) -> Option<&RouteDefinition<V>> {
        self.resolve_match(path).map(|m| m.route)
    }

    /// Like [`resolve`](Self::resolve), but also returns the captured parameters.
    pub fn resolve_match(&self, path: &str) -> Option<RouteMatch<'_, V>> {
        let found = self.routes.iter().find_map(|route| {
            route
                .matches(path)
                .map(|parameters| RouteMatch { route, parameters })
        });

        trace!(
            path,
            matched = found.as_ref().map(|m| m.route.name()),
            "resolved path"
        );

        found
    }

    /// Find the definition carrying `name`.
    pub fn by_name(&self, name: &str) -> Option<&RouteDefinition<V>> {
        self.routes.iter().find(|route| route.name() == name)
    }

    /// Iterate over the definitions in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, RouteDefinition<V>> {
        self.routes.iter()
    }

    /// The number of definitions.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table declares no route at all.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<'a, V> IntoIterator for &'a RouteTable<V> {
    type Item = &'a RouteDefinition<V>;
    type IntoIter = std::slice::Iter<'a, RouteDefinition<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Declares a [`RouteTable`] one route at a time.
///
/// ```rust
/// # use waypoint_router::prelude::*;
/// let table = RouteTable::builder()
///     .route("/", "Home", "HomePage")
///     .route("/randomjokes", "Random Jokes", "RandomJokesPage")
///     .build()
///     .unwrap();
///
/// assert_eq!(table.resolve("/randomjokes").map(|r| *r.view()), Some("RandomJokesPage"));
/// ```
#[derive(Debug, Clone)]
pub struct RouteTableBuilder<V = ViewId> {
    routes: Vec<RouteDefinition<V>>,
}

// manual impl required because derive macro requires default for V unnecessarily
impl<V> Default for RouteTableBuilder<V> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<V> RouteTableBuilder<V> {
    /// Append a route. Routes are matched in the order they are added.
    pub fn route(mut self, path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        self.routes.push(RouteDefinition::new(path, name, view));
        self
    }

    /// Validate the declared routes and build the table.
    pub fn build(self) -> Result<RouteTable<V>, DuplicateRouteError> {
        RouteTable::new(self.routes)
    }
}
