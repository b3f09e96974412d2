//! Route definitions: what view to show for which path.

use std::collections::BTreeMap;

use crate::error::NavigationError;

mod segment;
pub(crate) use segment::RoutePattern;

/// A static mapping from a path pattern to a named view.
///
/// The `path` is either a literal (`/randomjokes`) or contains parameter segments (`/jokes/:kind`)
/// that match any single non-empty segment. The `name` is used for named navigation. The `view` is
/// an opaque capability the router hands to the rendering layer without ever inspecting it.
///
/// Definitions are immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDefinition<V = crate::view::ViewId> {
    pattern: RoutePattern,
    name: String,
    view: V,
}

impl<V> RouteDefinition<V> {
    /// Create a new route definition.
    ///
    /// ```rust
    /// # use waypoint_router::prelude::*;
    /// let route = RouteDefinition::new("/randomjokes", "Random Jokes", ViewId::from("RandomJokesPage"));
    /// assert_eq!(route.path(), "/randomjokes");
    /// assert_eq!(route.name(), "Random Jokes");
    /// ```
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        Self {
            pattern: RoutePattern::parse(path),
            name: name.into(),
            view,
        }
    }

    /// The path pattern, exactly as declared.
    pub fn path(&self) -> &str {
        self.pattern.as_str()
    }

    /// The unique symbolic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The view shown when this route is active.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Whether the pattern contains `:parameter` segments.
    ///
    /// ```rust
    /// # use waypoint_router::prelude::*;
    /// let route = RouteDefinition::new("/jokes/:kind/:id", "Joke", ());
    /// assert!(route.is_parameterized());
    /// assert_eq!(route.parameter_keys().collect::<Vec<_>>(), vec!["kind", "id"]);
    /// assert!(!RouteDefinition::new("/", "Home", ()).is_parameterized());
    /// ```
    pub fn is_parameterized(&self) -> bool {
        self.pattern.has_parameters()
    }

    /// The parameter keys of the pattern, in order.
    pub fn parameter_keys(&self) -> impl Iterator<Item = &str> {
        self.pattern.parameter_keys()
    }

    /// Build the concrete path for this route.
    ///
    /// Parameter values are percent-encoded. Parameters the pattern does not use are ignored.
    ///
    /// ```rust
    /// # use waypoint_router::prelude::*;
    /// let route = RouteDefinition::new("/jokes/:kind", "Jokes", ());
    /// assert_eq!(route.interpolate(&[("kind", "programming")]).unwrap(), "/jokes/programming");
    /// assert!(route.interpolate::<&str, &str>(&[]).is_err());
    /// ```
    pub fn interpolate<K, P>(&self, parameters: &[(K, P)]) -> Result<String, NavigationError>
    where
        K: AsRef<str>,
        P: AsRef<str>,
    {
        self.pattern
            .interpolate(parameters)
            .map_err(|key| NavigationError::MissingParameter {
                route: self.name.clone(),
                key,
            })
    }

    pub(crate) fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        self.pattern.matches(path)
    }
}
