//! Errors raised by the router.
//!
//! Configuration and programmer errors fail loudly. A user navigating to a path that matches no
//! route is *not* an error, see [`RouteView::NotFound`](crate::state::RouteView::NotFound).

use std::path::PathBuf;

/// Two route definitions collide. Raised once, while building a
/// [`RouteTable`](crate::route_table::RouteTable).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DuplicateRouteError {
    /// Two definitions share the same path pattern.
    #[error(r#"route paths must be unique; duplicate path: "{0}""#)]
    Path(String),

    /// Two definitions share the same name.
    #[error(r#"route names must be unique; duplicate name: "{0}""#)]
    Name(String),
}

/// Named navigation referenced a route name the table does not declare.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(r#"no route for name "{name}""#)]
pub struct RouteNotFoundError {
    /// The name that was asked for.
    pub name: String,
}

/// A navigation could not be carried out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// No route carries the requested name.
    #[error(transparent)]
    RouteNotFound(#[from] RouteNotFoundError),

    /// The route pattern needs a parameter the caller did not provide.
    #[error(r#"no value for parameter "{key}" of route "{route}""#)]
    MissingParameter {
        /// Name of the route being navigated to.
        route: String,
        /// The parameter key without its leading `:`.
        key: String,
    },

    /// The history provider refused to record the path. The current location is unchanged.
    #[error(r#"the history refused to record path "{path}""#)]
    Rejected {
        /// The path that was refused.
        path: String,
    },
}

/// A route configuration file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read route config {}: {source}", path.display())]
    Io {
        /// The file that was read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid route configuration.
    #[error("invalid route config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration declares colliding routes.
    #[error(transparent)]
    Duplicate(#[from] DuplicateRouteError),
}
