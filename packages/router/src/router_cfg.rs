use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, DuplicateRouteError},
    route_definition::RouteDefinition,
    route_table::RouteTable,
    view::ViewId,
};

/// The static route configuration, as read from a TOML document.
///
/// ```rust
/// # use waypoint_router::prelude::*;
/// let table = RouteConfig::from_toml_str(
///     r#"
///     [[routes]]
///     path = "/"
///     name = "Home"
///     view = "HomePage"
///
///     [[routes]]
///     path = "/randomjokes"
///     name = "Random Jokes"
///     view = "RandomJokesPage"
///     "#,
/// )
/// .unwrap()
/// .into_table()
/// .unwrap();
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.resolve("/").map(|r| r.view().as_str()), Some("HomePage"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteConfig {
    /// The routes, in matching order.
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

/// One `{ path, name, view }` triple of a [`RouteConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteEntry {
    /// The path pattern.
    pub path: String,
    /// The unique route name.
    pub name: String,
    /// The view to show.
    pub view: ViewId,
}

impl RouteConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Validate the configuration and build the [`RouteTable`].
    pub fn into_table(self) -> Result<RouteTable, DuplicateRouteError> {
        RouteTable::new(
            self.routes
                .into_iter()
                .map(|entry| RouteDefinition::new(entry.path, entry.name, entry.view)),
        )
    }
}

impl RouteTable<ViewId> {
    /// Build a table straight from TOML text. See [`RouteConfig`] for the format.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(RouteConfig::from_toml_str(source)?.into_table()?)
    }

    /// Build a table from a TOML file. See [`RouteConfig`] for the format.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(RouteConfig::load(path)?.into_table()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_an_empty_table() {
        let table = RouteTable::from_toml_str("").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn keeps_declaration_order() {
        let config = RouteConfig::from_toml_str(
            r#"
            [[routes]]
            path = "/b"
            name = "B"
            view = "BPage"

            [[routes]]
            path = "/a"
            name = "A"
            view = "APage"
            "#,
        )
        .unwrap();

        let names: Vec<_> = config.routes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn config_written_back_reads_the_same() {
        let config = RouteConfig {
            routes: vec![RouteEntry {
                path: String::from("/randomjokes"),
                name: String::from("Random Jokes"),
                view: ViewId::from("RandomJokesPage"),
            }],
        };

        let written = toml::to_string(&config).unwrap();
        assert!(written.contains(r#"view = "RandomJokesPage""#));
        assert_eq!(RouteConfig::from_toml_str(&written).unwrap(), config);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = RouteConfig::from_toml_str(
            r#"
            [[routes]]
            path = "/"
            name = "Home"
            view = "HomePage"
            component = "HomePage"
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_view_is_rejected() {
        let err = RouteConfig::from_toml_str(
            r#"
            [[routes]]
            path = "/"
            name = "Home"
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn duplicates_surface_as_config_errors() {
        let err = RouteTable::from_toml_str(
            r#"
            [[routes]]
            path = "/"
            name = "Home"
            view = "HomePage"

            [[routes]]
            path = "/home"
            name = "Home"
            view = "HomePage"
            "#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Duplicate(DuplicateRouteError::Name(name)) if name == "Home"
        ));
    }

    #[test]
    fn missing_file() {
        let err = RouteTable::load("/definitely/not/here/routes.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
