//! Types relating to navigation.

/// A target for the router to navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// Navigate to the specified path. May carry a query string and fragment.
    Path(String),
    /// Navigate to the route with the corresponding name.
    Named {
        /// The name of the target route.
        name: String,
        /// Values inserted into the parameter segments of the route's path.
        parameters: Vec<(String, String)>,
    },
}

impl NavigationTarget {
    /// Create a named target without parameters.
    ///
    /// ```rust
    /// # use waypoint_router::prelude::*;
    /// let target = NavigationTarget::named("Jokes By Kind").parameter("kind", "programming");
    /// assert!(target.is_named());
    /// ```
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Add a parameter to a named target. Does nothing for path targets.
    pub fn parameter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        if let Self::Named { parameters, .. } = &mut self {
            parameters.push((key.into(), value.to_string()));
        }
        self
    }

    /// Returns `true` if the navigation target is [`Named`].
    ///
    /// [`Named`]: NavigationTarget::Named
    #[must_use]
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named { .. })
    }
}

impl From<&str> for NavigationTarget {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for NavigationTarget {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

/// How a navigation is recorded in the history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of appending a new one.
    ///
    /// Used for redirects and to replay back/forward traversal without growing the history.
    pub replace: bool,
}

impl NavigateOptions {
    /// Append a new history entry.
    pub const fn push() -> Self {
        Self { replace: false }
    }

    /// Replace the current history entry.
    pub const fn replace() -> Self {
        Self { replace: true }
    }
}
