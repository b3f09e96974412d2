//! The navigation state published to the rendering layer.

use std::collections::BTreeMap;

use crate::{navigation::NavigationTarget, view::ViewId};

/// The view a [`Location`] resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteView<V = ViewId> {
    /// A route matched; render its view.
    Resolved(V),
    /// No route matched; render the fallback view.
    NotFound,
}

impl<V> RouteView<V> {
    /// Returns `true` if no route matched.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// The matched view, if any.
    pub fn resolved(&self) -> Option<&V> {
        match self {
            Self::Resolved(view) => Some(view),
            Self::NotFound => None,
        }
    }
}

/// A snapshot of the current navigation state.
///
/// A [`Location`] is never modified after it was published; every navigation produces a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Location<V = ViewId> {
    /// The current path, without query or fragment.
    pub path: String,
    /// The current query string without the leading `?`, if present.
    pub query: Option<String>,
    /// The name of the matched route.
    pub name: Option<String>,
    /// The view to render.
    pub view: RouteView<V>,
    /// The parameters read from the path, empty for literal routes.
    pub parameters: BTreeMap<String, String>,
}

impl<V> Location<V> {
    pub(crate) fn not_found(path: impl Into<String>, query: Option<String>) -> Self {
        Self {
            path: path.into(),
            query,
            name: None,
            view: RouteView::NotFound,
            parameters: BTreeMap::new(),
        }
    }

    /// Check whether the `target` is currently active.
    ///
    /// # Normal mode
    /// 1. For path targets wrapping an absolute path, the current path has to start with it.
    /// 2. For path targets wrapping a relative path, it has to match the last current segment
    ///    exactly.
    /// 3. For named targets, the provided name needs to be active.
    ///
    /// # Exact mode
    /// 1. For path targets, the current path must match the wrapped path exactly.
    /// 2. For named targets, the provided name needs to be active and all parameters need to match
    ///    exactly.
    ///
    /// Queries and fragments of path targets are ignored.
    pub fn is_at(&self, target: &NavigationTarget, exact: bool) -> bool {
        match target {
            NavigationTarget::Path(target) => {
                let (target, _) = crate::helpers::split_path(target);
                if exact {
                    target == self.path
                } else if target.starts_with('/') {
                    self.path.starts_with(target)
                } else if let Some((_, s)) = self.path.rsplit_once('/') {
                    s == target
                } else {
                    false
                }
            }
            NavigationTarget::Named { name, parameters } => {
                if self.name.as_deref() != Some(name.as_str()) {
                    false
                } else if exact {
                    parameters
                        .iter()
                        .all(|(k, v)| self.parameters.get(k) == Some(v))
                } else {
                    true
                }
            }
        }
    }
}

/// The state machine driven by the [`Navigator`](crate::navigator::Navigator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigatorState<V> {
    /// No navigation happened yet.
    Uninitialized,
    /// The current path matched a route with this view.
    Resolved(V),
    /// The current path matched no route.
    NotFound,
}
