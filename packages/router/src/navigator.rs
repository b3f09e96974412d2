//! The navigator: drives [`Location`] changes from navigation intents.

use std::rc::{Rc, Weak};

use futures_channel::mpsc::{unbounded, UnboundedReceiver};
use futures_util::{FutureExt, StreamExt};
use tracing::{debug, warn};
use waypoint_history::History;

use crate::{
    error::{NavigationError, RouteNotFoundError},
    helpers::split_path,
    navigation::{NavigateOptions, NavigationTarget},
    route_table::RouteTable,
    state::{Location, NavigatorState, RouteView},
    view::ViewId,
};

/// A set of messages the [`Navigator`] receives from outside.
pub(crate) enum RouterMessage {
    /// The history changed without the navigator asking for it (back/forward buttons).
    Update,
}

type Subscriber<V> = dyn Fn(&Location<V>);

/// Keeps a [`Navigator`] subscriber alive. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription<V = ViewId> {
    _callback: Rc<Subscriber<V>>,
}

/// The core of the router.
///
/// This combines a [`RouteTable`] and a [`History`] provider. Every navigation intent (a link
/// activation, a programmatic request, or the user traversing the history) is resolved against the
/// table, recorded in the history and published as a fresh [`Location`].
///
/// Navigation is processed to completion one event at a time. The current [`Location`] is replaced
/// as a whole, so subscribers never observe a half-updated state.
pub struct Navigator<V = ViewId> {
    routes: RouteTable<V>,
    history: Rc<dyn History>,
    location: Option<Location<V>>,
    rx: UnboundedReceiver<RouterMessage>,
    subscribers: Vec<Weak<Subscriber<V>>>,
}

impl<V: Clone + 'static> Navigator<V> {
    /// Create a new [`Navigator`].
    ///
    /// The navigator starts out [`Uninitialized`](NavigatorState::Uninitialized) and registers
    /// itself as the updater of `history`. Call [`start`](Self::start) to pick up the path the
    /// environment currently shows.
    pub fn new(routes: RouteTable<V>, history: Rc<dyn History>) -> Self {
        let (tx, rx) = unbounded();
        history.updater(Rc::new(move || {
            tx.unbounded_send(RouterMessage::Update).ok();
        }));

        Self {
            routes,
            history,
            location: None,
            rx,
            subscribers: Vec::new(),
        }
    }

    /// Initialize the [`Location`] from the history's current entry, or `/` if there is none.
    ///
    /// The entry is replaced rather than pushed, so starting never grows the history.
    ///
    /// # Errors
    /// Fails with [`NavigationError::Rejected`] if the history refuses the path.
    pub fn start(&mut self) -> Result<&Location<V>, NavigationError> {
        let path = self
            .history
            .current_route()
            .unwrap_or_else(|| String::from("/"));
        self.navigate(&path, NavigateOptions::replace())
    }

    /// Navigate to `path`.
    ///
    /// The path may carry a query string and fragment; both are ignored for matching. A path that
    /// matches no route is not an error: the [`Location`] then shows [`RouteView::NotFound`], and
    /// the history entry is recorded all the same so back/forward traversal stays consistent.
    ///
    /// # Errors
    /// If the history refuses to record `path` (a [`MemoryHistory`](waypoint_history::MemoryHistory)
    /// refuses paths starting with `//`), this fails with [`NavigationError::Rejected`] and the
    /// [`Location`] stays what it was.
    pub fn navigate(
        &mut self,
        path: &str,
        options: NavigateOptions,
    ) -> Result<&Location<V>, NavigationError> {
        let recorded = if options.replace {
            self.history.replace(path.to_string())
        } else {
            self.history.push(path.to_string())
        };

        if !recorded {
            warn!(path, replace = options.replace, "history refused path");
            return Err(NavigationError::Rejected {
                path: path.to_string(),
            });
        }

        let location = self.resolve_location(path);
        match &location.view {
            RouteView::Resolved(_) => debug!(
                path,
                route = location.name.as_deref(),
                replace = options.replace,
                "navigating"
            ),
            RouteView::NotFound => warn!(path, replace = options.replace, "no route matches path"),
        }

        let location = &*self.location.insert(location);
        Self::update_subscribers(&mut self.subscribers, location);
        Ok(location)
    }

    /// Navigate to `path`, appending a history entry. See [`navigate`](Self::navigate).
    pub fn push(&mut self, path: &str) -> Result<&Location<V>, NavigationError> {
        self.navigate(path, NavigateOptions::push())
    }

    /// Navigate to `path`, replacing the current history entry. See [`navigate`](Self::navigate).
    pub fn replace(&mut self, path: &str) -> Result<&Location<V>, NavigationError> {
        self.navigate(path, NavigateOptions::replace())
    }

    /// Navigate to the route called `name`, appending a history entry.
    ///
    /// `parameters` are inserted into the route's parameter segments.
    ///
    /// # Errors
    /// Unlike an unmatched path, an unknown `name` is a programming error and fails with
    /// [`NavigationError::RouteNotFound`]. A missing parameter fails with
    /// [`NavigationError::MissingParameter`].
    pub fn navigate_by_name<K, P>(
        &mut self,
        name: &str,
        parameters: &[(K, P)],
    ) -> Result<&Location<V>, NavigationError>
    where
        K: AsRef<str>,
        P: AsRef<str>,
    {
        let path = self.named_path(name, parameters)?;
        self.navigate(&path, NavigateOptions::push())
    }

    /// Navigate to any [`NavigationTarget`].
    pub fn navigate_to(
        &mut self,
        target: impl Into<NavigationTarget>,
        options: NavigateOptions,
    ) -> Result<&Location<V>, NavigationError> {
        let path = self.target_path(&target.into())?;
        self.navigate(&path, options)
    }

    /// Go back a step in the history and resynchronize.
    pub fn go_back(&mut self) {
        self.history.go_back();
        self.handle_pending();
    }

    /// Go forward a step in the history and resynchronize.
    pub fn go_forward(&mut self) {
        self.history.go_forward();
        self.handle_pending();
    }

    /// Whether there is a previous page to navigate back to.
    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    /// Whether there is a later page to navigate forward to.
    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    /// Process every history change that was reported so far.
    ///
    /// Each change is replayed as a replacing navigation to the history's current entry, so the
    /// [`Location`] follows the history without creating duplicate entries.
    pub fn handle_pending(&mut self) {
        while let Some(Some(message)) = self.rx.next().now_or_never() {
            self.handle_message(message);
        }
    }

    /// The navigator's event loop.
    ///
    /// Waits for history changes and processes them as they arrive. The history keeps the sending
    /// half alive for as long as this navigator exists, so the loop never finishes on its own:
    /// drive it inside a `select` with the rest of the application, or drop the future to stop it.
    pub async fn run(&mut self) {
        while let Some(message) = self.rx.next().await {
            self.handle_message(message);
        }
    }

    fn handle_message(&mut self, message: RouterMessage) {
        match message {
            RouterMessage::Update => {
                if let Some(path) = self.history.current_route() {
                    debug!(path, "history changed externally");
                    if let Err(err) = self.navigate(&path, NavigateOptions::replace()) {
                        warn!(%err, "failed to follow history change");
                    }
                }
            }
        }
    }

    /// Subscribe to [`Location`] changes.
    ///
    /// `callback` is called right away if a [`Location`] exists, and then after every navigation.
    /// It stays subscribed for as long as the returned [`Subscription`] is alive.
    pub fn subscribe(&mut self, callback: impl Fn(&Location<V>) + 'static) -> Subscription<V> {
        let callback: Rc<Subscriber<V>> = Rc::new(callback);
        self.subscribers.push(Rc::downgrade(&callback));

        if let Some(location) = &self.location {
            callback(location);
        }

        Subscription {
            _callback: callback,
        }
    }

    /// The current [`Location`], or [`None`] before the first navigation.
    pub fn location(&self) -> Option<&Location<V>> {
        self.location.as_ref()
    }

    /// The current state of the navigation state machine.
    pub fn state(&self) -> NavigatorState<&V> {
        match self.location.as_ref().map(|l| &l.view) {
            None => NavigatorState::Uninitialized,
            Some(RouteView::Resolved(view)) => NavigatorState::Resolved(view),
            Some(RouteView::NotFound) => NavigatorState::NotFound,
        }
    }

    /// The route table this navigator matches against.
    pub fn routes(&self) -> &RouteTable<V> {
        &self.routes
    }

    /// Check whether `target` is currently active. See [`Location::is_at`].
    ///
    /// Always [`false`] before the first navigation.
    pub fn is_active(&self, target: &NavigationTarget, exact: bool) -> bool {
        self.location
            .as_ref()
            .is_some_and(|location| location.is_at(target, exact))
    }

    /// Get the `href` for the `target`, including the history's prefix.
    pub fn href(&self, target: &NavigationTarget) -> Result<String, NavigationError> {
        let path = self.target_path(target)?;
        Ok(match self.history.current_prefix() {
            Some(prefix) => format!("{prefix}{path}"),
            None => path,
        })
    }

    fn target_path(&self, target: &NavigationTarget) -> Result<String, NavigationError> {
        match target {
            NavigationTarget::Path(path) => Ok(path.clone()),
            NavigationTarget::Named { name, parameters } => self.named_path(name, parameters),
        }
    }

    fn named_path<K, P>(&self, name: &str, parameters: &[(K, P)]) -> Result<String, NavigationError>
    where
        K: AsRef<str>,
        P: AsRef<str>,
    {
        let route = self
            .routes
            .by_name(name)
            .ok_or_else(|| RouteNotFoundError {
                name: name.to_string(),
            })?;
        route.interpolate(parameters)
    }

    fn resolve_location(&self, target: &str) -> Location<V> {
        let (path, query) = split_path(target);
        let query = query.map(str::to_string);

        match self.routes.resolve_match(path) {
            Some(found) => Location {
                path: path.to_string(),
                query,
                name: Some(found.route.name().to_string()),
                view: RouteView::Resolved(found.route.view().clone()),
                parameters: found.parameters,
            },
            None => Location::not_found(path, query),
        }
    }

    /// Publish `location` to all subscribers.
    ///
    /// Also sorts out the subscribers whose [`Subscription`] was dropped since the last update.
    fn update_subscribers(subscribers: &mut Vec<Weak<Subscriber<V>>>, location: &Location<V>) {
        subscribers.retain(|s| match s.upgrade() {
            Some(callback) => {
                callback(location);
                true
            }
            None => false,
        });
    }
}
