#![warn(missing_docs)]
//! History integration for the waypoint router.
//!
//! The router relies on so-called [`History`] providers to store the current path, and possibly a
//! history (i.e. a browser's back button) and future (i.e. a browser's forward button).
//!
//! To integrate the router with any kind of navigation history, implement the [`History`] trait.
//! [`MemoryHistory`] is provided for tests and for hosts without a browser.

use std::rc::Rc;

mod memory;
pub use memory::*;

/// An integration with some kind of navigation history.
///
/// Depending on your use case, your implementation may deviate from the described procedure. This
/// is fine, as long as `current_route` matches the described format.
///
/// The described behaviors are designed to mimic a web browser, which most users should already
/// know. Deviations might confuse them.
pub trait History {
    /// Get the path of the current entry, including any query string.
    ///
    /// **Must start** with `/`. **Must _not_ contain** the prefix. Returns [`None`] if the history
    /// holds no entry yet.
    ///
    /// ```rust
    /// # use waypoint_history::{History, MemoryHistory};
    /// let history = MemoryHistory::with_initial_path("/");
    /// assert_eq!(history.current_route().as_deref(), Some("/"));
    ///
    /// history.push(String::from("/path"));
    /// assert_eq!(history.current_route().as_deref(), Some("/path"));
    /// ```
    #[must_use]
    fn current_route(&self) -> Option<String>;

    /// Get the current path prefix of the URL.
    ///
    /// Not all [`History`] providers need a prefix. It is meant for environments where the
    /// application is not mounted at `/`. The provider is responsible for removing the prefix from
    /// router-internal paths, and for adding it back during navigation. The router only uses this
    /// value to build `href`s.
    fn current_prefix(&self) -> Option<String> {
        None
    }

    /// Check whether there is a previous page to navigate back to.
    ///
    /// If a [`History`] cannot know this, it should return [`true`].
    #[must_use]
    fn can_go_back(&self) -> bool {
        true
    }

    /// Go back to a previous page.
    ///
    /// If a [`History`] cannot go to a previous page, it should do nothing. This method might be
    /// called even if `can_go_back` returns [`false`].
    ///
    /// A provider should notify its [`updater`](History::updater) after the current entry changed,
    /// just like a browser fires `popstate`.
    fn go_back(&self);

    /// Check whether there is a future page to navigate forward to.
    ///
    /// If a [`History`] cannot know this, it should return [`true`].
    #[must_use]
    fn can_go_forward(&self) -> bool {
        true
    }

    /// Go forward to a future page.
    ///
    /// If a [`History`] cannot go to a future page, it should do nothing. Like
    /// [`go_back`](History::go_back), this should notify the [`updater`](History::updater).
    fn go_forward(&self);

    /// Go to another page.
    ///
    /// This should do three things:
    /// 1. Move the current entry into the navigation history.
    /// 2. Make `route` the current entry.
    /// 3. Clear the navigation future.
    ///
    /// Returns `false` if the provider refused `route`, in which case nothing changed. Pushing the
    /// current route again is accepted, even if no new entry is created.
    ///
    /// ```rust
    /// # use waypoint_history::{History, MemoryHistory};
    /// let history = MemoryHistory::with_initial_path("/");
    ///
    /// assert!(history.push(String::from("/some-other-page")));
    /// assert_eq!(history.current_route().as_deref(), Some("/some-other-page"));
    /// assert!(history.can_go_back());
    /// ```
    fn push(&self, route: String) -> bool;

    /// Replace the current page with another one.
    ///
    /// In contrast to [`push`](History::push), the navigation history and future stay untouched.
    /// If there is no current entry, `path` becomes the first one. Returns `false` if the provider
    /// refused `path`, in which case nothing changed.
    ///
    /// ```rust
    /// # use waypoint_history::{History, MemoryHistory};
    /// let history = MemoryHistory::with_initial_path("/");
    ///
    /// history.replace(String::from("/some-other-page"));
    /// assert_eq!(history.current_route().as_deref(), Some("/some-other-page"));
    /// assert!(!history.can_go_back());
    /// ```
    fn replace(&self, path: String) -> bool;

    /// Provide the [`History`] with an update callback.
    ///
    /// Some providers receive location changes from outside the router (the user pressing the
    /// back or forward button). When that happens they should call `callback`, which causes the
    /// router to resynchronize. Navigation performed through [`push`](History::push) and
    /// [`replace`](History::replace) must not trigger the callback.
    #[allow(unused_variables)]
    fn updater(&self, callback: Rc<dyn Fn()>) {}
}
