use std::{cell::RefCell, rc::Rc};

use tracing::error;

use crate::History;

#[derive(Default)]
struct MemoryHistoryState {
    current: Option<String>,
    history: Vec<String>,
    future: Vec<String>,
}

/// A [`History`] provider that stores all navigation information in memory.
///
/// A [`MemoryHistory`] created with [`MemoryHistory::new`] holds no entry at all, which mirrors a
/// router that has not navigated yet. Use [`MemoryHistory::with_initial_path`] to model an
/// environment that already sits on some path.
#[derive(Default)]
pub struct MemoryHistory {
    state: RefCell<MemoryHistoryState>,
    base_path: Option<String>,
    updater: RefCell<Option<Rc<dyn Fn()>>>,
}

impl MemoryHistory {
    /// Create an empty [`MemoryHistory`].
    ///
    /// ```rust
    /// # use waypoint_history::*;
    /// let history = MemoryHistory::new();
    /// assert_eq!(history.current_route(), None);
    /// assert_eq!(history.len(), 0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a [`MemoryHistory`] starting at `path`.
    ///
    /// ```rust
    /// # use waypoint_history::*;
    /// let history = MemoryHistory::with_initial_path("/randomjokes");
    /// assert_eq!(history.current_route().as_deref(), Some("/randomjokes"));
    /// assert_eq!(history.can_go_back(), false);
    /// ```
    pub fn with_initial_path(path: impl ToString) -> Self {
        Self {
            state: MemoryHistoryState {
                current: Some(path.to_string()),
                ..Default::default()
            }
            .into(),
            ..Default::default()
        }
    }

    /// Set the base path for the history. All routes will be prefixed with this path when rendered.
    ///
    /// ```rust
    /// # use waypoint_history::*;
    /// let history = MemoryHistory::default().with_prefix("/my-app");
    ///
    /// // The base path is set to "/my-app"
    /// assert_eq!(history.current_prefix(), Some("/my-app".to_string()));
    /// ```
    pub fn with_prefix(mut self, prefix: impl ToString) -> Self {
        self.base_path = Some(prefix.to_string());
        self
    }

    /// The number of entries held, counting past entries and the current one. Future entries are
    /// not counted.
    pub fn len(&self) -> usize {
        let state = self.state.borrow();
        state.history.len() + usize::from(state.current.is_some())
    }

    /// Returns `true` if no entry has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All past entries followed by the current one, oldest first.
    pub fn entries(&self) -> Vec<String> {
        let state = self.state.borrow();
        state
            .history
            .iter()
            .chain(state.current.iter())
            .cloned()
            .collect()
    }

    fn notify(&self) {
        // clone the callback out so it may freely call back into the history
        let updater = self.updater.borrow().clone();
        if let Some(callback) = updater {
            callback();
        }
    }
}

impl History for MemoryHistory {
    fn current_prefix(&self) -> Option<String> {
        self.base_path.clone()
    }

    fn current_route(&self) -> Option<String> {
        self.state.borrow().current.clone()
    }

    fn can_go_back(&self) -> bool {
        !self.state.borrow().history.is_empty()
    }

    fn go_back(&self) {
        let moved = {
            let mut write = self.state.borrow_mut();
            match write.history.pop() {
                Some(last) => {
                    if let Some(old) = write.current.replace(last) {
                        write.future.push(old);
                    }
                    true
                }
                None => false,
            }
        };

        if moved {
            self.notify();
        }
    }

    fn can_go_forward(&self) -> bool {
        !self.state.borrow().future.is_empty()
    }

    fn go_forward(&self) {
        let moved = {
            let mut write = self.state.borrow_mut();
            match write.future.pop() {
                Some(next) => {
                    if let Some(old) = write.current.replace(next) {
                        write.history.push(old);
                    }
                    true
                }
                None => false,
            }
        };

        if moved {
            self.notify();
        }
    }

    fn push(&self, new: String) -> bool {
        if new.starts_with("//") {
            error!(r#"cannot navigate to paths starting with "//", path: {new}"#);
            return false;
        }

        let mut write = self.state.borrow_mut();
        // don't push the same route twice
        if write.current.as_deref() == Some(new.as_str()) {
            return true;
        }
        if let Some(old) = write.current.replace(new) {
            write.history.push(old);
        }
        write.future.clear();
        true
    }

    fn replace(&self, path: String) -> bool {
        if path.starts_with("//") {
            error!(r#"cannot navigate to paths starting with "//", path: {path}"#);
            return false;
        }

        self.state.borrow_mut().current = Some(path);
        true
    }

    fn updater(&self, callback: Rc<dyn Fn()>) {
        *self.updater.borrow_mut() = Some(callback);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn push_moves_current_into_history() {
        let history = MemoryHistory::with_initial_path("/");
        history.push(String::from("/randomjokes"));

        assert_eq!(history.current_route().as_deref(), Some("/randomjokes"));
        assert_eq!(history.entries(), vec!["/", "/randomjokes"]);
        assert!(history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn push_on_empty_history_records_first_entry() {
        let history = MemoryHistory::new();
        history.push(String::from("/"));

        assert_eq!(history.len(), 1);
        assert!(!history.can_go_back());
    }

    #[test]
    fn push_same_route_twice_is_ignored() {
        let history = MemoryHistory::with_initial_path("/");
        assert!(history.push(String::from("/randomjokes")));
        assert!(history.push(String::from("/randomjokes")));

        assert_eq!(history.len(), 2);
    }

    #[test]
    fn push_clears_future() {
        let history = MemoryHistory::with_initial_path("/");
        history.push(String::from("/a"));
        history.go_back();
        assert!(history.can_go_forward());

        history.push(String::from("/b"));
        assert!(!history.can_go_forward());
        assert_eq!(history.entries(), vec!["/", "/b"]);
    }

    #[test]
    fn replace_keeps_length() {
        let history = MemoryHistory::with_initial_path("/");
        history.push(String::from("/a"));
        history.replace(String::from("/b"));

        assert_eq!(history.entries(), vec!["/", "/b"]);
    }

    #[test]
    fn replace_on_empty_history_records_first_entry() {
        let history = MemoryHistory::new();
        history.replace(String::from("/a"));
        history.replace(String::from("/b"));

        assert_eq!(history.entries(), vec!["/b"]);
    }

    #[test]
    fn back_and_forward() {
        let history = MemoryHistory::with_initial_path("/");
        history.push(String::from("/a"));

        history.go_back();
        assert_eq!(history.current_route().as_deref(), Some("/"));

        history.go_forward();
        assert_eq!(history.current_route().as_deref(), Some("/a"));

        // nothing left to go forward to
        history.go_forward();
        assert_eq!(history.current_route().as_deref(), Some("/a"));
    }

    #[test]
    fn double_slash_is_rejected() {
        let history = MemoryHistory::with_initial_path("/");
        assert!(!history.push(String::from("//evil.example")));
        assert!(!history.replace(String::from("//evil.example")));

        assert_eq!(history.entries(), vec!["/"]);
    }

    #[test]
    fn traversal_notifies_updater() {
        let history = MemoryHistory::with_initial_path("/");
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        history.updater(Rc::new(move || counter.set(counter.get() + 1)));

        history.push(String::from("/a"));
        history.replace(String::from("/b"));
        assert_eq!(calls.get(), 0);

        history.go_back();
        history.go_forward();
        assert_eq!(calls.get(), 2);

        // no-op traversal stays silent
        history.go_forward();
        assert_eq!(calls.get(), 2);
    }
}
