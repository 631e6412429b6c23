// File: src/history.rs
// Purpose: Locations, the routing context trait and an in-memory history with listeners

use serde::{Deserialize, Serialize};

/// Current location as seen by the routing layer
///
/// Only `pathname` feeds the breadcrumb trail; `search` and `hash` are kept so
/// render functions can see the full location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub hash: String,
}

impl Location {
    /// Creates a location with only a pathname
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            ..Self::default()
        }
    }

    /// Splits a url into pathname, `?search` and `#hash`
    ///
    /// No normalization happens: the pathname is kept byte for byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_breadcrumbs::Location;
    ///
    /// let loc = Location::parse("/users/42?tab=posts#top");
    /// assert_eq!(loc.pathname, "/users/42");
    /// assert_eq!(loc.search, "?tab=posts");
    /// assert_eq!(loc.hash, "#top");
    /// ```
    pub fn parse(url: &str) -> Self {
        let (rest, hash) = match url.find('#') {
            Some(i) => (&url[..i], &url[i..]),
            None => (url, ""),
        };
        let (pathname, search) = match rest.find('?') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, ""),
        };

        Self {
            pathname: pathname.to_string(),
            search: search.to_string(),
            hash: hash.to_string(),
        }
    }
}

/// Anything that can tell the current location
///
/// Wrapped components read their location through this trait, so they work
/// the same with a fixed [`Location`] and with a live [`MemoryHistory`].
pub trait RoutingContext {
    fn location(&self) -> &Location;
}

impl RoutingContext for Location {
    fn location(&self) -> &Location {
        self
    }
}

/// How the current location was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Push,
    Replace,
    Pop,
}

/// Handle returned by [`MemoryHistory::listen`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&Location, Action)>;

/// In-memory navigation stack with change listeners
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumbs::{Action, MemoryHistory};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
///
/// let mut history = MemoryHistory::new("/");
/// history.listen(move |loc, action| sink.borrow_mut().push((loc.pathname.clone(), action)));
///
/// history.push("/users");
/// history.back();
///
/// assert_eq!(
///     *seen.borrow(),
///     vec![("/users".to_string(), Action::Push), ("/".to_string(), Action::Pop)]
/// );
/// ```
pub struct MemoryHistory {
    entries: Vec<Location>,
    index: usize,
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl MemoryHistory {
    /// Creates a history with a single entry
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![Location::parse(initial)],
            index: 0,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Number of entries in the stack
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the current entry
    pub fn index(&self) -> usize {
        self.index
    }

    /// Navigates to a new entry, dropping any forward entries
    pub fn push(&mut self, url: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(Location::parse(url));
        self.index = self.entries.len() - 1;
        self.notify(Action::Push);
    }

    /// Replaces the current entry
    pub fn replace(&mut self, url: &str) {
        self.entries[self.index] = Location::parse(url);
        self.notify(Action::Replace);
    }

    /// Moves `delta` entries through the stack, clamped to its bounds
    ///
    /// Listeners are only notified when the current entry actually changes.
    pub fn go(&mut self, delta: isize) {
        let last = self.entries.len().saturating_sub(1);
        let target = self.index.saturating_add_signed(delta).min(last);

        if target != self.index {
            self.index = target;
            self.notify(Action::Pop);
        }
    }

    pub fn back(&mut self) {
        self.go(-1);
    }

    pub fn forward(&mut self) {
        self.go(1);
    }

    /// Registers a listener called after every location change
    pub fn listen(&mut self, listener: impl FnMut(&Location, Action) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener; returns false when the id is unknown
    pub fn unlisten(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, action: Action) {
        let location = &self.entries[self.index];
        tracing::trace!("History {:?} to {}", action, location.pathname);

        for (_, listener) in self.listeners.iter_mut() {
            listener(location, action);
        }
    }
}

impl RoutingContext for MemoryHistory {
    fn location(&self) -> &Location {
        &self.entries[self.index]
    }
}

impl std::fmt::Debug for MemoryHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryHistory")
            .field("entries", &self.entries)
            .field("index", &self.index)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
