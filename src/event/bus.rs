use std::cell::{Cell, RefCell};

/// Handle returned by [`Callbacks::add`], used to remove the listener again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<T> = Box<dyn FnMut(&T)>;

/// A registry of listener functions that are all called, in registration
/// order, whenever a payload is fired.
pub struct Callbacks<T> {
    listeners: RefCell<Vec<(ListenerId, Listener<T>)>>,
    next_id: Cell<u64>,
}

impl<T> std::fmt::Debug for Callbacks<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("listeners", &format!("<{} listeners>", self.listeners.borrow().len()))
            .finish()
    }
}

impl<T> Default for Callbacks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Callbacks<T> {
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Register a listener
    pub fn add(&self, listener: impl FnMut(&T) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn remove(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// Call every listener with the payload.
    ///
    /// Listeners must not add or remove listeners on the registry firing them.
    pub fn fire(&self, payload: &T) {
        for (_, listener) in self.listeners.borrow_mut().iter_mut() {
            listener(payload);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }
}
