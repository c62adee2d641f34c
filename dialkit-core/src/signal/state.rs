use crate::signal::Listener;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Shared value cell based on [Rc] and [RefCell] that notifies listeners
/// on every write.
///
/// Clones share both the value and the listener list, so a signal handed
/// to a widget stays connected to the copy the caller keeps.
pub struct StateSignal<T: 'static> {
    value: Rc<RefCell<T>>,
    listeners: Rc<RefCell<Vec<Listener<T>>>>,
}

impl<T: 'static> StateSignal<T> {
    /// Creates a new signal holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Borrows the current value.
    pub fn get(&self) -> Ref<'_, T> {
        self.value.borrow()
    }

    /// Attaches a change listener.
    pub fn listen(&self, listener: Listener<T>) {
        self.listeners.borrow_mut().push(listener);
    }
}

impl<T: Clone + 'static> StateSignal<T> {
    /// Replaces the value and notifies all listeners.
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value;
        self.notify();
    }

    /// Notifies all listeners with the current value.
    ///
    /// The value is cloned out before the callbacks run, so a listener may
    /// read or write the signal again without hitting an open borrow.
    pub fn notify(&self) {
        let current = self.value.borrow().clone();
        for listener in self.listeners.borrow().iter() {
            listener(&current);
        }
    }
}

impl<T: 'static> Clone for StateSignal<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            listeners: self.listeners.clone(),
        }
    }
}
