//! Signal system for reactive value binding.
//!
//! Widgets store their value as a [MaybeSignal] so callers can hand over
//! either a plain initial value or a shared
//! [StateSignal](state::StateSignal) that outside code reads, writes and
//! listens to. Strictly single-threaded.

/// Contains the [StateSignal] implementation.
pub mod state;

pub use state::StateSignal;

use std::cell::{Ref, RefCell};

/// A change listener attached to a [StateSignal].
pub type Listener<T> = Box<dyn Fn(&T)>;

/// Either a plain owned value or a shared signal.
pub enum MaybeSignal<T: 'static> {
    /// An owned value without listeners.
    Value(RefCell<T>),
    /// A shared signal; writes notify its listeners.
    Signal(StateSignal<T>),
}

impl<T: 'static> MaybeSignal<T> {
    /// Creates a `MaybeSignal` from a plain value.
    pub fn value(value: T) -> Self {
        Self::Value(RefCell::new(value))
    }

    /// Borrows the current value.
    pub fn get(&self) -> Ref<'_, T> {
        match self {
            Self::Value(cell) => cell.borrow(),
            Self::Signal(signal) => signal.get(),
        }
    }

    /// Returns the underlying signal, if any.
    pub fn as_signal(&self) -> Option<&StateSignal<T>> {
        match self {
            Self::Value(_) => None,
            Self::Signal(signal) => Some(signal),
        }
    }
}

impl<T: Clone + 'static> MaybeSignal<T> {
    /// Replaces the current value, notifying listeners when backed by a
    /// signal.
    pub fn set(&self, value: T) {
        match self {
            Self::Value(cell) => *cell.borrow_mut() = value,
            Self::Signal(signal) => signal.set(value),
        }
    }
}

impl<T: 'static> From<T> for MaybeSignal<T> {
    fn from(value: T) -> Self {
        Self::value(value)
    }
}

impl<T: 'static> From<StateSignal<T>> for MaybeSignal<T> {
    fn from(signal: StateSignal<T>) -> Self {
        Self::Signal(signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maybe_signal_value() {
        let value: MaybeSignal<f64> = 4.0.into();
        assert_eq!(*value.get(), 4.0);
        assert!(value.as_signal().is_none());

        value.set(7.0);
        assert_eq!(*value.get(), 7.0);
    }

    #[test]
    fn test_maybe_signal_shares_signal_storage() {
        let signal = StateSignal::new(1.0);
        let value: MaybeSignal<f64> = signal.clone().into();
        assert!(value.as_signal().is_some());

        value.set(2.0);
        assert_eq!(*signal.get(), 2.0);

        signal.set(3.0);
        assert_eq!(*value.get(), 3.0);
    }
}
