//! SystemSignal - the OS/browser "prefers dark" preference

use std::cell::{Cell, RefCell};

/// Callback invoked with the new "prefers dark" state
pub type SignalHandler = Box<dyn FnMut(bool)>;

/// Live, externally owned color-scheme preference.
pub trait SystemSignal {
    /// Current state, read synchronously
    fn prefers_dark(&self) -> bool;

    /// Register a change handler for the rest of the page's lifetime.
    ///
    /// Returns `false` when the host cannot observe changes; the handler
    /// is dropped in that case.
    fn subscribe(&self, handler: SignalHandler) -> bool;
}

/// Signal driven by hand, for native hosts and tests
pub struct ManualSignal {
    prefers_dark: Cell<bool>,
    observable: bool,
    handlers: RefCell<Vec<SignalHandler>>,
}

impl ManualSignal {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: Cell::new(prefers_dark),
            observable: true,
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Signal whose state can be read but not observed
    pub fn unobservable(prefers_dark: bool) -> Self {
        Self {
            observable: false,
            ..Self::new(prefers_dark)
        }
    }

    /// Change the preference and notify subscribers
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        self.prefers_dark.set(prefers_dark);
        for handler in self.handlers.borrow_mut().iter_mut() {
            handler(prefers_dark);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl SystemSignal for ManualSignal {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }

    fn subscribe(&self, handler: SignalHandler) -> bool {
        if !self.observable {
            return false;
        }
        self.handlers.borrow_mut().push(handler);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_manual_signal_notifies_subscribers() {
        let signal = ManualSignal::new(false);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        assert!(signal.subscribe(Box::new(move |dark| sink.borrow_mut().push(dark))));

        signal.set_prefers_dark(true);
        signal.set_prefers_dark(false);

        assert!(!signal.prefers_dark());
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_unobservable_signal_refuses_subscription() {
        let signal = ManualSignal::unobservable(true);
        assert!(signal.prefers_dark());
        assert!(!signal.subscribe(Box::new(|_| {})));
        assert_eq!(signal.subscriber_count(), 0);
    }
}
