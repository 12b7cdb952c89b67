//! Listener lifetimes tied to component lifetimes
//!
//! Every listener or observer a component attaches is wrapped in a
//! [`Subscription`] whose detach routine runs exactly once: when the guard is
//! dropped, or earlier through [`Subscription::detach`]. Components keep their
//! subscriptions in a [`Subscriptions`] set and clear it on unmount.

use std::fmt;

/// RAII guard for one attached listener or observer
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// Guard with nothing to release
    pub fn noop() -> Self {
        Self { detach: None }
    }

    pub fn is_active(&self) -> bool {
        self.detach.is_some()
    }

    /// Release now instead of at drop
    pub fn detach(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Set of subscriptions owned by one component instance
#[derive(Debug, Default)]
pub struct Subscriptions {
    items: Vec<Subscription>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, subscription: Subscription) {
        self.items.push(subscription);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Detach everything, in reverse order of attachment
    pub fn clear(&mut self) {
        while let Some(subscription) = self.items.pop() {
            subscription.detach();
        }
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Fake listener host that counts live listeners

    use super::Subscription;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Default)]
    pub struct CountingHost {
        live: Rc<Cell<usize>>,
    }

    impl CountingHost {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn live(&self) -> usize {
            self.live.get()
        }

        pub fn listen(&self) -> Subscription {
            self.live.set(self.live.get() + 1);
            let live = self.live.clone();
            Subscription::new(move || live.set(live.get() - 1))
        }
    }
}
