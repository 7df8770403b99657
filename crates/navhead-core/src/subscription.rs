//! Scoped listener guard
//!
//! A [`Subscription`] owns one receiver on a host channel. The listener is
//! released when the guard is dropped or explicitly unsubscribed, whichever
//! comes first; releasing twice is a no-op.

use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, info, warn};

/// Listener on a [`HostChannel`](crate::host::HostChannel)
pub struct Subscription<T: Clone> {
    name: &'static str,
    receiver: Option<broadcast::Receiver<T>>,
    lagged: bool,
}

impl<T: Clone> Subscription<T> {
    pub(crate) fn attached(name: &'static str, receiver: broadcast::Receiver<T>) -> Self {
        info!(listener = name, "listener attached");
        Self {
            name,
            receiver: Some(receiver),
            lagged: false,
        }
    }

    /// A subscription with no source behind it. Never yields anything.
    pub fn detached(name: &'static str) -> Self {
        debug!(listener = name, "no host source, listener stays detached");
        Self {
            name,
            receiver: None,
            lagged: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether a host listener is still held
    pub fn is_active(&self) -> bool {
        self.receiver.is_some()
    }

    /// Next pending value, without blocking.
    ///
    /// A lagging listener skips the overwritten values and continues with the
    /// oldest one still retained; the newest value is never lost. The skip is
    /// recorded and reported once by [`take_lagged`](Self::take_lagged). A
    /// closed channel releases the listener.
    pub fn try_next(&mut self) -> Option<T> {
        loop {
            let receiver = self.receiver.as_mut()?;
            match receiver.try_recv() {
                Ok(value) => return Some(value),
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(listener = self.name, skipped, "listener lagged, dropping stale events");
                    self.lagged = true;
                }
                Err(TryRecvError::Closed) => {
                    debug!(listener = self.name, "host source closed");
                    self.receiver = None;
                    return None;
                }
            }
        }
    }

    /// Whether values were skipped since the last call. Clears the flag.
    pub fn take_lagged(&mut self) -> bool {
        std::mem::take(&mut self.lagged)
    }

    /// Release the listener.
    ///
    /// Returns `true` if this call released it, `false` if it was already released.
    pub fn unsubscribe(&mut self) -> bool {
        match self.receiver.take() {
            Some(_) => {
                info!(listener = self.name, "listener released");
                true
            }
            None => false,
        }
    }
}

impl<T: Clone> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl<T: Clone> std::fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("name", &self.name)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::host::HostChannel;

    #[test]
    fn test_unsubscribe_twice_is_noop() {
        let channel = HostChannel::<u32>::default_capacity();
        let mut sub = channel.listen("test");

        assert!(sub.unsubscribe());
        assert!(!sub.unsubscribe());
        assert!(!sub.is_active());
        assert_eq!(channel.listener_count(), 0);
    }

    #[test]
    fn test_released_listener_yields_nothing() {
        let channel = HostChannel::<u32>::default_capacity();
        let mut sub = channel.listen("test");
        channel.publish(1);
        sub.unsubscribe();

        assert_eq!(sub.try_next(), None);
    }

    #[test]
    fn test_lagged_listener_keeps_newest() {
        let channel = HostChannel::<u32>::new(2);
        let mut sub = channel.listen("test");
        for value in 0..5 {
            channel.publish(value);
        }

        let drained: Vec<u32> = std::iter::from_fn(|| sub.try_next()).collect();
        assert_eq!(drained, vec![3, 4]);
        assert!(sub.is_active());
        assert!(sub.take_lagged());
        assert!(!sub.take_lagged());
    }

    #[test]
    fn test_in_step_listener_never_lags() {
        let channel = HostChannel::<u32>::new(2);
        let mut sub = channel.listen("test");
        channel.publish(1);
        channel.publish(2);

        assert_eq!(sub.try_next(), Some(1));
        assert_eq!(sub.try_next(), Some(2));
        assert!(!sub.take_lagged());
    }

    #[test]
    fn test_closed_source_releases_after_draining() {
        let channel = HostChannel::<u32>::default_capacity();
        let mut sub = channel.listen("test");
        channel.publish(7);
        drop(channel);

        assert_eq!(sub.try_next(), Some(7));
        assert_eq!(sub.try_next(), None);
        assert!(!sub.is_active());
    }

    #[test]
    fn test_detached_never_yields() {
        let mut sub = super::Subscription::<u32>::detached("none");
        assert!(!sub.is_active());
        assert_eq!(sub.try_next(), None);
        assert!(!sub.unsubscribe());
    }
}
