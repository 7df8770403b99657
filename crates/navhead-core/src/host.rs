//! Host-side event channels using tokio::broadcast
//!
//! The host environment (viewport, router) owns a [`HostChannel`] per signal
//! source and publishes raw values into it. Headers attach listeners with
//! [`HostChannel::listen`] and drain them cooperatively.

use crate::subscription::Subscription;
use navhead_types::RouteId;
use tokio::sync::broadcast;

/// Raw vertical scroll offset in pixels
pub type ScrollOffset = f64;

/// Channel the host viewport publishes scroll offsets on
pub type ScrollSurface = HostChannel<ScrollOffset>;

/// Channel the host router publishes completed navigations on
pub type RouteSource = HostChannel<RouteId>;

/// Default channel capacity (256 events)
pub const DEFAULT_CAPACITY: usize = 256;

/// Broadcast publisher for one host signal source
///
/// Cloning shares the underlying channel.
pub struct HostChannel<T> {
    sender: broadcast::Sender<T>,
}

impl<T: Clone> HostChannel<T> {
    /// Create a channel retaining at most `capacity` undelivered values per listener
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Publish a value to every attached listener.
    ///
    /// Returns the number of listeners that will see it.
    pub fn publish(&self, value: T) -> usize {
        // No listeners attached is not an error for the host
        self.sender.send(value).unwrap_or(0)
    }

    /// Attach a listener. Released when the returned guard is dropped.
    pub fn listen(&self, name: &'static str) -> Subscription<T> {
        Subscription::attached(name, self.sender.subscribe())
    }

    /// Raw receiver for consumers that drain the channel themselves
    pub fn subscribe(&self) -> broadcast::Receiver<T> {
        self.sender.subscribe()
    }

    /// Number of listeners currently attached
    pub fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<T: Clone> Default for HostChannel<T> {
    fn default() -> Self {
        Self::default_capacity()
    }
}

impl<T> std::fmt::Debug for HostChannel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostChannel")
            .field("listeners", &self.sender.receiver_count())
            .finish()
    }
}

impl<T> Clone for HostChannel<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}
