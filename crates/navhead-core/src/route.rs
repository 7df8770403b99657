//! Route signal: distinct route transitions
//!
//! Routers may notify more than once for the same location. [`RouteSignal`]
//! compares every notification against the last known route and reports only
//! real transitions.

use crate::host::RouteSource;
use crate::subscription::Subscription;
use navhead_types::RouteId;
use tracing::{debug, trace};

/// Tracks the current route and filters repeated notifications
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteSignal {
    current: RouteId,
}

impl RouteSignal {
    pub fn new(initial: RouteId) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> &RouteId {
        &self.current
    }

    /// Feed one notification. Returns the new route only if it differs from the current one.
    pub fn observe(&mut self, route: RouteId) -> Option<&RouteId> {
        if route == self.current {
            trace!(route = %route, "duplicate route notification suppressed");
            return None;
        }

        debug!(from = %self.current, to = %route, "route changed");
        self.current = route;
        Some(&self.current)
    }

    /// Adopt `route` as current without comparing. Used when notifications
    /// were lost and a transition may have happened in between.
    pub fn resync(&mut self, route: RouteId) -> &RouteId {
        debug!(from = %self.current, to = %route, "route resynced after lost notifications");
        self.current = route;
        &self.current
    }

    /// Attach to the host router's route source.
    pub fn subscribe(initial: RouteId, source: &RouteSource) -> RouteSubscription {
        RouteSubscription {
            signal: Self::new(initial),
            feed: source.listen("route"),
        }
    }

    /// A signal with no router behind it; only direct observations move it.
    pub fn detached(initial: RouteId) -> RouteSubscription {
        RouteSubscription {
            signal: Self::new(initial),
            feed: Subscription::detached("route"),
        }
    }
}

/// A [`RouteSignal`] bound to a host route source
#[derive(Debug)]
pub struct RouteSubscription {
    signal: RouteSignal,
    feed: Subscription<RouteId>,
}

impl RouteSubscription {
    pub fn current(&self) -> &RouteId {
        self.signal.current()
    }

    pub fn is_attached(&self) -> bool {
        self.feed.is_active()
    }

    /// Feed a notification directly, bypassing the host channel
    pub fn observe(&mut self, route: RouteId) -> Option<&RouteId> {
        self.signal.observe(route)
    }

    /// Drain queued notifications until the next distinct route.
    ///
    /// If the listener lagged, the skipped notifications may have left the
    /// current route and come back, so the first retained route counts as a
    /// transition even when it equals the current one.
    pub fn next_change(&mut self) -> Option<RouteId> {
        while let Some(route) = self.feed.try_next() {
            if self.feed.take_lagged() {
                return Some(self.signal.resync(route).clone());
            }
            if let Some(changed) = self.signal.observe(route) {
                return Some(changed.clone());
            }
        }
        None
    }

    /// Drain every queued notification, calling `handler` once per distinct transition.
    pub fn drain(&mut self, mut handler: impl FnMut(&RouteId)) -> usize {
        let mut changes = 0;
        while let Some(route) = self.next_change() {
            handler(&route);
            changes += 1;
        }
        changes
    }

    /// Release the host listener. Idempotent.
    pub fn unsubscribe(&mut self) -> bool {
        self.feed.unsubscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_notifications_suppressed() {
        let mut signal = RouteSignal::new(RouteId::root());
        assert!(signal.observe(RouteId::from("/")).is_none());
        assert_eq!(signal.observe(RouteId::from("/about")).cloned(), Some(RouteId::from("/about")));
        assert!(signal.observe(RouteId::from("/about")).is_none());
    }

    #[test]
    fn test_drain_once_per_distinct_transition() {
        let source = RouteSource::default_capacity();
        let mut sub = RouteSignal::subscribe(RouteId::root(), &source);
        for path in ["/", "/about", "/about", "/contact", "/about"] {
            source.publish(RouteId::from(path));
        }

        let mut seen = Vec::new();
        let count = sub.drain(|route| seen.push(route.to_string()));

        assert_eq!(count, 3);
        assert_eq!(seen, vec!["/about", "/contact", "/about"]);
        assert_eq!(sub.current(), &RouteId::from("/about"));
    }

    #[test]
    fn test_direct_observation_keeps_channel_in_sync() {
        let source = RouteSource::default_capacity();
        let mut sub = RouteSignal::subscribe(RouteId::root(), &source);

        sub.observe(RouteId::from("/about"));
        source.publish(RouteId::from("/"));

        assert_eq!(sub.next_change(), Some(RouteId::root()));
    }

    #[test]
    fn test_lost_notifications_count_as_transition() {
        let source = RouteSource::new(1);
        let mut sub = RouteSignal::subscribe(RouteId::root(), &source);
        source.publish(RouteId::from("/about"));
        source.publish(RouteId::from("/"));

        assert_eq!(sub.next_change(), Some(RouteId::root()));
        assert_eq!(sub.next_change(), None);
    }

    #[test]
    fn test_detached_route_signal() {
        let mut sub = RouteSignal::detached(RouteId::from("/properties"));
        assert!(!sub.is_attached());
        assert_eq!(sub.next_change(), None);
        assert!(!sub.unsubscribe());
    }
}
