//! Scroll signal: edge-triggered "past threshold" flag
//!
//! Raw scroll events arrive at a high rate; only crossings of the threshold
//! matter to the header. [`ScrollSignal`] collapses the raw offset stream into
//! edges, and [`ScrollSubscription`] binds one to a host [`ScrollSurface`].

use crate::host::{ScrollOffset, ScrollSurface};
use crate::subscription::Subscription;
use tracing::{debug, trace, warn};

/// Offset (px) past which the header switches to its solid treatment
pub const DEFAULT_THRESHOLD_PX: f64 = 50.0;

/// Edge detector over raw scroll offsets
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSignal {
    threshold_px: f64,
    past: bool,
}

impl ScrollSignal {
    /// Starts below the threshold.
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            past: false,
        }
    }

    /// Current flag, `false` until an offset strictly greater than the threshold is seen
    pub fn is_past(&self) -> bool {
        self.past
    }

    /// Feed one raw offset. Returns the new flag only when it flips.
    ///
    /// Non-finite offsets are ignored.
    pub fn observe(&mut self, offset: ScrollOffset) -> Option<bool> {
        if !offset.is_finite() {
            warn!(offset, "ignoring non-finite scroll offset");
            return None;
        }

        let past = offset > self.threshold_px;
        if past == self.past {
            trace!(offset, past, "scroll offset without crossing");
            return None;
        }

        debug!(offset, threshold = self.threshold_px, past, "scroll threshold crossed");
        self.past = past;
        Some(past)
    }

    /// Attach to a host scroll surface.
    ///
    /// Without a surface the subscription is detached: it never fires and the
    /// flag stays `false`.
    pub fn subscribe(threshold_px: f64, surface: Option<&ScrollSurface>) -> ScrollSubscription {
        let feed = match surface {
            Some(surface) => surface.listen("scroll"),
            None => Subscription::detached("scroll"),
        };
        ScrollSubscription {
            signal: Self::new(threshold_px),
            feed,
        }
    }
}

impl Default for ScrollSignal {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD_PX)
    }
}

/// A [`ScrollSignal`] bound to a host surface
#[derive(Debug)]
pub struct ScrollSubscription {
    signal: ScrollSignal,
    feed: Subscription<ScrollOffset>,
}

impl ScrollSubscription {
    pub fn is_past(&self) -> bool {
        self.signal.is_past()
    }

    /// Whether the host listener is still attached
    pub fn is_attached(&self) -> bool {
        self.feed.is_active()
    }

    /// Feed an offset directly, bypassing the host channel
    pub fn observe(&mut self, offset: ScrollOffset) -> Option<bool> {
        self.signal.observe(offset)
    }

    /// Drain queued offsets until the next edge.
    pub fn next_edge(&mut self) -> Option<bool> {
        while let Some(offset) = self.feed.try_next() {
            if let Some(edge) = self.signal.observe(offset) {
                return Some(edge);
            }
        }
        None
    }

    /// Drain every queued offset, calling `on_change` once per edge.
    ///
    /// Returns the number of edges reported.
    pub fn drain(&mut self, mut on_change: impl FnMut(bool)) -> usize {
        let mut edges = 0;
        while let Some(edge) = self.next_edge() {
            on_change(edge);
            edges += 1;
        }
        edges
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
    fn test_edges_only_on_crossings() {
        let mut signal = ScrollSignal::new(50.0);
        let edges: Vec<bool> = [0.0, 10.0, 20.0, 50.0, 51.0, 49.0]
            .into_iter()
            .filter_map(|offset| signal.observe(offset))
            .collect();

        assert_eq!(edges, vec![true, false]);
    }

    #[test]
    fn test_threshold_itself_is_not_past() {
        let mut signal = ScrollSignal::new(50.0);
        assert_eq!(signal.observe(50.0), None);
        assert!(!signal.is_past());
    }

    #[test]
    fn test_non_finite_offsets_ignored() {
        let mut signal = ScrollSignal::new(50.0);
        assert_eq!(signal.observe(f64::NAN), None);
        assert_eq!(signal.observe(f64::INFINITY), None);
        assert!(!signal.is_past());

        signal.observe(120.0);
        assert_eq!(signal.observe(f64::NAN), None);
        assert!(signal.is_past());
    }

    #[test]
    fn test_negative_overscroll_is_below() {
        let mut signal = ScrollSignal::new(0.0);
        assert_eq!(signal.observe(-30.0), None);
        assert_eq!(signal.observe(1.0), Some(true));
        assert_eq!(signal.observe(-5.0), Some(false));
    }

    #[test]
    fn test_detached_subscription_never_fires() {
        let mut sub = ScrollSignal::subscribe(50.0, None);
        assert!(!sub.is_attached());
        assert_eq!(sub.drain(|_| panic!("detached signal fired")), 0);
        assert!(!sub.is_past());
    }

    #[test]
    fn test_drain_reports_edges_from_surface() {
        let surface = ScrollSurface::default_capacity();
        let mut sub = ScrollSignal::subscribe(50.0, Some(&surface));
        for offset in [0.0, 10.0, 20.0, 50.0, 51.0, 49.0] {
            surface.publish(offset);
        }

        let mut seen = Vec::new();
        let count = sub.drain(|edge| seen.push(edge));

        assert_eq!(count, 2);
        assert_eq!(seen, vec![true, false]);
    }

    #[test]
    fn test_unsubscribe_detaches_from_surface() {
        let surface = ScrollSurface::default_capacity();
        let mut sub = ScrollSignal::subscribe(50.0, Some(&surface));
        assert_eq!(surface.listener_count(), 1);

        assert!(sub.unsubscribe());
        assert!(!sub.unsubscribe());
        assert_eq!(surface.listener_count(), 0);

        surface.publish(500.0);
        assert_eq!(sub.next_edge(), None);
        assert!(!sub.is_past());
    }
}
