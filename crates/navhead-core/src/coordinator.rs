//! Header coordinator: the single owner of header state
//!
//! Scroll edges, menu toggles and route changes are all serialized through
//! one `&mut HeaderCoordinator`, so they can never interleave. The visual
//! theme is resolved from the current flags on every read and every change;
//! nothing caches it.
//!
//! ```text
//!            scroll > threshold
//!     Hero ───────────────────────► Scrolled
//!      ▲  ◄───────────────────────   ▲
//!      │     scroll <= threshold      │
//!      │                              │
//!      │ toggle / route               │ toggle / route
//!      │ (scrolled = false)           │ (scrolled = true)
//!      │                              │
//!      └────────── MenuOpen ──────────┘
//!                     ▲
//!         toggle from Hero or Scrolled
//! ```

use crate::config::HeaderConfig;
use crate::event::{ChangeCause, HeaderEvent, HeaderEventBus};
use crate::host::{RouteSource, ScrollOffset, ScrollSurface};
use crate::menu::MenuState;
use crate::navigation::Navigator;
use crate::route::{RouteSignal, RouteSubscription};
use crate::scroll::{ScrollSignal, ScrollSubscription};
use crate::theme;
use navhead_types::{
    AccentTheme, Brand, HeaderPhase, HeaderState, LinkView, NavLink, RouteId, VisualTheme,
};
use tokio::sync::broadcast;
use tracing::{debug, info, trace};

/// Coordinates the three header signals for one mounted header
#[derive(Debug)]
pub struct HeaderCoordinator {
    config: HeaderConfig,
    menu: MenuState,
    scroll: ScrollSubscription,
    routes: RouteSubscription,
    events: HeaderEventBus,
    revision: u64,
    mounted: bool,
}

impl HeaderCoordinator {
    /// A header with no host sources attached. State only moves through the
    /// direct entry points.
    pub fn new(config: HeaderConfig) -> Self {
        let scroll = ScrollSignal::subscribe(config.scroll_threshold_px, None);
        let routes = RouteSignal::detached(config.initial_route.clone());
        Self::assemble(config, scroll, routes)
    }

    /// Mount a header, attaching listeners to the host scroll surface (if the
    /// host has one) and to the router.
    ///
    /// Listeners are released by [`unmount`](Self::unmount) or when the
    /// coordinator is dropped.
    pub fn mount(
        config: HeaderConfig,
        surface: Option<&ScrollSurface>,
        routes: &RouteSource,
    ) -> Self {
        let scroll = ScrollSignal::subscribe(config.scroll_threshold_px, surface);
        let routes = RouteSignal::subscribe(config.initial_route.clone(), routes);
        info!(
            scroll_attached = scroll.is_attached(),
            links = config.links.len(),
            "header mounted"
        );
        Self::assemble(config, scroll, routes)
    }

    fn assemble(config: HeaderConfig, scroll: ScrollSubscription, routes: RouteSubscription) -> Self {
        let events = HeaderEventBus::new(config.event_capacity);
        Self {
            config,
            menu: MenuState::new(),
            scroll,
            routes,
            events,
            revision: 0,
            mounted: true,
        }
    }

    // ===================
    // Entry points
    // ===================

    /// Raw scroll offset from the host. Only threshold crossings change state.
    pub fn on_scroll(&mut self, offset: ScrollOffset) {
        if !self.mounted {
            return;
        }
        if let Some(edge) = self.scroll.observe(offset) {
            self.scrolled_changed(edge);
        }
    }

    /// User pressed the menu toggle.
    pub fn on_toggle_menu(&mut self) {
        if !self.mounted {
            return;
        }
        self.menu.toggle();
        self.changed(ChangeCause::Toggle);
    }

    /// Force the menu closed. No-op (and no event) when already closed.
    pub fn close_menu(&mut self) {
        if !self.mounted {
            return;
        }
        if self.menu.close() {
            self.changed(ChangeCause::Close);
        }
    }

    /// Router reported a route. Repeats of the current route are ignored;
    /// a real transition always leaves the menu closed.
    pub fn on_route_change(&mut self, route: impl Into<RouteId>) {
        if !self.mounted {
            return;
        }
        if self.routes.observe(route.into()).is_some() {
            self.route_changed();
        }
    }

    /// Deliver everything the host queued since the last pump.
    ///
    /// Routes are delivered before scroll edges. Since the scroll flag never
    /// depends on menu or route, this yields the same state as any
    /// interleaving. Returns the number of state-changing notifications.
    pub fn pump(&mut self) -> usize {
        if !self.mounted {
            return 0;
        }

        let mut handled = 0;
        while self.routes.next_change().is_some() {
            self.route_changed();
            handled += 1;
        }
        while let Some(edge) = self.scroll.next_edge() {
            self.scrolled_changed(edge);
            handled += 1;
        }
        trace!(handled, "pumped host events");
        handled
    }

    /// Tear down: release both host listeners. Idempotent.
    ///
    /// Returns `true` on the first call only. Entry points become no-ops.
    pub fn unmount(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        self.mounted = false;
        self.scroll.unsubscribe();
        self.routes.unsubscribe();
        self.events.publish(HeaderEvent::Unmounted);
        info!(revision = self.revision, "header unmounted");
        true
    }

    // ===================
    // Navigation triggers
    // ===================

    /// Close the menu, then ask the navigator to go to `path`.
    ///
    /// The route itself only changes once the router reports completion.
    pub fn follow(&mut self, path: &str, navigator: &mut impl Navigator) {
        if !self.mounted {
            return;
        }
        self.close_menu();
        debug!(path, "navigation requested");
        self.events
            .publish(HeaderEvent::NavigationRequested(path.to_string()));
        navigator.navigate(path);
    }

    /// Follow the link at `index`. Returns `false` if there is no such link.
    pub fn activate_link(&mut self, index: usize, navigator: &mut impl Navigator) -> bool {
        let Some(path) = self.config.links.get(index).map(|link| link.path.clone()) else {
            return false;
        };
        self.follow(&path, navigator);
        true
    }

    /// Follow the call-to-action. Returns `false` if none is configured.
    pub fn activate_call_to_action(&mut self, navigator: &mut impl Navigator) -> bool {
        let Some(path) = self.config.call_to_action.as_ref().map(|cta| cta.path.clone()) else {
            return false;
        };
        self.follow(&path, navigator);
        true
    }

    /// Follow the brand link to the home path.
    pub fn activate_brand(&mut self, navigator: &mut impl Navigator) {
        let path = self.config.brand.home_path.clone();
        self.follow(&path, navigator);
    }

    // ===================
    // Reads
    // ===================

    pub fn state(&self) -> HeaderState {
        HeaderState {
            scrolled: self.scroll.is_past(),
            menu_open: self.menu.is_open(),
            route: self.routes.current().clone(),
        }
    }

    pub fn phase(&self) -> HeaderPhase {
        self.state().phase()
    }

    /// Theme for the current state, resolved on every call
    pub fn theme(&self) -> VisualTheme {
        theme::resolve(self.scroll.is_past(), self.menu.is_open())
    }

    pub fn accents(&self) -> AccentTheme {
        theme::resolve_accents(self.scroll.is_past())
    }

    pub fn is_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll.is_past()
    }

    pub fn route(&self) -> &RouteId {
        self.routes.current()
    }

    pub fn is_active(&self, link: &NavLink) -> bool {
        link.is_active(self.routes.current())
    }

    pub fn links(&self) -> &[NavLink] {
        &self.config.links
    }

    /// Links with their active flag for the current route
    pub fn link_views(&self) -> Vec<LinkView> {
        self.config
            .links
            .iter()
            .map(|link| LinkView {
                active: self.is_active(link),
                link: link.clone(),
            })
            .collect()
    }

    pub fn call_to_action(&self) -> Option<&NavLink> {
        self.config.call_to_action.as_ref()
    }

    pub fn brand(&self) -> &Brand {
        &self.config.brand
    }

    /// Number of state changes so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the host scroll listener is attached
    pub fn is_scroll_attached(&self) -> bool {
        self.scroll.is_attached()
    }

    pub fn is_route_attached(&self) -> bool {
        self.routes.is_attached()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<HeaderEvent> {
        self.events.subscribe()
    }

    // ===================
    // Transitions
    // ===================

    fn scrolled_changed(&mut self, scrolled: bool) {
        debug!(scrolled, menu_open = self.menu.is_open(), "scroll flag changed");
        self.changed(ChangeCause::Scroll);
    }

    fn route_changed(&mut self) {
        // Menu must never survive a route transition
        self.menu.close();
        self.changed(ChangeCause::Route);
    }

    fn changed(&mut self, cause: ChangeCause) {
        self.revision += 1;
        let state = self.state();
        let theme = theme::resolve_state(&state);
        debug!(
            ?cause,
            phase = %state.phase(),
            route = %state.route,
            revision = self.revision,
            "header state changed"
        );
        self.events.publish(HeaderEvent::StateChanged {
            state,
            theme,
            cause,
            revision: self.revision,
        });
    }
}

impl Default for HeaderCoordinator {
    fn default() -> Self {
        Self::new(HeaderConfig::default())
    }
}
