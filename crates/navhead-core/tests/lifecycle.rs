//! Integration tests for listener acquisition and release

use navhead_core::types::{HeaderPhase, RouteId};
use navhead_core::{HeaderConfig, HeaderCoordinator, HeaderEvent, RouteSource, ScrollSurface};

#[test]
fn test_mount_attaches_both_listeners() {
    let surface = ScrollSurface::default_capacity();
    let routes = RouteSource::default_capacity();
    let header = HeaderCoordinator::mount(HeaderConfig::default(), Some(&surface), &routes);

    assert_eq!(surface.listener_count(), 1);
    assert_eq!(routes.listener_count(), 1);
    assert!(header.is_scroll_attached());
    assert!(header.is_route_attached());
}

#[test]
fn test_unmount_releases_listeners_once() {
    let surface = ScrollSurface::default_capacity();
    let routes = RouteSource::default_capacity();
    let mut header = HeaderCoordinator::mount(HeaderConfig::default(), Some(&surface), &routes);
    let mut rx = header.subscribe_events();

    assert!(header.unmount());
    assert!(!header.unmount());

    assert_eq!(surface.listener_count(), 0);
    assert_eq!(routes.listener_count(), 0);
    assert_eq!(rx.try_recv().unwrap(), HeaderEvent::Unmounted);
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_drop_releases_listeners() {
    let surface = ScrollSurface::default_capacity();
    let routes = RouteSource::default_capacity();
    {
        let _header = HeaderCoordinator::mount(HeaderConfig::default(), Some(&surface), &routes);
        assert_eq!(surface.listener_count(), 1);
    }
    assert_eq!(surface.listener_count(), 0);
    assert_eq!(routes.listener_count(), 0);
}

#[test]
fn test_events_after_unmount_are_not_delivered() {
    let surface = ScrollSurface::default_capacity();
    let routes = RouteSource::default_capacity();
    let mut header = HeaderCoordinator::mount(HeaderConfig::default(), Some(&surface), &routes);
    header.unmount();

    assert_eq!(surface.publish(500.0), 0);
    assert_eq!(routes.publish(RouteId::from("/about")), 0);
    assert_eq!(header.pump(), 0);
    assert_eq!(header.phase(), HeaderPhase::Hero);
}

#[test]
fn test_missing_scroll_surface_stays_hero() {
    let routes = RouteSource::default_capacity();
    let mut header = HeaderCoordinator::mount(HeaderConfig::default(), None, &routes);

    assert!(!header.is_scroll_attached());
    assert_eq!(header.pump(), 0);
    assert!(!header.is_scrolled());
    assert_eq!(header.phase(), HeaderPhase::Hero);
}

#[test]
fn test_headers_are_independent() {
    let surface = ScrollSurface::default_capacity();
    let routes = RouteSource::default_capacity();
    let mut first = HeaderCoordinator::mount(HeaderConfig::default(), Some(&surface), &routes);
    let mut second = HeaderCoordinator::mount(HeaderConfig::default(), Some(&surface), &routes);

    first.on_toggle_menu();
    surface.publish(90.0);
    first.pump();
    second.pump();

    assert_eq!(first.phase(), HeaderPhase::MenuOpen);
    assert_eq!(second.phase(), HeaderPhase::Scrolled);

    drop(first);
    assert_eq!(surface.listener_count(), 1);
}

#[test]
fn test_route_delivered_before_later_scroll() {
    let surface = ScrollSurface::default_capacity();
    let routes = RouteSource::default_capacity();
    let mut header = HeaderCoordinator::mount(HeaderConfig::default(), Some(&surface), &routes);
    let mut rx = header.subscribe_events();
    header.on_toggle_menu();
    let _ = rx.try_recv();

    routes.publish(RouteId::from("/about"));
    surface.publish(80.0);
    assert_eq!(header.pump(), 2);

    let causes: Vec<_> = std::iter::from_fn(|| rx.try_recv().ok())
        .filter_map(|event| match event {
            HeaderEvent::StateChanged { cause, .. } => Some(cause),
            _ => None,
        })
        .collect();
    assert_eq!(
        causes,
        vec![navhead_core::ChangeCause::Route, navhead_core::ChangeCause::Scroll]
    );
    assert_eq!(header.phase(), HeaderPhase::Scrolled);
}

#[test]
fn test_follow_through_router_closes_and_routes() {
    let surface = ScrollSurface::default_capacity();
    let mut routes = RouteSource::default_capacity();
    let mut header = HeaderCoordinator::mount(HeaderConfig::default(), Some(&surface), &routes);

    header.on_toggle_menu();
    assert!(header.activate_link(0, &mut routes));
    assert!(!header.is_open());

    header.pump();
    assert_eq!(header.route(), &RouteId::from("/properties"));
    assert!(header.is_active(&header.links()[0].clone()));
}

#[test]
fn test_route_round_trip_lost_to_lag_still_closes_menu() {
    let config = HeaderConfig {
        event_capacity: 1,
        ..Default::default()
    };
    config.validate().unwrap();
    let surface = ScrollSurface::new(config.event_capacity);
    let routes = RouteSource::new(config.event_capacity);
    let mut header = HeaderCoordinator::mount(config, Some(&surface), &routes);

    header.on_toggle_menu();
    let mut rx = header.subscribe_events();
    routes.publish(RouteId::from("/about"));
    routes.publish(RouteId::root());

    assert_eq!(header.pump(), 1);
    assert!(!header.is_open());
    assert_eq!(header.route(), &RouteId::root());

    assert!(matches!(
        rx.try_recv().unwrap(),
        HeaderEvent::StateChanged {
            cause: navhead_core::ChangeCause::Route,
            ..
        }
    ));
}
