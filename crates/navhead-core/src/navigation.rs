//! Navigation trigger
//!
//! The header never routes by itself. It asks a [`Navigator`] to go somewhere
//! and learns about completion later, through the route signal.

use crate::host::RouteSource;
use navhead_types::RouteId;

/// Something that can start a navigation to a route path
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// A router that completes every navigation immediately by publishing the
/// new route on its source.
impl Navigator for RouteSource {
    fn navigate(&mut self, path: &str) {
        self.publish(RouteId::from(path));
    }
}

/// Records requested paths without navigating
#[derive(Debug, Default, Clone)]
pub struct NavigationLog {
    pub requested: Vec<String>,
}

impl Navigator for NavigationLog {
    fn navigate(&mut self, path: &str) {
        self.requested.push(path.to_string());
    }
}
