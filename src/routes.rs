//! Client-side route table.
//!
//! A declarative mapping from URL path patterns to pages, consulted by
//! the navigation layer in [`crate::app`]. Matching is purely
//! structural: no auth guard, no redirects, and no catch-all entry. An
//! unknown path resolves to nothing and the caller decides what that
//! means. Paths are plain history-mode paths, never hash fragments.

use std::collections::HashMap;

/// Pages reachable through the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Players,
    PlayerDetail,
    Games,
    GameDetail,
    Stats,
}

/// One row of the route table: a path pattern and the page it serves.
///
/// Pattern segments starting with `:` bind the corresponding URL segment
/// as a named parameter.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub pattern: &'static str,
    pub page: Page,
}

/// The full route table, in match order.
pub const ROUTES: [Route; 7] = [
    Route {
        pattern: "/",
        page: Page::Home,
    },
    Route {
        pattern: "/login",
        page: Page::Login,
    },
    Route {
        pattern: "/players",
        page: Page::Players,
    },
    Route {
        pattern: "/players/:id",
        page: Page::PlayerDetail,
    },
    Route {
        pattern: "/games",
        page: Page::Games,
    },
    Route {
        pattern: "/games/:id",
        page: Page::GameDetail,
    },
    Route {
        pattern: "/stats",
        page: Page::Stats,
    },
];

/// A successful match: the page plus any bound pattern parameters.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    pub page: Page,
    pub params: HashMap<&'static str, String>,
}

impl RouteMatch {
    /// The `:id` parameter parsed as a numeric id, when bound and numeric.
    pub fn id(&self) -> Option<i64> {
        self.params.get("id").and_then(|raw| raw.parse().ok())
    }
}

/// Resolves a path against the route table.
///
/// Query strings and fragments are ignored for matching, and a trailing
/// slash is tolerated. Returns `None` for anything the table does not
/// name.
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let path = path
        .split_once(['?', '#'])
        .map_or(path, |(before, _)| before);
    ROUTES.iter().find_map(|route| match_route(route, path))
}

fn match_route(route: &Route, path: &str) -> Option<RouteMatch> {
    let pattern_segments = segments(route.pattern);
    let path_segments = segments(path);

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (pattern_segment, path_segment) in pattern_segments.iter().zip(&path_segments) {
        if let Some(name) = pattern_segment.strip_prefix(':') {
            params.insert(name, (*path_segment).to_string());
        } else if pattern_segment != path_segment {
            return None;
        }
    }

    Some(RouteMatch {
        page: route.page,
        params,
    })
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}
