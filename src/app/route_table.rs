//! Declarative route descriptors
//!
//! [`ROUTES`] describes the same table as the [`Route`](crate::app::routes::Route)
//! enum in data form: paths per level, names, views, how each view is loaded
//! and nested children. It is validated at startup and used for introspection.

use std::borrow::Cow;
use std::collections::HashSet;

use crate::app::routes::{RouteName, View};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::log_route_table_valid;

/// How a view is brought in when its route is first visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewLoading {
    Eager,
    /// May suspend on first render; the app-level suspense boundary shows a
    /// loading state until it resolves
    Deferred,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRecord {
    /// Pattern relative to the parent level; empty marks the default child
    pub path: &'static str,
    pub name: Option<RouteName>,
    pub view: View,
    pub loading: ViewLoading,
    pub children: &'static [RouteRecord],
}

pub static ROUTES: &[RouteRecord] = &[
    RouteRecord {
        path: "/",
        name: Some(RouteName::Home),
        view: View::Home,
        loading: ViewLoading::Eager,
        children: &[],
    },
    RouteRecord {
        path: "/chat",
        name: Some(RouteName::Chat),
        view: View::ChatLayout,
        loading: ViewLoading::Deferred,
        children: &[RouteRecord {
            path: "",
            name: None,
            view: View::ChatWindow,
            loading: ViewLoading::Eager,
            children: &[],
        }],
    },
    RouteRecord {
        path: "/:..segments",
        name: Some(RouteName::NotFound),
        view: View::PageNotFound,
        loading: ViewLoading::Eager,
        children: &[],
    },
];

impl RouteRecord {
    fn segments(&self) -> Vec<&'static str> {
        self.path.split('/').filter(|s| !s.is_empty()).collect()
    }

    fn is_catch_all(&self) -> bool {
        self.segments().last().is_some_and(|s| s.starts_with(":.."))
    }
}

/// Check path uniqueness per level and name uniqueness across the table
pub fn validate_routes(records: &[RouteRecord]) -> Result<()> {
    let mut names = HashSet::new();
    validate_level(records, &mut names)?;
    log_route_table_valid(count_records(records), leaf_paths(records).len());
    Ok(())
}

fn validate_level(records: &[RouteRecord], names: &mut HashSet<RouteName>) -> Result<()> {
    let mut paths = HashSet::new();
    for record in records {
        let key = record.segments().join("/");
        if !paths.insert(key) {
            return Err(AppError::DuplicatePath(record.path.to_string()));
        }
        if let Some(name) = record.name {
            if !names.insert(name) {
                return Err(AppError::DuplicateName(name.to_string()));
            }
        }
        validate_level(record.children, names)?;
    }
    Ok(())
}

fn count_records(records: &[RouteRecord]) -> usize {
    records
        .iter()
        .map(|r| 1 + count_records(r.children))
        .sum()
}

/// Chain of records, top level first, that renders `path`
///
/// Segments are percent-decoded before comparison, as the router does.
pub fn match_path<'a>(records: &'a [RouteRecord], path: &str) -> Option<Vec<&'a RouteRecord>> {
    let normalized = crate::app::routes::normalize_path(path);
    let segments: Vec<String> = normalized
        .split('/')
        .filter(|s| !s.is_empty())
        .map(decode_segment)
        .collect();
    match_level(records, &segments)
}

/// Percent-decode one segment; undecodable input is compared as-is
fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| segment.to_string())
}

fn match_level<'a>(records: &'a [RouteRecord], segments: &[String]) -> Option<Vec<&'a RouteRecord>> {
    for record in records {
        let pattern = record.segments();

        if record.is_catch_all() {
            let prefix = &pattern[..pattern.len() - 1];
            if segments.len() >= prefix.len() && segments_match(prefix, &segments[..prefix.len()]) {
                return Some(vec![record]);
            }
            continue;
        }

        if segments.len() < pattern.len() || !segments_match(&pattern, &segments[..pattern.len()]) {
            continue;
        }
        let rest = &segments[pattern.len()..];

        if record.children.is_empty() {
            if rest.is_empty() {
                return Some(vec![record]);
            }
        } else if let Some(mut chain) = match_level(record.children, rest) {
            chain.insert(0, record);
            return Some(chain);
        }
    }
    None
}

fn segments_match(pattern: &[&str], segments: &[String]) -> bool {
    pattern
        .iter()
        .zip(segments)
        .all(|(p, s)| p.starts_with(':') || *p == s.as_str())
}

/// Every concrete full path that renders a leaf view
pub fn leaf_paths(records: &[RouteRecord]) -> Vec<String> {
    let mut paths = Vec::new();
    collect_leaf_paths(records, "", &mut paths);
    paths
}

fn collect_leaf_paths(records: &[RouteRecord], parent: &str, out: &mut Vec<String>) {
    for record in records {
        if record.is_catch_all() {
            continue;
        }
        let full = join_paths(parent, record.path);
        if record.children.is_empty() {
            out.push(full);
        } else {
            collect_leaf_paths(record.children, &full, out);
        }
    }
}

fn join_paths(parent: &str, child: &str) -> String {
    let parent = parent.trim_end_matches('/');
    let child = child.trim_start_matches('/');
    match (parent.is_empty(), child.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{child}"),
        (false, true) => parent.to_string(),
        (false, false) => format!("{parent}/{child}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::routes::resolve;

    fn views(chain: &[&RouteRecord]) -> Vec<View> {
        chain.iter().map(|r| r.view).collect()
    }

    #[test]
    fn test_shipped_table_is_valid() {
        assert!(validate_routes(ROUTES).is_ok());
    }

    #[test]
    fn test_duplicate_path_at_same_level() {
        static TABLE: &[RouteRecord] = &[
            RouteRecord { path: "/chat", name: None, view: View::ChatWindow, loading: ViewLoading::Eager, children: &[] },
            RouteRecord { path: "/chat/", name: None, view: View::Home, loading: ViewLoading::Eager, children: &[] },
        ];
        assert_eq!(
            validate_routes(TABLE),
            Err(AppError::DuplicatePath("/chat/".to_string()))
        );
    }

    #[test]
    fn test_same_path_on_different_levels_is_allowed() {
        static TABLE: &[RouteRecord] = &[RouteRecord {
            path: "/",
            name: None,
            view: View::ChatLayout,
            loading: ViewLoading::Eager,
            children: &[RouteRecord { path: "/", name: None, view: View::Home, loading: ViewLoading::Eager, children: &[] }],
        }];
        assert!(validate_routes(TABLE).is_ok());
    }

    #[test]
    fn test_duplicate_name_across_levels() {
        static TABLE: &[RouteRecord] = &[RouteRecord {
            path: "/chat",
            name: Some(RouteName::Chat),
            view: View::ChatLayout,
            loading: ViewLoading::Eager,
            children: &[RouteRecord {
                path: "",
                name: Some(RouteName::Chat),
                view: View::ChatWindow,
                loading: ViewLoading::Eager,
                children: &[],
            }],
        }];
        assert_eq!(
            validate_routes(TABLE),
            Err(AppError::DuplicateName("Chat".to_string()))
        );
    }

    #[test]
    fn test_match_root_and_chat() {
        let chain = match_path(ROUTES, "/").unwrap();
        assert_eq!(views(&chain), vec![View::Home]);
        assert_eq!(chain[0].name, Some(RouteName::Home));

        let chain = match_path(ROUTES, "/chat").unwrap();
        assert_eq!(views(&chain), vec![View::ChatLayout, View::ChatWindow]);
        assert_eq!(chain[0].loading, ViewLoading::Deferred);
        assert_eq!(chain[1].name, None);
    }

    #[test]
    fn test_match_falls_through_to_catch_all() {
        let chain = match_path(ROUTES, "/chat/history").unwrap();
        assert_eq!(views(&chain), vec![View::PageNotFound]);
    }

    #[test]
    fn test_no_match_without_catch_all() {
        assert!(match_path(&ROUTES[..2], "/missing").is_none());
        // A parent with children only matches through a child
        static TABLE: &[RouteRecord] = &[RouteRecord {
            path: "/chat",
            name: None,
            view: View::ChatLayout,
            loading: ViewLoading::Eager,
            children: &[RouteRecord { path: "room", name: None, view: View::ChatWindow, loading: ViewLoading::Eager, children: &[] }],
        }];
        assert!(match_path(TABLE, "/chat").is_none());
        assert!(match_path(TABLE, "/chat/room").is_some());
    }

    #[test]
    fn test_leaf_paths() {
        assert_eq!(leaf_paths(ROUTES), vec!["/".to_string(), "/chat".to_string()]);
    }

    #[test]
    fn test_table_agrees_with_router() {
        let mut paths = leaf_paths(ROUTES);
        paths.extend(
            [
                "",
                "///",
                "/chat/",
                "//chat",
                "/chat//",
                "chat",
                "/%63hat",
                "/chat?draft=1#end",
                "/chat/extra",
                "//chat//extra",
                "/missing",
                "/a/b/c",
            ]
            .map(String::from),
        );

        for path in paths {
            let chain = match_path(ROUTES, &path).unwrap();
            let resolved = resolve(&path).unwrap();
            assert_eq!(views(&chain), resolved.views, "path {path:?}");

            let named = chain.iter().rev().find_map(|r| r.name).unwrap();
            assert_eq!(named, resolved.route.name(), "path {path:?}");
        }
    }

    #[test]
    fn test_match_decodes_segments() {
        let chain = match_path(ROUTES, "/%63hat").unwrap();
        assert_eq!(views(&chain), vec![View::ChatLayout, View::ChatWindow]);

        let chain = match_path(ROUTES, "//chat").unwrap();
        assert_eq!(views(&chain), vec![View::ChatLayout, View::ChatWindow]);

        // Invalid UTF-8 after decoding stays literal and falls through
        let chain = match_path(ROUTES, "/%FF").unwrap();
        assert_eq!(views(&chain), vec![View::PageNotFound]);
    }

    #[test]
    fn test_join_paths() {
        assert_eq!(join_paths("", "/"), "/");
        assert_eq!(join_paths("/chat", ""), "/chat");
        assert_eq!(join_paths("/chat", "room"), "/chat/room");
        assert_eq!(join_paths("/", "chat"), "/chat");
    }
}
