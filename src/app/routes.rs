use std::fmt;
use std::str::FromStr;

use dioxus::document;
use dioxus::prelude::*;

use crate::app::components::LoadingText;
use crate::app::layouts::ChatLayout;
use crate::app::pages::{ChatWindow, Home, PageNotFound};
use crate::config::AppConfig;
use crate::shared::errors::{AppError, Result};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Landing page
    #[route("/")]
    Home {},

    // Chat shell, the window is its default child
    #[layout(ChatLayout)]
        #[route("/chat")]
        ChatWindow {},
    #[end_layout]

    // Anything else
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Views the router can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    ChatLayout,
    ChatWindow,
    PageNotFound,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::ChatLayout => "chat_layout",
            View::ChatWindow => "chat_window",
            View::PageNotFound => "page_not_found",
        }
    }
}

/// Identifiers for named navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Chat,
    NotFound,
}

impl RouteName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Home => "Home",
            RouteName::Chat => "Chat",
            RouteName::NotFound => "NotFound",
        }
    }

    /// Navigation target for this name
    pub fn route(&self) -> Route {
        match self {
            RouteName::Home => Route::Home {},
            RouteName::Chat => Route::ChatWindow {},
            RouteName::NotFound => Route::PageNotFound { segments: Vec::new() },
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Home" => Ok(RouteName::Home),
            "Chat" => Ok(RouteName::Chat),
            "NotFound" => Ok(RouteName::NotFound),
            other => Err(AppError::UnknownRouteName(other.to_string())),
        }
    }
}

impl Route {
    /// Views rendered for this route, outermost layout first
    pub fn views(&self) -> &'static [View] {
        match self {
            Route::Home {} => &[View::Home],
            Route::ChatWindow {} => &[View::ChatLayout, View::ChatWindow],
            Route::PageNotFound { .. } => &[View::PageNotFound],
        }
    }

    /// Name of the route entry this variant is reached through
    pub fn name(&self) -> RouteName {
        match self {
            Route::Home {} => RouteName::Home,
            Route::ChatWindow {} => RouteName::Chat,
            Route::PageNotFound { .. } => RouteName::NotFound,
        }
    }
}

/// A path resolved by the router
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub route: Route,
    pub views: Vec<View>,
}

/// Strip query and fragment, collapse repeated slashes, force a leading slash
/// and drop trailing ones
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let segments: Vec<&str> = path[..end]
        .trim()
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();
    format!("/{}", segments.join("/"))
}

/// Resolve a URL path with the router's own parser
pub fn resolve(path: &str) -> Result<Resolved> {
    let normalized = normalize_path(path);
    let route = normalized
        .parse::<Route>()
        .map_err(|e| AppError::InvalidRoute(format!("{normalized}: {e}")))?;
    let views = route.views().to_vec();
    Ok(Resolved { route, views })
}

#[component]
pub fn App() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let config = use_context_provider(AppConfig::current);

    use_effect(|| {
        tracing::info!("Dioxus App initialized successfully");
    });

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        document::Title { "{config.title}" }
        // Deferred views suspend here while they load
        SuspenseBoundary {
            fallback: |_| rsx! {
                LoadingText { message: "Loading..." }
            },
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_resolves_to_home() {
        let resolved = resolve("/").unwrap();
        assert_eq!(resolved.route, Route::Home {});
        assert_eq!(resolved.views, vec![View::Home]);
    }

    #[test]
    fn test_chat_resolves_to_layout_with_window() {
        let resolved = resolve("/chat").unwrap();
        assert_eq!(resolved.route, Route::ChatWindow {});
        assert_eq!(resolved.views, vec![View::ChatLayout, View::ChatWindow]);
    }

    #[test]
    fn test_trailing_slash_and_query_are_ignored() {
        assert_eq!(resolve("/chat/").unwrap().route, Route::ChatWindow {});
        assert_eq!(resolve("/chat?draft=1#end").unwrap().route, Route::ChatWindow {});
        assert_eq!(resolve("").unwrap().route, Route::Home {});
    }

    #[test]
    fn test_unknown_path_falls_back() {
        let resolved = resolve("/settings/profile").unwrap();
        assert_eq!(
            resolved.route,
            Route::PageNotFound {
                segments: vec!["settings".to_string(), "profile".to_string()]
            }
        );
        assert_eq!(resolved.views, vec![View::PageNotFound]);
    }

    #[test]
    fn test_chat_subpath_is_not_the_chat_window() {
        let resolved = resolve("/chat/extra").unwrap();
        assert!(matches!(resolved.route, Route::PageNotFound { .. }));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("chat"), "/chat");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path("/a/b/?q"), "/a/b");
        assert_eq!(normalize_path("//chat"), "/chat");
        assert_eq!(normalize_path("/chat//room/"), "/chat/room");
    }

    #[test]
    fn test_named_navigation() {
        for name in [RouteName::Home, RouteName::Chat, RouteName::NotFound] {
            let parsed: RouteName = name.as_str().parse().unwrap();
            assert_eq!(parsed, name);
            assert_eq!(name.route().name(), name);
        }
        assert_eq!(RouteName::Chat.route(), Route::ChatWindow {});
        assert_eq!(
            "Settings".parse::<RouteName>(),
            Err(AppError::UnknownRouteName("Settings".to_string()))
        );
    }
}
