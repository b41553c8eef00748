//! Shell routing
//!
//! Content negotiation between the desktop and compact (mobile) shells.
//! A fixed case-insensitive user-agent alternation decides the shell,
//! document paths already under `/mobile` pass through (loop guard), and
//! API/static-asset paths are never inspected. A rewrite serves the
//! mobile entry document while the visible path stays untouched.

use once_cell::sync::Lazy;
use regex::Regex;

/// Mobile device alternation.
static MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Android|BlackBerry|iPhone|iPad|iPod|Opera Mini|IEMobile|WPDesktop")
        .expect("mobile regex is valid")
});

/// The mobile entry document a matching request is rewritten to.
pub const MOBILE_ENTRY: &str = "/mobile/index.html";

/// Path prefixes exempt from inspection (API, build assets, icons, worker).
const EXEMPT_PREFIXES: &[&str] = &[
    "/api",
    "/_next/static",
    "/_next/image",
    "/favicon.ico",
    "/sw.js",
];

/// Outcome of routing a document request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Continue to the requested document unchanged.
    PassThrough,
    /// Serve `target` while the visible path stays as requested.
    Rewrite {
        target: &'static str,
        visible_path: String,
    },
}

/// Which UI tree to mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Desktop,
    Compact,
}

/// Returns true if the descriptor identifies a mobile client.
pub fn is_mobile_agent(user_agent: &str) -> bool {
    MOBILE_REGEX.is_match(user_agent)
}

/// Route a document request.
///
/// Only document routes are inspected; exempt prefixes and anything
/// already under `/mobile` pass through unchanged.
pub fn decide(path: &str, user_agent: &str) -> RouteDecision {
    if path.starts_with("/mobile") {
        return RouteDecision::PassThrough;
    }
    if EXEMPT_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return RouteDecision::PassThrough;
    }
    if is_mobile_agent(user_agent) {
        return RouteDecision::Rewrite {
            target: MOBILE_ENTRY,
            visible_path: path.to_string(),
        };
    }
    RouteDecision::PassThrough
}

/// Select the shell for a session starting at the root document.
pub fn shell_for(user_agent: &str) -> Shell {
    match decide("/", user_agent) {
        RouteDecision::Rewrite { .. } => Shell::Compact,
        RouteDecision::PassThrough => Shell::Desktop,
    }
}
