//! Property tests for shell routing

use portfolio_os::router::{decide, is_mobile_agent, RouteDecision, MOBILE_ENTRY};
use proptest::prelude::*;

const MOBILE_MARKERS: &[&str] = &[
    "Android",
    "BlackBerry",
    "iPhone",
    "iPad",
    "iPod",
    "Opera Mini",
    "IEMobile",
    "WPDesktop",
];

proptest! {
    /// Any agent string with a mobile marker embedded anywhere matches,
    /// regardless of the marker's casing.
    #[test]
    fn prop_embedded_marker_always_matches(
        prefix in "[a-z0-9 ./();]{0,30}",
        suffix in "[a-z0-9 ./();]{0,30}",
        marker_idx in 0..MOBILE_MARKERS.len(),
        uppercase in any::<bool>(),
    ) {
        let marker = if uppercase {
            MOBILE_MARKERS[marker_idx].to_uppercase()
        } else {
            MOBILE_MARKERS[marker_idx].to_lowercase()
        };
        let agent = format!("{prefix}{marker}{suffix}");
        prop_assert!(is_mobile_agent(&agent));
    }

    /// Strings drawn from an alphabet that cannot spell any marker never
    /// match.
    #[test]
    fn prop_markerless_agent_never_matches(agent in "[xz0-9 ./()-]{0,60}") {
        prop_assert!(!is_mobile_agent(&agent));
    }

    /// A rewrite always targets the mobile entry document and reports the
    /// requested path untouched.
    #[test]
    fn prop_rewrite_preserves_visible_path(path in "/[a-eg-lnoq-rt-z0-9][a-z0-9/]{0,20}") {
        match decide(&path, "iPhone") {
            RouteDecision::Rewrite { target, visible_path } => {
                prop_assert_eq!(target, MOBILE_ENTRY);
                prop_assert_eq!(visible_path, path);
            }
            RouteDecision::PassThrough => {
                // Only exempt or mobile paths may pass through for a
                // mobile agent.
                let exempt = path.starts_with("/mobile")
                    || path.starts_with("/api")
                    || path.starts_with("/_next")
                    || path.starts_with("/favicon.ico")
                    || path.starts_with("/sw.js");
                prop_assert!(exempt, "unexpected pass-through for {}", path);
            }
        }
    }

    /// Desktop agents never get rewritten, whatever the path.
    #[test]
    fn prop_desktop_agent_never_rewritten(path in "/[a-z0-9/._-]{0,30}") {
        prop_assert_eq!(
            decide(&path, "Mozilla/5.0 (X11; Linux x86_64)"),
            RouteDecision::PassThrough
        );
    }
}
