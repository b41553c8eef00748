//! Unit tests for shell routing
//!
//! Tests cover:
//! - Mobile rewrite with untouched visible path
//! - Desktop pass-through
//! - Loop guard for /mobile paths
//! - Exempt API/static/icon paths

use portfolio_os::router::{decide, is_mobile_agent, shell_for, RouteDecision, Shell, MOBILE_ENTRY};

const MOBILE_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)",
    "Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X)",
    "Mozilla/5.0 (iPod touch; CPU iPhone OS 15_0)",
    "BlackBerry9700/5.0.0.862",
    "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)",
    "Mozilla/5.0 (compatible; MSIE 9.0; Windows Phone OS 7.5; IEMobile/9.0)",
    "Mozilla/5.0 (compatible; WPDesktop)",
];

const DESKTOP_AGENTS: &[&str] = &[
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/120.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) Safari/605.1.15",
    "curl/8.4.0",
    "",
];

mod rewrite_tests {
    use super::*;

    #[test]
    fn test_all_mobile_agents_rewrite_document_paths() {
        for agent in MOBILE_AGENTS {
            for path in ["/", "/projects", "/blog/fastapi-optimization"] {
                match decide(path, agent) {
                    RouteDecision::Rewrite {
                        target,
                        visible_path,
                    } => {
                        assert_eq!(target, MOBILE_ENTRY, "agent={agent}");
                        assert_eq!(visible_path, path, "visible path must stay untouched");
                    }
                    other => panic!("expected rewrite for {agent} on {path}, got {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_all_desktop_agents_pass_through() {
        for agent in DESKTOP_AGENTS {
            for path in ["/", "/projects"] {
                assert_eq!(
                    decide(path, agent),
                    RouteDecision::PassThrough,
                    "agent={agent} path={path}"
                );
            }
        }
    }
}

mod guard_tests {
    use super::*;

    #[test]
    fn test_mobile_paths_never_rewritten_again() {
        for agent in MOBILE_AGENTS {
            assert_eq!(
                decide("/mobile/index.html", agent),
                RouteDecision::PassThrough
            );
        }
    }

    #[test]
    fn test_exempt_prefixes() {
        for path in [
            "/api/projects",
            "/_next/static/css/main.css",
            "/_next/image?url=/portrait.png",
            "/favicon.ico",
            "/sw.js",
        ] {
            for agent in MOBILE_AGENTS {
                assert_eq!(decide(path, agent), RouteDecision::PassThrough, "{path}");
            }
        }
    }
}

mod agent_tests {
    use super::*;

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(is_mobile_agent("ANDROID"));
        assert!(is_mobile_agent("android"));
        assert!(is_mobile_agent("iphone safari"));
    }

    #[test]
    fn test_substring_match_anywhere() {
        assert!(is_mobile_agent("prefix Android suffix"));
        assert!(!is_mobile_agent("Androi d"));
    }

    #[test]
    fn test_shell_selection() {
        assert_eq!(shell_for(MOBILE_AGENTS[0]), Shell::Compact);
        assert_eq!(shell_for(DESKTOP_AGENTS[0]), Shell::Desktop);
    }
}
