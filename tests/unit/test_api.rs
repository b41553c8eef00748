//! Unit tests for the fake API
//!
//! Tests cover:
//! - Catalog shape and key parsing
//! - Literal bodies for each endpoint
//! - 404 fallback
//! - Localized payload fields

use portfolio_os::api::{respond, respond_to_key, Endpoint, Latency, Method};
use portfolio_os::i18n::Language;

mod catalog_tests {
    use super::*;

    #[test]
    fn test_eleven_endpoints_in_sidebar_order() {
        assert_eq!(Endpoint::ALL.len(), 11);
        assert_eq!(Endpoint::ALL[0], Endpoint::About);
        assert_eq!(Endpoint::ALL[10], Endpoint::Contact);
    }

    #[test]
    fn test_contact_is_the_only_post() {
        for endpoint in Endpoint::ALL {
            let expected = if *endpoint == Endpoint::Contact {
                Method::Post
            } else {
                Method::Get
            };
            assert_eq!(endpoint.method(), expected, "{endpoint:?}");
        }
    }

    #[test]
    fn test_key_round_trip() {
        for endpoint in Endpoint::ALL {
            assert_eq!(Endpoint::parse(&endpoint.key()), Some(*endpoint));
        }
    }

    #[test]
    fn test_labels_exist_in_both_locales() {
        for endpoint in Endpoint::ALL {
            assert!(!endpoint.name(Language::Es).is_empty());
            assert!(!endpoint.name(Language::En).is_empty());
        }
    }
}

mod response_tests {
    use super::*;

    #[test]
    fn test_about_payload_fields() {
        let response = respond(Endpoint::About, Language::Es);
        assert_eq!(response.status, 200);
        assert_eq!(response.body["name"], "Daniel González Pascual");
        assert_eq!(response.body["location"], "Málaga, España");
        assert!(response.body["skills"].as_array().unwrap().len() >= 5);
    }

    #[test]
    fn test_experience_is_an_array_of_positions() {
        let response = respond(Endpoint::Experience, Language::Es);
        let entries = response.body.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["company"], "DisOfic");
        assert!(entries[0]["achievements"].as_array().unwrap().len() >= 3);
    }

    #[test]
    fn test_blog_counts() {
        let response = respond(Endpoint::Blog, Language::Es);
        assert_eq!(response.body["totalPosts"], 15);
        assert_eq!(response.body["posts"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_contact_methods() {
        let response = respond(Endpoint::Contact, Language::Es);
        assert_eq!(
            response.body["methods"],
            serde_json::json!(["email", "linkedin", "github"])
        );
    }

    #[test]
    fn test_unknown_key_yields_404_body() {
        let response = respond_to_key("GET /secrets", Language::Es);
        assert_eq!(response.status, 404);
        assert_eq!(response.status_label(), "Error");
        assert_eq!(response.body["error"], "Endpoint not found");
    }

    #[test]
    fn test_descriptions_follow_language() {
        let es = respond(Endpoint::Projects, Language::Es);
        let en = respond(Endpoint::Projects, Language::En);
        assert_ne!(es.body[0]["description"], en.body[0]["description"]);
        assert_eq!(es.body[0]["name"], en.body[0]["name"]);
    }
}

mod latency_tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn test_default_latency_waits() {
        let latency = Latency::new(Duration::from_millis(30));
        let started = Instant::now();
        latency.simulate().await;
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_none_is_immediate() {
        let started = Instant::now();
        Latency::none().simulate().await;
        assert!(started.elapsed() < Duration::from_millis(20));
    }
}
