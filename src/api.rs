//! Fake portfolio API
//!
//! The endpoint catalog behind the API client window. Endpoints are a
//! closed enum dispatched exhaustively to literal JSON bodies; the only
//! runtime fallback is the 404 produced when the client asks for a key
//! outside the catalog. Requests resolve after a simulated latency so the
//! window behaves like a real HTTP tool against a fast backend.

use serde_json::{json, Value};
use std::time::Duration;

use crate::content;
use crate::i18n::Language;

/// Base URL shown in the request bar.
pub const BASE_URL: &str = "https://daniel-portfolio-api.com";

/// Simulated request latency applied before a response is shown.
///
/// The duration is fixed and the wait is fire-and-forget; nothing
/// cancels an in-flight request.
#[derive(Debug, Clone, Copy)]
pub struct Latency(Duration);

impl Latency {
    pub const DEFAULT: Latency = Latency(Duration::from_millis(800));

    pub fn new(duration: Duration) -> Self {
        Latency(duration)
    }

    /// Zero-delay latency for tests and scripted output.
    pub fn none() -> Self {
        Latency(Duration::ZERO)
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    /// Wait out the simulated round trip.
    pub async fn simulate(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

/// HTTP verb of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// The closed endpoint catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    About,
    Experience,
    Education,
    Projects,
    Certifications,
    Blog,
    Testimonials,
    CaseStudies,
    Analytics,
    Availability,
    Contact,
}

impl Endpoint {
    /// Sidebar order.
    pub const ALL: &'static [Endpoint] = &[
        Endpoint::About,
        Endpoint::Experience,
        Endpoint::Education,
        Endpoint::Projects,
        Endpoint::Certifications,
        Endpoint::Blog,
        Endpoint::Testimonials,
        Endpoint::CaseStudies,
        Endpoint::Analytics,
        Endpoint::Availability,
        Endpoint::Contact,
    ];

    pub fn method(self) -> Method {
        match self {
            Endpoint::Contact => Method::Post,
            _ => Method::Get,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::About => "/about",
            Endpoint::Experience => "/experience",
            Endpoint::Education => "/education",
            Endpoint::Projects => "/projects",
            Endpoint::Certifications => "/certifications",
            Endpoint::Blog => "/blog",
            Endpoint::Testimonials => "/testimonials",
            Endpoint::CaseStudies => "/case-studies",
            Endpoint::Analytics => "/analytics",
            Endpoint::Availability => "/availability",
            Endpoint::Contact => "/contact",
        }
    }

    /// The `METHOD /path` key the dock and sidebar dispatch on.
    pub fn key(self) -> String {
        format!("{} {}", self.method().as_str(), self.path())
    }

    /// Localized sidebar label.
    pub fn name(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Endpoint::About, Language::Es) => "Sobre mí",
            (Endpoint::About, Language::En) => "About",
            (Endpoint::Experience, Language::Es) => "Experiencia",
            (Endpoint::Experience, Language::En) => "Experience",
            (Endpoint::Education, Language::Es) => "Educación",
            (Endpoint::Education, Language::En) => "Education",
            (Endpoint::Projects, Language::Es) => "Proyectos",
            (Endpoint::Projects, Language::En) => "Projects",
            (Endpoint::Certifications, Language::Es) => "Certificaciones",
            (Endpoint::Certifications, Language::En) => "Certifications",
            (Endpoint::Blog, Language::Es) => "Blog Técnico",
            (Endpoint::Blog, Language::En) => "Technical Blog",
            (Endpoint::Testimonials, Language::Es) => "Testimonios",
            (Endpoint::Testimonials, Language::En) => "Testimonials",
            (Endpoint::CaseStudies, _) => "Case Studies",
            (Endpoint::Analytics, _) => "Analytics",
            (Endpoint::Availability, Language::Es) => "Disponibilidad",
            (Endpoint::Availability, Language::En) => "Availability",
            (Endpoint::Contact, Language::Es) => "Contacto",
            (Endpoint::Contact, Language::En) => "Contact",
        }
    }

    /// Parse a `METHOD /path` key back into the catalog.
    pub fn parse(key: &str) -> Option<Endpoint> {
        Endpoint::ALL.iter().copied().find(|e| e.key() == key)
    }
}

/// A canned response: fixed status, canned timing label, literal body.
#[derive(Debug, Clone)]
pub struct EndpointResponse {
    pub status: u16,
    pub response_time_ms: u32,
    pub body: Value,
}

impl EndpointResponse {
    pub fn status_label(&self) -> &'static str {
        if self.status == 200 {
            "OK"
        } else {
            "Error"
        }
    }
}

/// Resolve an endpoint to its literal response.
pub fn respond(endpoint: Endpoint, lang: Language) -> EndpointResponse {
    let (response_time_ms, body) = match endpoint {
        Endpoint::About => (45, about_body(lang)),
        Endpoint::Experience => (38, json!(content::experience())),
        Endpoint::Education => (42, json!(content::education())),
        Endpoint::Projects => (52, json!(content::projects(lang))),
        Endpoint::Certifications => (52, certifications_body()),
        Endpoint::Blog => (65, blog_body()),
        Endpoint::Testimonials => (32, json!(content::testimonials())),
        Endpoint::CaseStudies => (48, json!(content::case_studies())),
        Endpoint::Analytics => (78, analytics_body()),
        Endpoint::Availability => (34, availability_body()),
        Endpoint::Contact => (28, contact_body()),
    };
    EndpointResponse {
        status: 200,
        response_time_ms,
        body,
    }
}

/// Resolve a raw request key; unknown keys get the fixed 404 body.
pub fn respond_to_key(key: &str, lang: Language) -> EndpointResponse {
    match Endpoint::parse(key) {
        Some(endpoint) => respond(endpoint, lang),
        None => EndpointResponse {
            status: 404,
            response_time_ms: 0,
            body: json!({ "error": "Endpoint not found" }),
        },
    }
}

fn about_body(lang: Language) -> Value {
    let profile = content::profile(lang);
    json!({
        "name": profile.name,
        "role": profile.role,
        "location": profile.location,
        "description": profile.description,
        "skills": profile.skills,
        "yearsOfExperience": profile.years_of_experience,
        "currentlyLearning": profile.currently_learning,
    })
}

fn certifications_body() -> Value {
    let certifications = content::certifications();
    json!({
        "totalCertifications": 5,
        "verifiedCertifications": 5,
        "expertLevel": 2,
        "categories": ["Programming", "Web Development", "Cloud Computing", "DevOps", "Database"],
        "certifications": certifications,
    })
}

fn blog_body() -> Value {
    json!({
        "posts": content::blog_posts(),
        "totalPosts": 15,
        "categories": ["Backend", "Python", "Database", "DevOps"],
        "totalViews": 25000,
        "totalLikes": 1200,
    })
}

fn analytics_body() -> Value {
    let snapshot = crate::analytics::snapshot();
    json!({
        "totalViews": snapshot.total_views,
        "uniqueVisitors": snapshot.unique_visitors,
        "averageTime": snapshot.average_time,
        "bounceRate": snapshot.bounce_rate,
        "realTimeUsers": snapshot.real_time_users,
        "conversionRate": snapshot.conversion_rate,
        "topPages": snapshot.top_pages.iter().map(|p| json!({
            "page": p.page,
            "views": p.views,
            "percentage": p.percentage,
        })).collect::<Vec<_>>(),
        "deviceTypes": snapshot.device_types.iter().map(|d| json!({
            "type": d.kind,
            "percentage": d.percentage,
        })).collect::<Vec<_>>(),
    })
}

fn availability_body() -> Value {
    json!({
        "currentStatus": "available",
        "nextAvailableSlot": "2024-01-16T09:00:00Z",
        "totalSlotsThisWeek": 15,
        "availableSlotsThisWeek": 8,
        "contactMethods": [
            { "type": "email", "available": true, "responseTime": "< 24 horas" },
            { "type": "linkedin", "available": true, "responseTime": "< 12 horas" },
            { "type": "whatsapp", "available": true, "responseTime": "< 2 horas" },
        ],
        "upcomingSlots": content::availability_slots(),
    })
}

fn contact_body() -> Value {
    let contact = content::contact();
    json!({
        "message": "Endpoint de contacto disponible",
        "methods": ["email", "linkedin", "github"],
        "email": contact.email,
        "linkedin": contact.linkedin,
        "github": contact.github,
        "location": contact.location,
        "availability": "Disponible para nuevas oportunidades",
    })
}
