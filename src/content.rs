//! Portfolio content
//!
//! Literal records behind every section: work history, education,
//! projects, blog posts, testimonials, case studies, certifications,
//! availability, and the compact shell's notifications. Nothing here is
//! computed or validated; filtering and sorting are simple predicates.

use serde::Serialize;

use crate::i18n::Language;

/// Owner profile shown by `GET /about`, the suspend lock screen, and the
/// terminal banner.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub years_of_experience: f64,
    pub currently_learning: &'static str,
}

pub fn profile(lang: Language) -> Profile {
    Profile {
        name: "Daniel González Pascual",
        role: "Desarrollador Backend Python",
        location: "Málaga, España",
        description: match lang {
            Language::Es => {
                "Desarrollador backend especializado en Python con experiencia en FastAPI, Django y arquitecturas escalables. Apasionado por crear soluciones eficientes y robustas."
            }
            Language::En => {
                "Backend developer specialized in Python with experience in FastAPI, Django and scalable architectures. Passionate about creating efficient and robust solutions."
            }
        },
        skills: &["Python", "FastAPI", "Django", "PostgreSQL", "Redis", "Docker", "AWS"],
        years_of_experience: 2.3,
        currently_learning: "Desarrollo de Aplicaciones Web (DAW)",
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub position: &'static str,
    pub duration: &'static str,
    #[serde(rename = "type")]
    pub contract_type: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub achievements: &'static [&'static str],
}

pub fn experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            company: "DisOfic",
            position: "Desarrollador Backend",
            duration: "Sept 2023 - Actualidad (2 años 3 meses)",
            contract_type: "Jornada completa",
            description: "Desarrollo de API de integración en tiempo real con FastAPI para sincronizar +50 sitios WordPress con CRM Odoo. Optimización de procesos con Python, mejora de experiencia de compra, implementación de arquitectura asíncrona con Celery, Redis y RabbitMQ.",
            technologies: &["Python", "FastAPI", "MySQL", "PostgreSQL", "Redis", "Celery", "RabbitMQ"],
            achievements: &[
                "Automatización de consulta de stock y precios de +12,000 productos",
                "Reducción del 50% en incidencias relacionadas con pedidos",
                "Implementación de sistema de workers para sincronización masiva",
            ],
        },
        ExperienceEntry {
            company: "DisOfic",
            position: "Desarrollador de Aplicaciones",
            duration: "Jun 2023 - Sept 2023 (4 meses)",
            contract_type: "Contrato de prácticas",
            description: "Desarrollo de aplicación para gestión de almacén y entrada/salida de mercancía. Aplicación de escritorio en C# con Oracle Forms.",
            technologies: &["C#", "Oracle Forms", "Arquitectura de aplicación"],
            achievements: &["Mejora en funcionalidad y velocidad de la aplicación existente"],
        },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationEntry {
    pub institution: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub skills: &'static [&'static str],
}

pub fn education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            institution: "Junta de Andalucía",
            degree: "Técnico Superior en Desarrollo de Aplicaciones Web (DAW)",
            period: "Sept 2025 - Jun 2027",
            status: "En curso",
            description: Some("Formación avanzada en desarrollo web full-stack"),
            skills: &[],
        },
        EducationEntry {
            institution: "Cesur",
            degree: "Certificado de Profesionalidad - Programación de Sistemas Informáticos",
            period: "Feb 2023 - Jun 2023",
            status: "Completado",
            description: None,
            skills: &[
                "HTML",
                "GitHub",
                "Visual Studio",
                "C#",
                "Documentación",
                "Habilidades sociales",
                "MySQL",
                "Resolución de problemas",
                ".NET Framework",
            ],
        },
        EducationEntry {
            institution: "Universidad de Málaga",
            degree: "Grado en Ingeniería Informática",
            period: "Sept 2017 - Sept 2021",
            status: "Completado",
            description: None,
            skills: &["Documentación", "Habilidades sociales", "Resolución de problemas"],
        },
        EducationEntry {
            institution: "Universidad Internacional Menéndez Pelayo",
            degree: "Curso de Inmersión en Lengua Inglesa",
            period: "Jul 2019 - Jul 2019",
            status: "Completado",
            description: None,
            skills: &["Habilidades sociales"],
        },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub status: &'static str,
    pub url: &'static str,
}

pub fn projects(lang: Language) -> Vec<Project> {
    vec![
        Project {
            name: "El Nieto de Pascual",
            kind: "Blog Personal",
            description: match lang {
                Language::Es => "Blog personal sobre desarrollo backend, Python y tecnología. Comparto experiencias, tutoriales y reflexiones sobre el mundo del desarrollo.",
                Language::En => "Personal blog about backend development, Python and technology. I share experiences, tutorials and reflections about the development world.",
            },
            technologies: &["Python", "Django", "PostgreSQL", "HTML/CSS"],
            status: "Activo",
            url: "https://elnietodepascual.com",
        },
        Project {
            name: "Portfolio Retro NES",
            kind: "Portfolio Personal",
            description: match lang {
                Language::Es => "Portfolio con estética retro inspirada en Nintendo NES. Diseño pixel art y animaciones nostálgicas.",
                Language::En => "Portfolio with retro aesthetic inspired by Nintendo NES. Pixel art design and nostalgic animations.",
            },
            technologies: &["HTML", "CSS", "JavaScript", "Pixel Art"],
            status: "Completado",
            url: "#",
        },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub published_at: &'static str,
    pub read_time: u32,
    pub views: u32,
    pub likes: u32,
    pub tags: &'static [&'static str],
    pub category: &'static str,
    pub featured: bool,
}

pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "fastapi-optimization",
            title: "Optimización de APIs con FastAPI: Técnicas Avanzadas",
            excerpt: "Descubre cómo optimizar el rendimiento de tus APIs FastAPI usando técnicas de caching, conexiones asíncronas y optimización de consultas.",
            published_at: "2024-01-15",
            read_time: 8,
            views: 1250,
            likes: 89,
            tags: &["FastAPI", "Python", "Performance", "Caching"],
            category: "Backend",
            featured: true,
        },
        BlogPost {
            id: "python-async-patterns",
            title: "Patrones Asíncronos en Python: Más Allá de async/await",
            excerpt: "Explora patrones avanzados de programación asíncrona en Python, incluyendo context managers asíncronos y generadores.",
            published_at: "2024-01-10",
            read_time: 12,
            views: 890,
            likes: 67,
            tags: &["Python", "Async", "Patterns", "Advanced"],
            category: "Python",
            featured: false,
        },
    ]
}

/// Featured posts first, then by publication date descending.
pub fn blog_posts_featured_first() -> Vec<BlogPost> {
    let mut posts = blog_posts();
    posts.sort_by(|a, b| {
        b.featured
            .cmp(&a.featured)
            .then(b.published_at.cmp(a.published_at))
    });
    posts
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub position: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "1",
            name: "María García",
            position: "CTO",
            company: "DisOfic",
            content: "Daniel ha demostrado ser un desarrollador excepcional. Su trabajo en la API de integración ha transformado completamente nuestros procesos.",
            rating: 5,
        },
        Testimonial {
            id: "2",
            name: "Carlos Rodríguez",
            position: "Lead Developer",
            company: "TechSolutions",
            content: "La capacidad de Daniel para resolver problemas complejos y su dominio de Python y FastAPI son impresionantes.",
            rating: 5,
        },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseStudy {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub problem: &'static str,
    pub solution: &'static str,
    pub results: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub fn case_studies() -> Vec<CaseStudy> {
    vec![CaseStudy {
        id: "disofic-api",
        title: "API de Integración en Tiempo Real",
        subtitle: "DisOfic - Sistema de sincronización masiva",
        problem: "Sincronización manual de +50 sitios WordPress con CRM Odoo",
        solution: "API robusta con FastAPI, workers con Celery y Redis",
        results: &["95% reducción de errores", "300% mejora de eficiencia"],
        technologies: &["Python", "FastAPI", "Celery", "Redis", "MySQL"],
    }]
}

#[derive(Debug, Clone, Serialize)]
pub struct Certification {
    pub id: &'static str,
    pub name: &'static str,
    pub issuer: &'static str,
    pub level: &'static str,
    pub verified: bool,
    pub skills: &'static [&'static str],
}

pub fn certifications() -> Vec<Certification> {
    vec![
        Certification {
            id: "python-advanced",
            name: "Python Advanced Programming",
            issuer: "Python Institute",
            level: "Advanced",
            verified: true,
            skills: &["Python", "OOP", "Advanced Concepts", "Data Structures"],
        },
        Certification {
            id: "fastapi-expert",
            name: "FastAPI Expert Developer",
            issuer: "FastAPI Academy",
            level: "Expert",
            verified: true,
            skills: &["FastAPI", "Async Programming", "API Design", "Performance"],
        },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct AvailabilitySlot {
    pub date: &'static str,
    pub time: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub duration: u32,
}

pub fn availability_slots() -> Vec<AvailabilitySlot> {
    vec![
        AvailabilitySlot {
            date: "2024-01-16",
            time: "09:00",
            kind: "consultation",
            duration: 30,
        },
        AvailabilitySlot {
            date: "2024-01-16",
            time: "15:00",
            kind: "interview",
            duration: 60,
        },
    ]
}

/// Contact details shown by `POST /contact` and the terminal.
#[derive(Debug, Clone, Serialize)]
pub struct ContactInfo {
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub location: &'static str,
}

pub fn contact() -> ContactInfo {
    ContactInfo {
        email: "daniel.gonzalez.pascual@email.com",
        linkedin: "linkedin.com/in/daniel-gonzalez-pascual",
        github: "github.com/danigpas",
        location: "Málaga, España",
    }
}

/// A notification shown in the compact shell's pull-down panel.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub app: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub time: &'static str,
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            app: "Portfolio API",
            title: "New visitor from San Francisco",
            message: "Someone viewed your projects section",
            time: "2 min ago",
        },
        Notification {
            app: "Terminal",
            title: "Command executed successfully",
            message: "help command completed",
            time: "5 min ago",
        },
        Notification {
            app: "System",
            title: "Cache installed",
            message: "Offline assets ready",
            time: "10 min ago",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_description_follows_language() {
        assert!(profile(Language::Es).description.starts_with("Desarrollador"));
        assert!(profile(Language::En).description.starts_with("Backend"));
    }

    #[test]
    fn test_featured_posts_sort_first() {
        let posts = blog_posts_featured_first();
        assert!(posts[0].featured);
        assert_eq!(posts[0].id, "fastapi-optimization");
    }

    #[test]
    fn test_record_counts() {
        assert_eq!(experience().len(), 2);
        assert_eq!(education().len(), 4);
        assert_eq!(projects(Language::Es).len(), 2);
        assert_eq!(certifications().len(), 2);
    }
}
