//! Localization
//!
//! Two-locale dictionary (Spanish default, English) carrying the portfolio
//! copy. The active language is process-wide, like the theme, and persisted
//! through the settings file. A lookup miss returns the key itself so a
//! missing entry never panics or renders blank.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU8, Ordering};

/// Global language selection (0 = Spanish, 1 = English)
static CURRENT_LANGUAGE: AtomicU8 = AtomicU8::new(0);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => Language::En,
            _ => Language::Es,
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            Language::Es => 0,
            Language::En => 1,
        }
    }

    /// The token stored in the settings file under the `language`
    /// preference.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set the global language
pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang.to_u8(), Ordering::SeqCst);
}

/// Get the current language
pub fn current_language() -> Language {
    Language::from_u8(CURRENT_LANGUAGE.load(Ordering::SeqCst))
}

/// Translate a key under the current language, falling back to the key.
pub fn t(key: &str) -> &str {
    translate(current_language(), key)
}

/// Translate a key under an explicit language, falling back to the key.
pub fn translate(lang: Language, key: &str) -> &str {
    let table = match lang {
        Language::Es => &*ES,
        Language::En => &*EN,
    };
    table.get(key).copied().unwrap_or(key)
}

static ES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Navigation
        ("nav.about", "Sobre Mí"),
        ("nav.experience", "Experiencia"),
        ("nav.education", "Educación"),
        ("nav.projects", "Proyectos"),
        ("nav.contact", "Contacto"),
        // Hero
        ("hero.title", "Transformando Ideas en Código Eficiente"),
        ("hero.subtitle", "Desarrollador Backend Python | Pasión por la Innovación"),
        (
            "hero.description",
            "Especializado en crear APIs robustas y escalables con más de 2 años de experiencia en el ecosistema Python.",
        ),
        ("hero.cta", "Explora Mis Proyectos"),
        ("hero.contact", "Contactar"),
        ("hero.downloadCV", "Descargar CV"),
        // About
        ("about.title", "Sobre Mí"),
        (
            "about.description",
            "Como desarrollador backend especializado en el stack de Python con 2+ años de experiencia, me apasiona construir la lógica robusta y escalable que potencia las aplicaciones. Mi enfoque se centra en la trazabilidad de los datos, la optimización de procesos y el diseño de APIs eficientes.",
        ),
        ("about.location", "Málaga, España"),
        // Experience
        ("experience.title", "Experiencia"),
        ("experience.disofic.title", "Desarrollador de Backend"),
        ("experience.disofic.company", "DisOfic"),
        ("experience.disofic.period", "Sept 2023 - Actualidad · 2 años"),
        ("experience.internship.title", "Desarrollador de Aplicaciones"),
        ("experience.internship.company", "DisOfic - Contrato de Prácticas"),
        ("experience.internship.period", "Jun 2023 - Sept 2023 · 4 meses"),
        // Education
        ("education.title", "Educación"),
        ("education.daw.title", "Grado Superior en Desarrollo de Aplicaciones Web (DAW)"),
        ("education.daw.institution", "Junta de Andalucía"),
        ("education.daw.period", "Sept 2025 - Jun 2027"),
        ("education.daw.upcoming", "Próximamente"),
        (
            "education.cesur.title",
            "Certificado de Profesionalidad - Programación de Sistemas Informáticos",
        ),
        ("education.cesur.institution", "Cesur"),
        ("education.cesur.period", "Feb 2023 - Jun 2023"),
        ("education.uma.title", "Grado en Ingeniería Informática"),
        ("education.uma.institution", "Universidad de Málaga"),
        ("education.uma.period", "Sept 2017 - Sept 2021"),
        ("education.uimp.title", "Curso de Inmersión en la Lengua Inglesa"),
        ("education.uimp.institution", "Universidad Internacional Menéndez Pelayo"),
        ("education.uimp.period", "Jul 2019 - Jul 2019"),
        // Projects
        ("projects.title", "Proyectos Destacados"),
        ("projects.blog.title", "El Nieto de Pascual"),
        (
            "projects.blog.description",
            "Blog personal donde comparto conocimientos sobre desarrollo backend y tecnologías Python.",
        ),
        ("projects.portfolio.title", "Portfolio Retro NES"),
        (
            "projects.portfolio.description",
            "Portfolio con estética retro inspirada en la consola NES, desarrollado con tecnologías web modernas.",
        ),
        // Skills
        ("skills.title", "Tecnologías"),
        ("skills.backend", "Backend"),
        ("skills.databases", "Bases de Datos"),
        ("skills.tools", "Herramientas"),
        // Contact
        ("contact.title", "Contacto"),
        (
            "contact.description",
            "Estoy siempre abierto a nuevas oportunidades y colaboraciones. ¡Hablemos!",
        ),
        ("contact.email", "Enviar Email"),
        // Footer
        ("footer.rights", "Todos los derechos reservados."),
        ("footer.built", "Construido con"),
        // Desktop chrome
        ("desktop.choose_theme", "Escoger tema"),
        ("desktop.reboot", "Reboot"),
        ("desktop.shutdown", "Shutdown"),
        ("desktop.terminal", "Terminal"),
        ("desktop.download_cv", "Descargar CV"),
        ("shutdown.title", "Apagar"),
        (
            "shutdown.body",
            "En este caso tras apagarse se volvera a iniciar el sistema operativo de forma automatica.",
        ),
        ("shutdown.confirm", "Apagar"),
        ("shutdown.cancel", "Cancelar"),
        (
            "suspend.hint",
            "Haz click o pulsa Enter para desbloquear el equipo o la pantalla.",
        ),
    ])
});

static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Navigation
        ("nav.about", "About"),
        ("nav.experience", "Experience"),
        ("nav.education", "Education"),
        ("nav.projects", "Projects"),
        ("nav.contact", "Contact"),
        // Hero
        ("hero.title", "Transforming Ideas into Efficient Code"),
        ("hero.subtitle", "Backend Python Developer | Passion for Innovation"),
        (
            "hero.description",
            "Specialized in creating robust and scalable APIs with over 2 years of experience in the Python ecosystem.",
        ),
        ("hero.cta", "Explore My Projects"),
        ("hero.contact", "Contact Me"),
        ("hero.downloadCV", "Download CV"),
        // About
        ("about.title", "About Me"),
        (
            "about.description",
            "As a backend developer specialized in the Python stack with 2+ years of experience, I am passionate about building robust and scalable logic that powers applications. My focus is on data traceability, process optimization, and efficient API design.",
        ),
        ("about.location", "Málaga, Spain"),
        // Experience
        ("experience.title", "Experience"),
        ("experience.disofic.title", "Backend Developer"),
        ("experience.disofic.company", "DisOfic"),
        ("experience.disofic.period", "Sept 2023 - Present · 2 years"),
        ("experience.internship.title", "Application Developer"),
        ("experience.internship.company", "DisOfic - Internship Contract"),
        ("experience.internship.period", "Jun 2023 - Sept 2023 · 4 months"),
        // Education
        ("education.title", "Education"),
        ("education.daw.title", "Higher Degree in Web Application Development (DAW)"),
        ("education.daw.institution", "Junta de Andalucía"),
        ("education.daw.period", "Sept 2025 - Jun 2027"),
        ("education.daw.upcoming", "Coming Soon"),
        (
            "education.cesur.title",
            "Professional Certificate - Computer Systems Programming",
        ),
        ("education.cesur.institution", "Cesur"),
        ("education.cesur.period", "Feb 2023 - Jun 2023"),
        ("education.uma.title", "Degree in Computer Engineering"),
        ("education.uma.institution", "University of Málaga"),
        ("education.uma.period", "Sept 2017 - Sept 2021"),
        ("education.uimp.title", "English Language Immersion Course"),
        ("education.uimp.institution", "Universidad Internacional Menéndez Pelayo"),
        ("education.uimp.period", "Jul 2019 - Jul 2019"),
        // Projects
        ("projects.title", "Featured Projects"),
        ("projects.blog.title", "El Nieto de Pascual"),
        (
            "projects.blog.description",
            "Personal blog where I share knowledge about backend development and Python technologies.",
        ),
        ("projects.portfolio.title", "Retro NES Portfolio"),
        (
            "projects.portfolio.description",
            "Portfolio with retro aesthetics inspired by the NES console, developed with modern web technologies.",
        ),
        // Skills
        ("skills.title", "Technologies"),
        ("skills.backend", "Backend"),
        ("skills.databases", "Databases"),
        ("skills.tools", "Tools"),
        // Contact
        ("contact.title", "Contact"),
        (
            "contact.description",
            "I'm always open to new opportunities and collaborations. Let's talk!",
        ),
        ("contact.email", "Send Email"),
        // Footer
        ("footer.rights", "All rights reserved."),
        ("footer.built", "Built with"),
        // Desktop chrome
        ("desktop.choose_theme", "Choose theme"),
        ("desktop.reboot", "Reboot"),
        ("desktop.shutdown", "Shutdown"),
        ("desktop.terminal", "Terminal"),
        ("desktop.download_cv", "Download CV"),
        ("shutdown.title", "Shut Down"),
        (
            "shutdown.body",
            "After shutting down, the operating system will start again automatically.",
        ),
        ("shutdown.confirm", "Shut Down"),
        ("shutdown.cancel", "Cancel"),
        ("suspend.hint", "Click or press Enter to unlock the computer or the screen."),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_switching() {
        set_language(Language::Es);
        assert_eq!(current_language(), Language::Es);

        set_language(Language::En);
        assert_eq!(current_language(), Language::En);

        set_language(Language::Es);
    }

    #[test]
    fn test_translate_both_locales() {
        assert_eq!(translate(Language::Es, "nav.about"), "Sobre Mí");
        assert_eq!(translate(Language::En, "nav.about"), "About");
    }

    #[test]
    fn test_lookup_miss_returns_key() {
        assert_eq!(translate(Language::Es, "nav.missing"), "nav.missing");
        assert_eq!(translate(Language::En, "totally.unknown"), "totally.unknown");
    }

    #[test]
    fn test_every_es_key_has_en_counterpart() {
        for key in ES.keys() {
            assert!(EN.contains_key(key), "missing EN translation for {key}");
        }
        for key in EN.keys() {
            assert!(ES.contains_key(key), "missing ES translation for {key}");
        }
    }
}
