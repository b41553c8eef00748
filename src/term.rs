//! Terminal emulator core
//!
//! The command interpreter behind both terminal windows (desktop and
//! compact). Commands form a closed enum dispatched exhaustively; the only
//! runtime fallback is the "not found" line for input outside the set,
//! which quotes the user's original (untrimmed-case) text. `clear` and the
//! power commands carry side effects for the caller instead of plain
//! output.

use crate::content;
use crate::i18n::Language;

/// Shell prompt shown on every echoed line.
pub const PROMPT: &str = "daniel@portfolio:~$";

/// Banner printed when a terminal opens.
pub const WELCOME: &str = "Daniel González Pascual Terminal v1.0\n\
Desarrollador Backend Python | Málaga, España\n\
Escribe 'help' para ver comandos disponibles";

/// Power transitions a command can request from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerEvent {
    Reboot,
    Suspend,
    Shutdown,
}

/// The closed command set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    About,
    Skills,
    Experience,
    Projects,
    Education,
    Contact,
    GitStatus,
    PythonVersion,
    DockerPs,
    Clear,
    Whoami,
    Reboot,
    Suspend,
    Shutdown,
}

impl Command {
    /// Parse a normalized (trimmed, lowercased) line.
    pub fn parse(normalized: &str) -> Option<Command> {
        match normalized {
            "help" => Some(Command::Help),
            "about" => Some(Command::About),
            "skills" => Some(Command::Skills),
            "experience" => Some(Command::Experience),
            "projects" => Some(Command::Projects),
            "education" => Some(Command::Education),
            "contact" => Some(Command::Contact),
            "git status" => Some(Command::GitStatus),
            "python --version" => Some(Command::PythonVersion),
            "docker ps" => Some(Command::DockerPs),
            "clear" => Some(Command::Clear),
            "whoami" => Some(Command::Whoami),
            "reboot" => Some(Command::Reboot),
            "suspend" => Some(Command::Suspend),
            "shutdown" => Some(Command::Shutdown),
            _ => None,
        }
    }
}

/// Fixed help text; tests assert it verbatim.
pub const HELP_TEXT: &str = "Comandos disponibles:\n\
• about - Información personal\n\
• skills - Habilidades técnicas\n\
• experience - Experiencia laboral\n\
• projects - Proyectos realizados\n\
• education - Formación académica\n\
• contact - Información de contacto\n\
• git status - Estado del repositorio\n\
• python --version - Versión de Python\n\
• docker ps - Contenedores activos\n\
• clear - Limpiar terminal\n\
• whoami - Usuario actual\n\
• reboot - Reiniciar el sistema\n\
• suspend - Suspender la sesión\n\
• shutdown - Apagar el sistema";

fn command_output(command: Command) -> String {
    match command {
        Command::Help => HELP_TEXT.to_string(),
        Command::About => {
            let profile = content::profile(Language::Es);
            format!(
                "{}\nDesarrollador Backend especializado en Python\n📍 {}\n🎯 2+ años de experiencia\n🚀 Apasionado por crear soluciones eficientes",
                profile.name, profile.location
            )
        }
        Command::Skills => "Habilidades Técnicas:\n\
• Backend: Python (FastAPI, Flask, Django), Node.js\n\
• Frontend: React, Next.js, TypeScript\n\
• Bases de Datos: MySQL, PostgreSQL, Oracle\n\
• DevOps: Docker, Kubernetes, CI/CD\n\
• Otros: Odoo, WordPress"
            .to_string(),
        Command::Experience => {
            let mut out = String::from("Experiencia Laboral:");
            for entry in content::experience() {
                out.push_str(&format!(
                    "\n• {} en {} ({})",
                    entry.position, entry.company, entry.duration
                ));
            }
            out
        }
        Command::Projects => {
            let mut out = String::from("Proyectos Realizados:");
            for project in content::projects(Language::Es) {
                out.push_str(&format!("\n• {} - {}", project.name, project.kind));
            }
            out
        }
        Command::Education => {
            let mut out = String::from("Formación Académica:");
            for entry in content::education() {
                out.push_str(&format!(
                    "\n• {} - {} ({})",
                    entry.degree, entry.institution, entry.period
                ));
            }
            out
        }
        Command::Contact => {
            let contact = content::contact();
            format!(
                "Información de Contacto:\n• Email: {}\n• LinkedIn: {}\n• GitHub: {}",
                contact.email, contact.linkedin, contact.github
            )
        }
        Command::GitStatus => "On branch main\n\
Your branch is up to date with 'origin/main'.\n\
\n\
nothing to commit, working tree clean"
            .to_string(),
        Command::PythonVersion => "Python 3.10.4".to_string(),
        Command::DockerPs => {
            "CONTAINER ID   IMAGE     COMMAND   CREATED   STATUS    PORTS     NAMES".to_string()
        }
        Command::Clear => String::new(),
        Command::Whoami => "guest".to_string(),
        Command::Reboot => "Reiniciando...".to_string(),
        Command::Suspend => "Suspendiendo...".to_string(),
        Command::Shutdown => "Apagando...".to_string(),
    }
}

/// One displayed terminal line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermLine {
    /// Echo of an entered command, shown behind the prompt.
    Input(String),
    /// Command output (possibly multi-line).
    Output(String),
}

/// Append-only command history with reverse-index recall.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
    /// Reverse index into `entries`; `None` means the live prompt.
    cursor: Option<usize>,
}

impl History {
    /// Record an entered line. A line already present anywhere in the
    /// history is not appended again (plain `contains` check, nothing
    /// smarter).
    pub fn record(&mut self, line: &str) {
        if !line.is_empty() && !self.entries.iter().any(|e| e == line) {
            self.entries.push(line.to_string());
        }
        self.cursor = None;
    }

    /// Arrow-up: walk backward through history. Returns the recalled line.
    pub fn recall_back(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => 0,
            Some(i) if i + 1 < self.entries.len() => i + 1,
            Some(i) => i,
        };
        self.cursor = Some(next);
        Some(&self.entries[self.entries.len() - 1 - next])
    }

    /// Arrow-down: walk forward. `None` means past the newest entry, the
    /// caller restores the empty prompt.
    pub fn recall_forward(&mut self) -> Option<&str> {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                Some(&self.entries[self.entries.len() - i])
            }
            Some(0) => {
                self.cursor = None;
                None
            }
            _ => None,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

/// The interpreter driving one terminal window.
pub struct Interpreter {
    lines: Vec<TermLine>,
    history: History,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            lines: vec![TermLine::Output(WELCOME.to_string())],
            history: History::default(),
        }
    }

    /// Execute one input line.
    ///
    /// Appends the echo and output to the display list and records the
    /// history entry; returns a power event when the command requests one.
    pub fn execute(&mut self, input: &str) -> Option<PowerEvent> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.history.record(trimmed);
        self.lines.push(TermLine::Input(trimmed.to_string()));

        let normalized = trimmed.to_lowercase();
        match Command::parse(&normalized) {
            Some(Command::Clear) => {
                self.lines.clear();
                None
            }
            Some(command) => {
                self.lines.push(TermLine::Output(command_output(command)));
                match command {
                    Command::Reboot => Some(PowerEvent::Reboot),
                    Command::Suspend => Some(PowerEvent::Suspend),
                    Command::Shutdown => Some(PowerEvent::Shutdown),
                    _ => None,
                }
            }
            None => {
                self.lines.push(TermLine::Output(format!(
                    "Comando no encontrado: {trimmed}"
                )));
                None
            }
        }
    }

    pub fn lines(&self) -> &[TermLine] {
        &self.lines
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
