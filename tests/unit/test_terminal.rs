//! Unit tests for the terminal interpreter
//!
//! Tests cover:
//! - Exact help text
//! - clear semantics
//! - "not found" fallback with the original input
//! - Power command side effects
//! - History dedup and arrow recall

use portfolio_os::term::{Command, History, Interpreter, PowerEvent, TermLine, HELP_TEXT, WELCOME};

fn last_output(term: &Interpreter) -> &str {
    match term.lines().last() {
        Some(TermLine::Output(text)) => text,
        other => panic!("expected output line, got {other:?}"),
    }
}

mod dispatch_tests {
    use super::*;

    #[test]
    fn test_welcome_banner_on_open() {
        let term = Interpreter::new();
        assert_eq!(term.lines().len(), 1);
        assert_eq!(last_output(&term), WELCOME);
    }

    #[test]
    fn test_help_matches_fixed_text() {
        let mut term = Interpreter::new();
        term.execute("help");
        assert_eq!(last_output(&term), HELP_TEXT);
    }

    #[test]
    fn test_help_lists_every_command() {
        for name in [
            "about", "skills", "experience", "projects", "education", "contact", "git status",
            "python --version", "docker ps", "clear", "whoami", "reboot", "suspend", "shutdown",
        ] {
            assert!(HELP_TEXT.contains(name), "help is missing {name}");
        }
    }

    #[test]
    fn test_input_normalization() {
        assert_eq!(Command::parse("help"), Some(Command::Help));
        assert_eq!(Command::parse("git status"), Some(Command::GitStatus));
        assert_eq!(Command::parse("gitstatus"), None);

        let mut term = Interpreter::new();
        term.execute("  GIT STATUS  ");
        assert!(last_output(&term).contains("working tree clean"));
    }

    #[test]
    fn test_unknown_command_fallback() {
        let mut term = Interpreter::new();
        term.execute("foobar");
        let output = last_output(&term);
        assert!(output.contains("foobar"));
        assert!(output.contains("Comando no encontrado"));
    }

    #[test]
    fn test_clear_empties_display_only() {
        let mut term = Interpreter::new();
        term.execute("help");
        term.execute("about");
        term.execute("clear");
        assert!(term.lines().is_empty());
        // History survives the clear.
        assert_eq!(term.history().entries().len(), 3);
    }

    #[test]
    fn test_power_commands() {
        let mut term = Interpreter::new();
        assert_eq!(term.execute("reboot"), Some(PowerEvent::Reboot));
        assert_eq!(last_output(&term), "Reiniciando...");
        assert_eq!(term.execute("suspend"), Some(PowerEvent::Suspend));
        assert_eq!(last_output(&term), "Suspendiendo...");
        assert_eq!(term.execute("shutdown"), Some(PowerEvent::Shutdown));
        assert_eq!(last_output(&term), "Apagando...");
    }

    #[test]
    fn test_content_commands_have_output() {
        for command in ["about", "skills", "experience", "projects", "education", "contact"] {
            let mut term = Interpreter::new();
            term.execute(command);
            assert!(!last_output(&term).is_empty(), "{command}");
        }
    }
}

mod history_tests {
    use super::*;

    #[test]
    fn test_append_only_with_contains_dedup() {
        let mut history = History::default();
        history.record("help");
        history.record("about");
        history.record("help");
        history.record("about");
        assert_eq!(history.entries(), &["help".to_string(), "about".to_string()]);
    }

    #[test]
    fn test_reverse_index_walk() {
        let mut history = History::default();
        for line in ["one", "two", "three"] {
            history.record(line);
        }
        assert_eq!(history.recall_back(), Some("three"));
        assert_eq!(history.recall_back(), Some("two"));
        assert_eq!(history.recall_back(), Some("one"));
        assert_eq!(history.recall_back(), Some("one"));
    }

    #[test]
    fn test_forward_past_newest_restores_prompt() {
        let mut history = History::default();
        history.record("one");
        history.record("two");
        history.recall_back();
        history.recall_back();
        assert_eq!(history.recall_forward(), Some("two"));
        assert_eq!(history.recall_forward(), None);
    }

    #[test]
    fn test_recall_on_empty_history() {
        let mut history = History::default();
        assert_eq!(history.recall_back(), None);
        assert_eq!(history.recall_forward(), None);
    }

    #[test]
    fn test_executing_resets_cursor() {
        let mut term = Interpreter::new();
        term.execute("one");
        term.execute("two");
        assert_eq!(term.history_mut().recall_back(), Some("two"));
        term.execute("three");
        assert_eq!(term.history_mut().recall_back(), Some("three"));
    }
}
