//! Portfolio OS — Daniel's portfolio as a terminal operating system.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::sync::Arc;

use crate::api::{self, Endpoint, Latency};
use crate::assets::AssetStore;
use crate::config::Settings;
use crate::i18n::Language;
use crate::observability::init_tracing;
use crate::router;
use crate::term::{Interpreter, TermLine, PROMPT};
use crate::tui;
use crate::ui::theme::{current_theme, ThemeId};

#[derive(Parser)]
#[command(name = "portfolio-os")]
#[command(about = "Daniel's portfolio as a terminal operating system")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Settings file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Desktop theme: ubuntu (default), vscode, matrix
    #[arg(long, value_enum)]
    theme: Option<ThemeId>,

    /// Interface language: es (default), en
    #[arg(long, value_enum)]
    lang: Option<Language>,

    /// Client descriptor for shell routing (mobile agents get the compact shell)
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Disable decorative animations (boot splash, latency, rain)
    #[arg(long)]
    no_animations: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Boot the portfolio OS (default when no subcommand is given)
    #[command(alias = "b")]
    Boot,

    /// Run one terminal command without the TUI
    #[command(alias = "t")]
    Term {
        /// The command line, e.g. "help" or "git status"
        line: Vec<String>,
    },

    /// List the API catalog, or send one request and print the response
    #[command(alias = "e")]
    Endpoints {
        /// Request key to send, e.g. "GET /about"
        #[arg(long, value_name = "KEY")]
        send: Option<String>,
    },

    /// Install the offline asset cache and report what landed
    Cache {
        /// Also download the CV into the current directory
        #[arg(long)]
        download_cv: bool,
    },

    /// Show the resolved settings
    Config,
}

pub async fn run() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(theme) = cli.theme {
        settings.theme = theme;
    }
    if let Some(lang) = cli.lang {
        settings.language = lang;
    }
    if let Some(ua) = cli.user_agent {
        settings.user_agent = ua;
    }
    if cli.no_animations {
        settings.ui.animations = false;
    }
    settings.apply_ui_settings();

    match cli.command {
        None | Some(Commands::Boot) => boot(settings).await,
        Some(Commands::Term { line }) => run_term(&line.join(" ")),
        Some(Commands::Endpoints { send }) => run_endpoints(&settings, send.as_deref()).await,
        Some(Commands::Cache { download_cv }) => run_cache(&settings, download_cv),
        Some(Commands::Config) => show_config(&settings),
    }
}

async fn boot(settings: Settings) -> Result<()> {
    let assets = Arc::new(AssetStore::with_root(&settings.assets.root));
    // A missing asset root only costs the offline cache, never the boot.
    if let Err(e) = assets.install() {
        tracing::warn!(error = %e, "asset cache install failed");
    }
    tui::run(settings, assets).await
}

fn run_term(line: &str) -> Result<()> {
    let colors = current_theme();
    let mut term = Interpreter::new();
    term.execute(line);
    for out in term.lines() {
        match out {
            TermLine::Input(text) => {
                println!("{} {}", PROMPT.custom_color(colors.prompt), text)
            }
            TermLine::Output(text) => println!("{text}"),
        }
    }
    Ok(())
}

async fn run_endpoints(settings: &Settings, send: Option<&str>) -> Result<()> {
    let colors = current_theme();
    match send {
        None => {
            println!("{}", "Portfolio Backend API v3.0".custom_color(colors.accent).bold());
            for endpoint in Endpoint::ALL {
                println!(
                    "  {:<5} {:<16} {}",
                    endpoint.method().as_str().custom_color(colors.prompt),
                    endpoint.path(),
                    endpoint.name(settings.language).custom_color(colors.muted),
                );
            }
        }
        Some(key) => {
            let latency = if settings.ui.animations {
                Latency::DEFAULT
            } else {
                Latency::none()
            };
            latency.simulate().await;
            let response = api::respond_to_key(key, settings.language);
            let status = format!("{} {}", response.status, response.status_label());
            let status = if response.status == 200 {
                status.custom_color(colors.prompt)
            } else {
                status.red()
            };
            println!("{status}  {}ms", response.response_time_ms);
            println!("{}", serde_json::to_string_pretty(&response.body)?);
        }
    }
    Ok(())
}

fn run_cache(settings: &Settings, download_cv: bool) -> Result<()> {
    let colors = current_theme();
    let assets = AssetStore::with_root(&settings.assets.root);
    match assets.install() {
        Ok(()) => {
            println!(
                "{} {}",
                "Cache installed:".custom_color(colors.accent).bold(),
                assets.name()
            );
            for url in assets.cached_urls() {
                println!("  {} {url}", "✔".custom_color(colors.prompt));
            }
        }
        Err(e) => {
            println!("{} {e}", "✗".red());
        }
    }
    if download_cv {
        let dest = std::env::current_dir()?;
        let path = assets.download_cv(&dest)?;
        println!("{} {}", "CV →".custom_color(colors.accent), path.display());
    }
    Ok(())
}

fn show_config(settings: &Settings) -> Result<()> {
    let colors = current_theme();
    let shell = match router::shell_for(&settings.user_agent) {
        router::Shell::Desktop => "desktop",
        router::Shell::Compact => "compact",
    };
    println!("{}", "portfolio-os settings".custom_color(colors.accent).bold());
    println!("  file       {}", match &settings.path {
        Some(p) => p.display().to_string(),
        None => "(defaults)".to_string(),
    });
    println!("  language   {}", settings.language);
    println!("  theme      {}", settings.theme);
    println!("  shell      {shell}");
    println!("  animations {}", settings.ui.animations);
    println!("  asset root {}", settings.assets.root.display());
    Ok(())
}
