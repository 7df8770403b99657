//! navhead - Navigation header state inspector

mod cli;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use navhead_core::{parse_script, theme, HeaderConfig, HeaderCoordinator};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "navhead",
    version,
    about = "Navigation header state inspector",
    long_about = "Resolve and replay the visual state of a responsive navigation header.\n\
                  \n\
                  The header reconciles scroll position, the overlay menu toggle and the\n\
                  current route into one theme (hero, scrolled or menu open).\n\
                  \n\
                  Examples:\n\
                    navhead resolve --scrolled           # Theme for a scrolled page\n\
                    navhead replay scenario.txt          # Replay host events\n\
                    navhead replay - --queued < s.txt    # Read script from stdin, deliver on 'pump'\n\
                    navhead links --route /about         # Active markers for a route\n\
                    navhead init                         # Write default config\n\
                  \n\
                  Environment Variables:\n\
                    NAVHEAD_CONFIG                       # Config file (.json or .toml)\n\
                    NAVHEAD_NO_COLOR                     # Disable ANSI colors\n\
                    NAVHEAD_LOG                          # Log filter (default: warn)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Header configuration file (default: <config_dir>/navhead/header.json if present)
    #[arg(long, global = true, env = "NAVHEAD_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "NAVHEAD_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the theme for a pair of flags
    Resolve {
        /// Page is scrolled past the threshold
        #[arg(long)]
        scrolled: bool,
        /// Overlay menu is open
        #[arg(long)]
        menu_open: bool,
    },
    /// Replay a script of host events against a mounted header
    Replay {
        /// Script file, or '-' for stdin
        script: PathBuf,
        /// Deliver scroll and route events only on explicit 'pump' steps
        #[arg(long)]
        queued: bool,
        /// Simulate a host without a scroll surface
        #[arg(long)]
        no_scroll_surface: bool,
    },
    /// List configured links with active markers
    Links {
        /// Current route (default: configured initial route)
        #[arg(long, short = 'r')]
        route: Option<String>,
    },
    /// Print the effective configuration
    Config,
    /// Write the default configuration to a file
    Init {
        /// Destination (default: <config_dir>/navhead/header.json)
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("NAVHEAD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Resolve {
            scrolled,
            menu_open,
        } => run_resolve(scrolled, menu_open, cli.json, cli.no_color),
        Command::Replay {
            script,
            queued,
            no_scroll_surface,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let options = cli::ReplayOptions {
                queued,
                no_scroll_surface,
            };
            run_replay(config, &script, options, cli.json, cli.no_color)
        }
        Command::Links { route } => {
            let config = load_config(cli.config.as_deref())?;
            run_links(config, route, cli.json, cli.no_color)
        }
        Command::Config => {
            let config = load_config(cli.config.as_deref())?;
            run_config(&config)
        }
        Command::Init { path, force } => run_init(path, force),
    }
}

/// Explicit path: strict. Default location: used only when it exists.
fn load_config(explicit: Option<&Path>) -> Result<HeaderConfig> {
    if let Some(path) = explicit {
        return HeaderConfig::from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    match HeaderConfig::default_path() {
        Some(path) if path.exists() => HeaderConfig::from_path(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        _ => {
            debug!("no config file, using defaults");
            Ok(HeaderConfig::default())
        }
    }
}

fn run_resolve(scrolled: bool, menu_open: bool, json: bool, no_color: bool) -> Result<()> {
    let resolved = theme::resolve(scrolled, menu_open);
    let accents = theme::resolve_accents(scrolled);
    println!(
        "{}",
        cli::format_resolution(scrolled, menu_open, &resolved, &accents, json, no_color)
    );
    Ok(())
}

fn run_replay(
    config: HeaderConfig,
    script: &Path,
    options: cli::ReplayOptions,
    json: bool,
    no_color: bool,
) -> Result<()> {
    let source = if script == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read script from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(script)
            .with_context(|| format!("Failed to read script {}", script.display()))?
    };

    let steps = match parse_script(&source) {
        Ok(steps) => steps,
        Err(e) => {
            if let Some(hint) = e.suggestion() {
                eprintln!("hint: {}", hint);
            }
            return Err(e).context("Invalid replay script");
        }
    };

    info!(steps = steps.len(), queued = options.queued, "replaying script");
    let rows = cli::replay(config, &steps, options);
    println!("{}", cli::format_replay(&rows, json, no_color));
    Ok(())
}

fn run_links(config: HeaderConfig, route: Option<String>, json: bool, no_color: bool) -> Result<()> {
    let mut header = HeaderCoordinator::new(config);
    if let Some(route) = route {
        if !route.starts_with('/') {
            bail!("Route must start with '/' (got '{}')", route);
        }
        header.on_route_change(route);
    }

    println!(
        "{}",
        cli::format_links(&header.link_views(), header.route(), json, no_color)
    );
    Ok(())
}

fn run_config(config: &HeaderConfig) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(config).context("Failed to serialize configuration")?;
    println!("{}", rendered);
    Ok(())
}

fn run_init(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => HeaderConfig::default_path().context("Could not determine config directory")?,
    };

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    HeaderConfig::default()
        .save(&path)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    println!("Wrote default header config to {}", path.display());
    Ok(())
}
