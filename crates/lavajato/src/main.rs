// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lavajato - car-wash access control and order desk.
//!
//! This is the binary entry point for the Lavajato operator CLI.

mod app;
mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use lavajato_access::{
    accessible_routes, can_access, default_route_for, groups, permissions_for, RouteRegistry,
};
use lavajato_config::LavajatoConfig;
use lavajato_core::{LavajatoError, Role};
use lavajato_orders::{format_brl, OrderStatus, PriceTable};

use crate::app::{App, AppError};

/// Lavajato - car-wash access control and order desk.
#[derive(Parser, Debug)]
#[command(name = "lavajato", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the navigation menu a role sees.
    Nav {
        /// public, employee or admin.
        #[arg(long, default_value = "public")]
        role: Role,
        /// List every route the role may open instead of the menu.
        #[arg(long)]
        accessible: bool,
    },
    /// Check whether a role may open a route.
    Check {
        role: Role,
        /// Route identifier, e.g. `admin-users`.
        route: String,
    },
    /// List the statuses an order can move to.
    Transitions { status: OrderStatus },
    /// Price a service with add-ons.
    Quote {
        service: String,
        extras: Vec<String>,
    },
    /// Print the effective configuration.
    Config,
    /// Launch an interactive REPL session (default).
    Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let loaded = match &cli.config {
        Some(path) => lavajato_config::load_and_validate_path(path),
        None => lavajato_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            lavajato_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);

    let result = match cli.command {
        Some(Commands::Nav { role, accessible }) => cmd_nav(role, accessible),
        Some(Commands::Check { role, route }) => cmd_check(role, &route),
        Some(Commands::Transitions { status }) => {
            cmd_transitions(status);
            Ok(())
        }
        Some(Commands::Quote { service, extras }) => cmd_quote(&config, &service, &extras),
        Some(Commands::Config) => cmd_config(&config),
        Some(Commands::Shell) | None => match App::new(config) {
            Ok(app) => shell::run_shell(app).await.map_err(AppError::from),
            Err(e) => Err(AppError::from(e)),
        },
    };

    if let Err(e) = result {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

fn cmd_nav(role: Role, accessible: bool) -> Result<(), AppError> {
    let registry = RouteRegistry::standard()?;
    if accessible {
        for route in accessible_routes(&registry, role, None) {
            println!("{:<22} {}", route.as_str(), route.path().dimmed());
        }
    } else {
        shell::print_menu(&groups(&registry, role, &permissions_for(role)));
    }
    Ok(())
}

fn cmd_check(role: Role, route_id: &str) -> Result<(), AppError> {
    let registry = RouteRegistry::standard()?;
    let config = registry.config_of(route_id)?;

    if can_access(&registry, role, config.route, None) {
        println!("{} {role} may open {} ({})", "✓".green(), config.route, config.path());
    } else {
        let fallback = default_route_for(role);
        println!(
            "{} {role} may not open {}; redirected to {}",
            "✗".red(),
            config.route,
            fallback.path()
        );
    }
    Ok(())
}

fn cmd_transitions(status: OrderStatus) {
    println!("{} ({})", status.label().bold(), status);
    if status.is_terminal() {
        println!("  {}", "terminal".dimmed());
        return;
    }
    let next = status.next_status();
    for to in status.available_transitions() {
        let marker = if Some(*to) == next { "→" } else { " " };
        println!("  {marker} {:<12} {}", to.to_string(), to.label());
    }
}

fn cmd_quote(config: &LavajatoConfig, service: &str, extras: &[String]) -> Result<(), AppError> {
    let prices = PriceTable::from_config(&config.pricing);
    let total = prices.calculate_total(service, extras)?;
    println!("total     {}", format_brl(total).bold());
    if let Some(minutes) = prices.estimated_minutes(service, extras.len()) {
        println!("estimate  {minutes} min");
    }
    Ok(())
}

fn cmd_config(config: &LavajatoConfig) -> Result<(), AppError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| LavajatoError::Config(format!("failed to render configuration: {e}")))?;
    print!("{rendered}");
    Ok(())
}

/// Initialize the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lavajato={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}
