// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `lavajato shell` command implementation.
//!
//! Launches an interactive REPL with colored prompt and readline history.
//! The prompt shows the signed-in role and the current route; every
//! command goes through the same guards the web front-end uses.

use colored::Colorize;
use lavajato_access::{Breadcrumb, NavigationGroup, RouteDecision};
use lavajato_core::{LavajatoError, OrderId};
use lavajato_orders::{format_brl, DashboardStats, Order, OrderDraft, OrderStatus};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::app::App;

const HELP: &str = "\
commands:
  login <email> <password>     sign in
  logout                       sign out
  whoami                       show the signed-in user
  go <route>                   open a route (id or path)
  nav                          show the navigation menu
  routes                       list every route you may open
  order <service> <phone> <name...> [+extra ...]
                               place an order
  track <id>                   tracking message for an order
  list [status]                list orders
  advance <id>                 move an order to its next status
  status <id> <status>         move an order to a given status
  delete <id>                  delete an order
  dashboard                    today's figures
  /quit                        leave the shell";

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    Login { email: String, password: String },
    Logout,
    WhoAmI,
    Go(String),
    Nav,
    Routes,
    Order {
        service: String,
        phone: String,
        name: String,
        extras: Vec<String>,
    },
    Track(OrderId),
    List(Option<OrderStatus>),
    Advance(OrderId),
    Status(OrderId, OrderStatus),
    Delete(OrderId),
    Dashboard,
}

fn parse_status(raw: &str) -> Result<OrderStatus, String> {
    raw.parse()
        .map_err(|_| format!("unknown status `{raw}`"))
}

/// Parse one non-empty shell line.
pub fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = words.split_first() else {
        return Err("empty command".to_string());
    };

    match (head, args) {
        ("help" | "?", []) => Ok(ShellCommand::Help),
        ("login", [email, password]) => Ok(ShellCommand::Login {
            email: email.to_string(),
            password: password.to_string(),
        }),
        ("logout", []) => Ok(ShellCommand::Logout),
        ("whoami", []) => Ok(ShellCommand::WhoAmI),
        ("go", [route]) => Ok(ShellCommand::Go(route.to_string())),
        ("nav", []) => Ok(ShellCommand::Nav),
        ("routes", []) => Ok(ShellCommand::Routes),
        ("order", [service, phone, rest @ ..]) => {
            let (extras, name): (Vec<&str>, Vec<&str>) =
                rest.iter().copied().partition(|word| word.starts_with('+'));
            if name.is_empty() {
                return Err("usage: order <service> <phone> <name...> [+extra ...]".to_string());
            }
            Ok(ShellCommand::Order {
                service: service.to_string(),
                phone: phone.to_string(),
                name: name.join(" "),
                extras: extras
                    .iter()
                    .map(|extra| extra.trim_start_matches('+').to_string())
                    .collect(),
            })
        }
        ("track", [id]) => Ok(ShellCommand::Track(OrderId::from(*id))),
        ("list", []) => Ok(ShellCommand::List(None)),
        ("list", [status]) => Ok(ShellCommand::List(Some(parse_status(status)?))),
        ("advance", [id]) => Ok(ShellCommand::Advance(OrderId::from(*id))),
        ("status", [id, status]) => Ok(ShellCommand::Status(
            OrderId::from(*id),
            parse_status(status)?,
        )),
        ("delete", [id]) => Ok(ShellCommand::Delete(OrderId::from(*id))),
        ("dashboard", []) => Ok(ShellCommand::Dashboard),
        _ => Err(format!("unrecognized command `{line}`; type `help`")),
    }
}

/// Runs the `lavajato shell` interactive REPL.
pub async fn run_shell(mut app: App) -> Result<(), LavajatoError> {
    let mut rl = DefaultEditor::new().map_err(|e| {
        LavajatoError::Internal(format!("failed to initialize readline: {e}"))
    })?;

    println!("{}", app.config.app.name.bold().green());
    println!("Type {} for commands, {} to exit.\n", "help".yellow(), "/quit".yellow());
    debug!(store = app.session.store_name(), "shell started");

    loop {
        let role = app.session.role().await;
        let prompt = format!(
            "{} {}> ",
            role.to_string().green(),
            app.current_route().path().cyan()
        );

        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                match parse_command(trimmed) {
                    Ok(command) => execute(&mut app, command).await,
                    Err(message) => eprintln!("{}: {message}", "error".red()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "até logo".dimmed());
    Ok(())
}

async fn execute(app: &mut App, command: ShellCommand) {
    let outcome = match command {
        ShellCommand::Help => {
            println!("{HELP}");
            Ok(())
        }
        ShellCommand::Login { email, password } => match app.login(&email, &password).await {
            Ok(user) => {
                println!("signed in as {} ({})", user.name.bold(), user.role);
                if app.desk_enabled().await {
                    println!("{}", "order desk: list, advance, status, delete".dimmed());
                }
                Ok(())
            }
            Err(err) => Err(err),
        },
        ShellCommand::Logout => {
            match app.logout().await {
                Some(user) => println!("signed out {}", user.name),
                None => println!("{}", "not signed in".dimmed()),
            }
            Ok(())
        }
        ShellCommand::WhoAmI => {
            match app.session.current().await {
                Some(user) => println!("{} <{}> {}", user.name.bold(), user.email, user.role),
                None => println!("{}", "anonymous".dimmed()),
            }
            Ok(())
        }
        ShellCommand::Go(route) => {
            let decision = app.navigate(&route).await;
            print_decision(&decision);
            if decision.is_allowed() {
                print_trail(&app.trail());
            }
            Ok(())
        }
        ShellCommand::Nav => {
            print_menu(&app.menu().await);
            Ok(())
        }
        ShellCommand::Routes => {
            for route in app.reachable().await {
                println!("  {:<22} {}", route.as_str(), route.path().dimmed());
            }
            Ok(())
        }
        ShellCommand::Order {
            service,
            phone,
            name,
            extras,
        } => {
            let draft = extras
                .into_iter()
                .fold(OrderDraft::new(name, phone, service), |draft, extra| {
                    draft.with_extra(extra)
                });
            app.place_order(draft).await.map(|order| {
                println!("order {} placed", order.id.to_string().bold());
                print_order(&order);
            })
        }
        ShellCommand::Track(id) => app.track(&id).await.map(|(order, message)| {
            print_order(&order);
            println!("  {}", message.italic());
        }),
        ShellCommand::List(status) => app.list_orders(status).await.map(|orders| {
            if orders.is_empty() {
                println!("{}", "no orders".dimmed());
            }
            orders.iter().for_each(print_order);
        }),
        ShellCommand::Advance(id) => app.advance(&id).await.map(|order| print_order(&order)),
        ShellCommand::Status(id, status) => {
            app.set_status(&id, status).await.map(|order| print_order(&order))
        }
        ShellCommand::Delete(id) => app.delete(&id).await.map(|order| {
            println!("order {} deleted", order.id);
        }),
        ShellCommand::Dashboard => app.dashboard().await.map(|stats| print_dashboard(&stats)),
    };

    if let Err(err) = outcome {
        eprintln!("{}: {err}", "error".red());
    }
}

fn print_decision(decision: &RouteDecision) {
    match decision {
        RouteDecision::Allowed(route) => println!("{} {}", "→".green(), route.path()),
        RouteDecision::LoginRequired { route } => {
            println!("{} {} requires login", "⚠".yellow(), route.path());
        }
        RouteDecision::AccessDenied { route, fallback } => println!(
            "{} access denied to {}; back to {}",
            "✗".red(),
            route.path(),
            fallback.path()
        ),
        RouteDecision::NotFound { requested } => {
            println!("{} `{requested}` not found", "?".yellow());
        }
    }
}

fn print_trail(trail: &[Breadcrumb]) {
    let labels: Vec<&str> = trail.iter().map(|crumb| crumb.label).collect();
    println!("  {}", labels.join(" › ").dimmed());
}

pub(crate) fn print_menu(groups: &[NavigationGroup]) {
    for group in groups {
        println!("{}", group.label.bold());
        for item in &group.items {
            println!("  {:<24} {}", item.label, item.path.dimmed());
        }
    }
}

fn print_order(order: &Order) {
    let status = match order.status {
        OrderStatus::Ready => order.status.label().green(),
        OrderStatus::Completed => order.status.label().dimmed(),
        OrderStatus::Cancelled => order.status.label().red(),
        _ => order.status.label().yellow(),
    };
    println!(
        "{:>5}  {:<20} {:<10} {:<14} {}",
        order.id.to_string(),
        order.customer_name,
        order.service,
        format_brl(order.total_cents),
        status
    );
}

fn print_dashboard(stats: &DashboardStats) {
    println!("{}", "Dashboard".bold());
    println!("  orders today     {}", stats.today_orders);
    println!("  pending          {}", stats.pending);
    println!("  in progress      {}", stats.in_progress);
    println!("  ready            {}", stats.ready);
    println!("  completed today  {}", stats.completed_today);
    println!("  revenue today    {}", format_brl(stats.today_revenue_cents));
    println!("  total revenue    {}", format_brl(stats.total_revenue_cents));
    println!("  average ticket   {}", format_brl(stats.average_ticket_cents));
    if !stats.recent.is_empty() {
        println!("{}", "Recent".bold());
        stats.recent.iter().for_each(print_order);
    }
}
