//! inventory-tui - A terminal UI for the inventory backend
//!
//! This is the main entry point for the inventory-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod model;
mod services;
mod theme;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use std::fs;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

struct CliArgs {
    api_url: Option<String>,
    alert_id: Option<i64>,
}

fn print_usage() {
    eprintln!("Usage: inventory-tui [--api-url <url>] [--alert <id>]");
    eprintln!();
    eprintln!("  --api-url <url>  Backend base URL (default from config, else http://localhost:8000)");
    eprintln!("  --alert <id>     Open the Alerts screen focused on the given alert");
}

fn parse_args() -> Result<CliArgs> {
    let mut args = CliArgs {
        api_url: None,
        alert_id: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--api-url" => {
                args.api_url = Some(
                    iter.next()
                        .ok_or_else(|| anyhow::anyhow!("--api-url requires a value"))?,
                );
            }
            "--alert" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--alert requires a value"))?;
                args.alert_id = Some(value.parse()?);
            }
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                print_usage();
                anyhow::bail!("unknown argument: {}", other);
            }
        }
    }
    Ok(args)
}

/// Log to a file under the config directory; the terminal is owned by the TUI.
fn init_logging() {
    let Some(dir) = Config::config_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = fs::File::create(dir.join("inventory-tui.log")) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let args = parse_args()?;
    init_logging();

    let mut config = Config::load_or_default();
    if let Some(api_url) = args.api_url {
        // An explicit override becomes the new default for later runs.
        config.api_url = api_url;
        if let Err(err) = config.save() {
            tracing::warn!("could not persist config: {}", err);
        }
    }

    // Setup terminal
    let mut tui = Tui::new()?;
    tui.enter()?;

    // Create app state
    let mut app = App::new(&config);
    if let Some(id) = args.alert_id {
        app.open_alert(id);
    }

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                eprintln!("Draw error: {}", e);
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Process the action
            if let Some(action) = action {
                // Action might produce a follow-up action
                let mut current_action = Some(action);
                while let Some(a) = current_action {
                    current_action = app.update(a)?;
                }
            }
        } else {
            // No event - send a tick so background results get drained
            app.update(Action::Tick)?;
        }
    }
    Ok(())
}
