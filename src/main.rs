// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OctoFit command-line client
//!
//! Lists OctoFit Tracker collections and edits user records against the
//! configured API.

mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use validator::Validate;

use cli::{Cli, Commands, EditUserArgs, ListArgs};
use octofit_client::{
    config::Config,
    models::{EditableField, Resource},
    services::SubmitState,
    views::{render_resource, Rendered, UsersView},
    AppState,
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    // Load configuration from environment
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(url) = &cli.api_url {
        config = config
            .with_api_base_url(url)
            .context("Invalid --api-url")?;
    }
    tracing::info!(api = %config.api_base_url, "Starting OctoFit client");

    let state = AppState::new(config).context("Failed to initialize API client")?;

    match cli.command {
        Commands::List(args) => list(&state, args).await,
        Commands::EditUser(args) => edit_user(&state, args).await,
        Commands::TeamsOptions => teams_options(&state).await,
    }
}

/// Fetch one collection and print it.
async fn list(state: &AppState, args: ListArgs) -> Result<ExitCode> {
    eprint!("{}", Rendered::Loading);
    let collection = state.fetcher.fetch(args.resource).await;

    if args.json {
        if let Some(records) = collection.records() {
            println!("{}", serde_json::to_string_pretty(records)?);
            return Ok(ExitCode::SUCCESS);
        }
    }

    let rendered = render_resource(args.resource, &collection);
    if let Rendered::Error(_) = rendered {
        eprint!("{rendered}");
        return Ok(ExitCode::FAILURE);
    }
    print!("{rendered}");
    Ok(ExitCode::SUCCESS)
}

/// Edit one user: load, apply the given fields, validate, save.
async fn edit_user(state: &AppState, args: EditUserArgs) -> Result<ExitCode> {
    let mut view = UsersView::new(state.config.save_close_delay);
    view.load(&state.fetcher).await;
    if let Some(reason) = view.collection().error() {
        eprint!("{}", Rendered::Error(reason.to_string()));
        return Ok(ExitCode::FAILURE);
    }
    view.load_team_options(&state.fetcher).await;

    view.begin_edit(&args.identity)
        .with_context(|| format!("Cannot edit user {}", args.identity))?;

    if let Some(team) = args.team.as_deref() {
        let options = view.team_options();
        if !team.is_empty() && !options.is_empty() && !options.iter().any(|t| t == team) {
            eprintln!("✗ Unknown team `{team}` (choices: {})", options.join(", "));
            return Ok(ExitCode::FAILURE);
        }
    }

    let changes = [
        (EditableField::Name, args.name),
        (EditableField::Email, args.email),
        (EditableField::Team, args.team),
    ];
    for (field, value) in changes {
        if let Some(value) = value {
            view.update_field(field, value)?;
        }
    }

    if let Some(session) = view.edit_session() {
        if let Err(e) = session.form().validate() {
            eprintln!("✗ {e}");
            return Ok(ExitCode::FAILURE);
        }
    }

    match view.submit(&state.api).await? {
        SubmitState::Succeeded => {
            println!("✓ User updated successfully!");
            view.wait_for_auto_close().await;
            print!("{}", view.render());
            Ok(ExitCode::SUCCESS)
        }
        SubmitState::Failed(reason) => {
            eprintln!("✗ Error: {reason}");
            Ok(ExitCode::FAILURE)
        }
        other => {
            tracing::warn!(state = ?other, "Save finished in an unexpected state");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Print the team names offered in the user form.
async fn teams_options(state: &AppState) -> Result<ExitCode> {
    let mut view = UsersView::new(state.config.save_close_delay);
    view.load_team_options(&state.fetcher).await;

    if view.team_options().is_empty() {
        eprintln!("No {} available.", Resource::Teams);
    }
    for team in view.team_options() {
        println!("{team}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Initialize structured logging (text by default, JSON on request).
fn init_logging(verbosity: u8, json: bool) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{level},octofit_client={level},octofit={level}"))
    });

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
