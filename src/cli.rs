// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use octofit_client::models::{Identity, Resource};

/// Browse and edit OctoFit Tracker records.
#[derive(Parser, Debug)]
#[command(name = "octofit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// API base URL (overrides OCTOFIT_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a resource collection
    List(ListArgs),
    /// Edit a user's name, email or team
    EditUser(EditUserArgs),
    /// Show the team names a user can be assigned to
    TeamsOptions,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// users, activities, teams, leaderboard or workouts
    pub resource: Resource,

    /// Print normalized records as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct EditUserArgs {
    /// User identity (`id` or `_id`)
    pub identity: Identity,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New email
    #[arg(long)]
    pub email: Option<String>,

    /// New team name (empty string for no team)
    #[arg(long)]
    pub team: Option<String>,
}
