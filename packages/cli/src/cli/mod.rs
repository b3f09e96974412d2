pub(crate) mod check;
pub(crate) mod replay;
pub(crate) mod resolve;
pub(crate) mod verbosity;

pub(crate) use verbosity::*;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use waypoint_router::{Location, RouteTable, RouteView};

/// Inspect and exercise waypoint route tables.
#[derive(Parser)]
#[clap(name = "waypoint", version)]
pub(crate) struct Cli {
    #[clap(subcommand)]
    pub(crate) action: Commands,

    #[clap(flatten)]
    pub(crate) verbosity: Verbosity,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Validate a route table and list its routes.
    Check(check::Check),

    /// Show which view each path resolves to.
    Resolve(resolve::Resolve),

    /// Replay a navigation session against a route table.
    Replay(replay::Replay),
}

/// Load the route table, attaching the file name to any failure.
pub(crate) fn load_table(path: &Path) -> anyhow::Result<RouteTable> {
    RouteTable::load(path).with_context(|| format!("failed to load routes from {}", path.display()))
}

/// One line describing where a [`Location`] points.
pub(crate) fn describe(location: &Location) -> String {
    let mut line = location.path.clone();
    if let Some(query) = &location.query {
        line.push('?');
        line.push_str(query);
    }

    match (&location.view, &location.name) {
        (RouteView::Resolved(view), Some(name)) => format!("{line} -> {view} ({name})"),
        (RouteView::Resolved(view), None) => format!("{line} -> {view}"),
        (RouteView::NotFound, _) => format!("{line} -> not found"),
    }
}

/// The file holding the route table.
#[derive(Clone, Debug, Parser)]
pub(crate) struct RoutesArg {
    /// Path to the TOML route table
    pub(crate) routes: PathBuf,
}
