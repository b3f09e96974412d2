//! CLI tracing.
//!
//! Logs go to stderr so they never mix with the command output on stdout. The filter comes from
//! `WAYPOINT_LOG` when set, otherwise from the verbosity flags.

use std::env;

use tracing_subscriber::{prelude::*, EnvFilter};

use crate::Verbosity;

const LOG_ENV: &str = "WAYPOINT_LOG";

pub(crate) fn initialize(verbosity: &Verbosity) {
    let filter = match env::var(LOG_ENV) {
        Ok(_) => EnvFilter::from_env(LOG_ENV),
        Err(_) => EnvFilter::new(default_directives(verbosity)),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(verbosity.verbose || verbosity.trace)
        .without_time()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn default_directives(verbosity: &Verbosity) -> &'static str {
    if verbosity.trace {
        "warn,waypoint_router=trace,waypoint_history=trace,waypoint=trace"
    } else if verbosity.verbose {
        "warn,waypoint_router=debug,waypoint_history=debug,waypoint=debug"
    } else if verbosity.quiet {
        "error"
    } else {
        "warn"
    }
}
