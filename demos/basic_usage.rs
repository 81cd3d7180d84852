//! Basic usage: structured backend with a console subscriber.
//!
//! Run with: cargo run --example basic_usage

use logspool::prelude::*;
use logspool::{debug, error, info, notice, warning};

fn main() {
    // The structured backend hands records to whatever tracing subscriber
    // the host installs; a console one makes them visible here.
    tracing_subscriber::fmt().init();

    let logger = Logger::init().expect("failed to start the logger");

    info!(logger, "application started");
    debug!(logger, "loaded {} configuration entries", 12);
    notice!(logger, "configuration reloaded");
    warning!(logger, "disk space below {}%", 10);
    error!(logger, "failed to reach peer {}", "10.0.0.7");

    logger.shutdown();
}
