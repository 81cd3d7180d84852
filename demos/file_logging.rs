//! File logging: switch the backend to a file, then back.
//!
//! Run with: cargo run --example file_logging

use logspool::prelude::*;
use logspool::{info, warning};

fn main() {
    tracing_subscriber::fmt().init();

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("demo.log");

    let logger = Logger::init().expect("failed to start the logger");

    logger
        .switch_to_file(&path)
        .expect("failed to open the log file");
    info!(logger, "these lines go to {}", path.display());
    warning!(logger, "low disk space");

    // Back to the structured backend; the file is closed.
    logger.close_file();
    info!(logger, "and this one goes to the structured facility");

    logger.shutdown();

    let content = std::fs::read_to_string(&path).expect("failed to read the log file");
    println!("--- {} ---", path.display());
    print!("{}", content);
}
