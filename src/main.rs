// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use the_switchyard::config::{load_and_validate_config, Components, RuntimeBuilder};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 4 {
        eprintln!("Usage: {} <routes.yaml|routes.toml> <entry> <body> [body ...]", args[0]);
        eprintln!("Example: {} configs/exception-spike.yaml direct:foo foo error grok heisenbug", args[0]);
        eprintln!("Logging: RUST_LOG=the_switchyard=debug {} ...", args[0]);
        std::process::exit(1);
    }

    let config_file = &args[1];
    let entry = args[2].clone();
    let bodies = &args[3..];

    let config = load_and_validate_config(config_file)
        .with_context(|| format!("loading '{}'", config_file))?;
    let router = Arc::new(
        RuntimeBuilder::from_config(&config, &Components::new())
            .with_context(|| format!("building routes from '{}'", config_file))?,
    );

    if !router.routes().contains(&entry) {
        bail!("no route in '{}' consumes from '{}'", config_file, entry);
    }

    let start_time = Instant::now();

    // One blocking task per body; dispatch itself is synchronous.
    let handles: Vec<_> = bodies
        .iter()
        .cloned()
        .map(|body| {
            let router = Arc::clone(&router);
            let entry = entry.clone();
            tokio::task::spawn_blocking(move || router.dispatch(&entry, body))
        })
        .collect();

    let mut failures = 0;
    for (body, handle) in bodies.iter().zip(handles) {
        let message = handle
            .await
            .context("dispatch task panicked")?
            .with_context(|| format!("dispatching '{}'", body))?;
        if message.is_failed() {
            failures += 1;
        }
        println!("{}", serde_json::to_string(&message)?);
    }

    eprintln!(
        "{} message(s) dispatched to '{}' in {:?}: {} failed",
        bodies.len(),
        entry,
        start_time.elapsed(),
        failures
    );

    Ok(())
}
