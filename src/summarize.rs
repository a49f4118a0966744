// Copyright 2022 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::BTreeSet;

use log::{error, info};

use bench_report::{load_trials, summarize, write_summary, Error, SummarizeConfig, VERSION};

fn main() {
    let config = SummarizeConfig::new();

    env_logger::Builder::new()
        .filter_level(config.logging())
        .init();

    info!("bench-summarize {}", VERSION);

    if let Err(e) = run(&config) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &SummarizeConfig) -> Result<(), Error> {
    let trials = load_trials(config.results())?;
    info!("loaded {} successful trial(s)", trials.len());

    let summary = summarize(&trials);
    write_summary(config.output(), &summary)?;

    let systems: BTreeSet<&str> = summary.iter().map(|s| s.system.as_str()).collect();
    let operations: BTreeSet<&str> = summary.iter().map(|s| s.operation.as_str()).collect();
    info!(
        "systems: {}",
        systems.into_iter().collect::<Vec<_>>().join(", ")
    );
    info!(
        "operations: {}",
        operations.into_iter().collect::<Vec<_>>().join(", ")
    );
    info!(
        "wrote {} summary row(s) to {}",
        summary.len(),
        config.output().display()
    );
    Ok(())
}
