// Copyright 2022 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use log::{error, info};

use bench_report::{plot_vs_clients, plot_vs_file_size, read_summary, Error, PlotConfig, VERSION};

fn main() {
    let config = PlotConfig::new();

    env_logger::Builder::new()
        .filter_level(config.logging())
        .init();

    info!("bench-plot {}", VERSION);

    if let Err(e) = run(&config) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &PlotConfig) -> Result<(), Error> {
    let summary = read_summary(config.summary())?;
    info!("loaded {} summary row(s)", summary.len());

    let clients = plot_vs_clients(&summary, config.output())?;
    let sizes = plot_vs_file_size(&summary, config.output())?;
    info!(
        "rendered {} chart(s) into {}",
        clients.len() + sizes.len(),
        config.output().display()
    );
    Ok(())
}
