// Copyright 2022 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::{Path, PathBuf};

use clap::{App, Arg};
use log::LevelFilter;

use crate::VERSION;

fn verbosity(occurrences: u64) -> LevelFilter {
    match occurrences {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Configuration for the summarizer binary.
pub struct SummarizeConfig {
    results: PathBuf,
    output: PathBuf,
    logging: LevelFilter,
}

impl SummarizeConfig {
    pub fn new() -> Self {
        let matches = App::new("bench-summarize")
            .version(VERSION)
            .about("Aggregates raw benchmark trials into summary statistics")
            .arg(
                Arg::with_name("results")
                    .short("r")
                    .long("results")
                    .value_name("DIR")
                    .help("Directory holding raw per-trial CSV files")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("output")
                    .short("o")
                    .long("output")
                    .value_name("FILE")
                    .help("Path for the summary CSV")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("verbose")
                    .short("v")
                    .long("verbose")
                    .multiple(true)
                    .help("Increase verbosity"),
            )
            .get_matches();

        let results = PathBuf::from(matches.value_of("results").unwrap_or("results"));
        let output = matches
            .value_of("output")
            .map(PathBuf::from)
            .unwrap_or_else(|| results.join("results_summary.csv"));
        let logging = verbosity(matches.occurrences_of("verbose"));

        Self {
            results,
            output,
            logging,
        }
    }

    pub fn results(&self) -> &Path {
        &self.results
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn logging(&self) -> LevelFilter {
        self.logging
    }
}

/// Configuration for the plotter binary.
pub struct PlotConfig {
    summary: PathBuf,
    output: PathBuf,
    logging: LevelFilter,
}

impl PlotConfig {
    pub fn new() -> Self {
        let matches = App::new("bench-plot")
            .version(VERSION)
            .about("Renders comparison charts from a benchmark summary CSV")
            .arg(
                Arg::with_name("summary")
                    .short("s")
                    .long("summary")
                    .value_name("FILE")
                    .help("Summary CSV produced by bench-summarize")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("output")
                    .short("o")
                    .long("output")
                    .value_name("DIR")
                    .help("Directory for rendered charts, created if absent")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("verbose")
                    .short("v")
                    .long("verbose")
                    .multiple(true)
                    .help("Increase verbosity"),
            )
            .get_matches();

        let summary = PathBuf::from(
            matches
                .value_of("summary")
                .unwrap_or("results/results_summary.csv"),
        );
        let output = PathBuf::from(matches.value_of("output").unwrap_or("results/plots"));
        let logging = verbosity(matches.occurrences_of("verbose"));

        Self {
            summary,
            output,
            logging,
        }
    }

    pub fn summary(&self) -> &Path {
        &self.summary
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn logging(&self) -> LevelFilter {
        self.logging
    }
}

impl Default for SummarizeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(verbosity(0), LevelFilter::Info);
        assert_eq!(verbosity(1), LevelFilter::Debug);
        assert_eq!(verbosity(2), LevelFilter::Trace);
        assert_eq!(verbosity(5), LevelFilter::Trace);
    }
}
