// Copyright 2022 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Offline analysis for messaging/RPC benchmark results. The harness under
//! test writes one CSV row per trial; this library reduces those rows to
//! per-configuration summary statistics and renders comparison charts.

mod chart;
mod config;
mod error;
mod ingest;
mod record;
mod stats;
mod summary;

pub use crate::chart::{plot_vs_clients, plot_vs_file_size};
pub use crate::config::{PlotConfig, SummarizeConfig};
pub use crate::error::Error;
pub use crate::ingest::load_trials;
pub use crate::record::{GroupKey, Summary, Trial};
pub use crate::stats::summarize;
pub use crate::summary::{read_summary, write_summary};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
