// Copyright 2022 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::BTreeMap;

use crate::record::{GroupKey, Summary, Trial};

/// Groups trials by (system, operation, file_size_kb, clients) and reduces
/// each group to its summary statistics. Output is sorted by key.
pub fn summarize(trials: &[Trial]) -> Vec<Summary> {
    let mut groups: BTreeMap<GroupKey, Vec<f64>> = BTreeMap::new();
    for trial in trials {
        groups.entry(trial.key()).or_default().push(trial.rtt_ms);
    }
    groups
        .into_iter()
        .map(|(key, samples)| reduce(key, &samples))
        .collect()
}

fn reduce(key: GroupKey, samples: &[f64]) -> Summary {
    let count = samples.len();
    let mean = samples.iter().sum::<f64>() / count as f64;
    let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    Summary {
        system: key.system,
        operation: key.operation,
        file_size_kb: key.file_size_kb,
        clients: key.clients,
        mean_ms: mean,
        stddev_ms: stddev(samples, mean),
        min_ms: min,
        max_ms: max,
        count,
    }
}

// sample standard deviation; zero when there are too few samples to
// estimate spread
fn stddev(samples: &[f64], mean: f64) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let variance =
        samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (samples.len() - 1) as f64;
    variance.sqrt()
}
