// Copyright 2022 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::Serializer;
use serde_derive::{Deserialize, Serialize};

/// One raw measurement as logged by the benchmark harness.
#[derive(Clone, Debug, Deserialize)]
pub struct Trial {
    pub timestamp: String,
    pub system: String,
    pub operation: String,
    pub file_size_kb: u64,
    pub clients: u64,
    pub rtt_ms: f64,
    pub success: String,
}

impl Trial {
    /// Trials without a timestamp or without `success == "true"` are
    /// excluded from analysis.
    pub fn is_success(&self) -> bool {
        !self.timestamp.is_empty() && self.success.eq_ignore_ascii_case("true")
    }

    pub fn key(&self) -> GroupKey {
        GroupKey {
            system: self.system.clone(),
            operation: self.operation.clone(),
            file_size_kb: self.file_size_kb,
            clients: self.clients,
        }
    }
}

/// Composite grouping key. The derived `Ord` gives the summary its output
/// order: system, then operation, then file size, then client count.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    pub system: String,
    pub operation: String,
    pub file_size_kb: u64,
    pub clients: u64,
}

/// One aggregated row of the summary CSV. `count` is carried in memory for
/// reporting but is not part of the on-disk schema.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Summary {
    pub system: String,
    pub operation: String,
    pub file_size_kb: u64,
    pub clients: u64,
    #[serde(serialize_with = "millis")]
    pub mean_ms: f64,
    #[serde(serialize_with = "millis")]
    pub stddev_ms: f64,
    #[serde(serialize_with = "millis")]
    pub min_ms: f64,
    #[serde(serialize_with = "millis")]
    pub max_ms: f64,
    #[serde(skip)]
    pub count: usize,
}

impl Summary {
    pub fn key(&self) -> GroupKey {
        GroupKey {
            system: self.system.clone(),
            operation: self.operation.clone(),
            file_size_kb: self.file_size_kb,
            clients: self.clients,
        }
    }
}

// latencies are written with fixed 3-decimal precision
fn millis<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.3}", value))
}
