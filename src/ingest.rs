// Copyright 2022 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::Error;
use crate::record::Trial;

/// All `*.csv` files directly under `dir`, sorted so that reruns process
/// files in a stable order.
fn csv_files(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some("csv") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Reads every result file in the directory and returns the successful
/// trials. Malformed rows and unreadable files are skipped with a warning;
/// an empty result set is an error.
pub fn load_trials(dir: &Path) -> Result<Vec<Trial>, Error> {
    let files = csv_files(dir)?;
    if files.is_empty() {
        return Err(Error::NoResults(dir.display().to_string()));
    }
    debug!("found {} result file(s) in {}", files.len(), dir.display());

    let mut trials = Vec::new();
    for path in &files {
        let mut reader = match csv::ReaderBuilder::new().has_headers(true).from_path(path) {
            Ok(reader) => reader,
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let mut rows = 0;
        let mut malformed = 0;
        for result in reader.deserialize() {
            let trial: Trial = match result {
                Ok(trial) => trial,
                Err(e) => {
                    malformed += 1;
                    debug!("{}: dropped row: {}", path.display(), e);
                    continue;
                }
            };
            rows += 1;
            if trial.is_success() {
                trials.push(trial);
            }
        }
        if malformed > 0 {
            warn!("{}: dropped {} malformed row(s)", path.display(), malformed);
        }
        debug!("{}: {} row(s)", path.display(), rows);
    }

    if trials.is_empty() {
        return Err(Error::NoResults(dir.display().to_string()));
    }
    Ok(trials)
}
