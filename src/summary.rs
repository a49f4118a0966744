// Copyright 2022 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::Path;

use crate::error::Error;
use crate::record::Summary;

/// Writes the summary CSV. The header comes from the record type:
/// system,operation,file_size_kb,clients,mean_ms,stddev_ms,min_ms,max_ms
pub fn write_summary(path: &Path, rows: &[Summary]) -> Result<(), Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Loads a summary CSV written by `write_summary`. An empty file is an
/// error since the plotter has nothing to work with.
pub fn read_summary(path: &Path) -> Result<Vec<Summary>, Error> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }
    if rows.is_empty() {
        return Err(Error::NoResults(path.display().to_string()));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(system: &str, size: u64, mean: f64) -> Summary {
        Summary {
            system: system.to_string(),
            operation: "upload".to_string(),
            file_size_kb: size,
            clients: 4,
            mean_ms: mean,
            stddev_ms: 1.0,
            min_ms: mean - 2.0,
            max_ms: mean + 2.0,
            count: 10,
        }
    }

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results_summary.csv");
        let rows = vec![row("grpc", 64, 12.3456), row("rabbit", 1024, 45.6)];

        write_summary(&path, &rows).unwrap();
        let loaded = read_summary(&path).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].system, "grpc");
        assert_eq!(loaded[1].file_size_kb, 1024);
        // values survive the fixed precision write
        assert!((loaded[0].mean_ms - 12.346).abs() < 1e-9);
        assert!((loaded[1].mean_ms - 45.6).abs() < 1e-9);
        // count is in-memory only
        assert_eq!(loaded[0].count, 0);
    }

    #[test]
    fn fixed_precision_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results_summary.csv");
        write_summary(&path, &[row("grpc", 64, 10.0)]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "system,operation,file_size_kb,clients,mean_ms,stddev_ms,min_ms,max_ms"
        );
        assert_eq!(lines.next().unwrap(), "grpc,upload,64,4,10.000,1.000,8.000,12.000");
    }

    #[test]
    fn empty_summary_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results_summary.csv");
        write_summary(&path, &[]).unwrap();
        assert!(read_summary(&path).is_err());
    }

    #[test]
    fn missing_summary_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_summary(&dir.path().join("nope.csv")).is_err());
    }
}
