// Copyright 2022 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::info;
use plotters::prelude::*;

use crate::error::Error;
use crate::record::Summary;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

const COLOURS: &[RGBColor] = &[
    hexcolour!(0x4285F4),
    hexcolour!(0xEA4335),
    hexcolour!(0x117733),
    hexcolour!(0xDDCC77),
    hexcolour!(0x332288),
    hexcolour!(0x882255),
    hexcolour!(0x44AA99),
    hexcolour!(0xAA4499),
];

const SIZE: (u32, u32) = (1000, 600);

/// (x, mean rtt) points per system label, sorted by x.
type SeriesMap = BTreeMap<String, Vec<(f64, f64)>>;

fn render_error<E: std::fmt::Display>(e: E) -> Error {
    Error::Chart(e.to_string())
}

/// Stable colour per system label: sorted position indexes into the
/// palette, so a system keeps its colour across every chart.
fn palette(rows: &[Summary]) -> BTreeMap<String, RGBColor> {
    let mut systems: Vec<&str> = rows.iter().map(|r| r.system.as_str()).collect();
    systems.sort_unstable();
    systems.dedup();
    systems
        .iter()
        .enumerate()
        .map(|(i, s)| (s.to_string(), COLOURS[i % COLOURS.len()]))
        .collect()
}

fn sort_series(charts: &mut BTreeMap<(String, u64), SeriesMap>) {
    for systems in charts.values_mut() {
        for points in systems.values_mut() {
            points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
        }
    }
}

/// One chart per (operation, file size); x is the client count.
fn by_clients(rows: &[Summary]) -> BTreeMap<(String, u64), SeriesMap> {
    let mut charts: BTreeMap<(String, u64), SeriesMap> = BTreeMap::new();
    for row in rows {
        charts
            .entry((row.operation.clone(), row.file_size_kb))
            .or_default()
            .entry(row.system.clone())
            .or_default()
            .push((row.clients as f64, row.mean_ms));
    }
    sort_series(&mut charts);
    charts
}

/// One chart per (operation, clients); x is the file size. Rows without a
/// payload size cannot sit on a log axis and are left out.
fn by_file_size(rows: &[Summary]) -> BTreeMap<(String, u64), SeriesMap> {
    let mut charts: BTreeMap<(String, u64), SeriesMap> = BTreeMap::new();
    for row in rows {
        if row.file_size_kb == 0 {
            continue;
        }
        charts
            .entry((row.operation.clone(), row.clients))
            .or_default()
            .entry(row.system.clone())
            .or_default()
            .push((row.file_size_kb as f64, row.mean_ms));
    }
    sort_series(&mut charts);
    charts
}

fn bounds(systems: &SeriesMap) -> (f64, f64, f64) {
    let mut x_min = f64::INFINITY;
    let mut x_max: f64 = 1.0;
    let mut y_max: f64 = 1.0;
    for points in systems.values() {
        for &(x, y) in points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_max = y_max.max(y);
        }
    }
    if !x_min.is_finite() {
        x_min = 1.0;
    }
    (x_min, x_max, y_max)
}

/// Renders mean RTT vs client count, one PNG per (operation, file size).
pub fn plot_vs_clients(rows: &[Summary], out_dir: &Path) -> Result<Vec<PathBuf>, Error> {
    std::fs::create_dir_all(out_dir)?;
    let colours = palette(rows);

    let mut written = Vec::new();
    for ((operation, file_size_kb), systems) in by_clients(rows) {
        let path = out_dir.join(format!("rtt_vs_clients_{}_{}kb.png", operation, file_size_kb));
        let caption = format!(
            "Mean RTT vs Clients - {} {} KB",
            operation.to_uppercase(),
            file_size_kb
        );
        let (_, x_max, y_max) = bounds(&systems);

        let root = BitMapBackend::new(&path, SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&caption, ("sans-serif", 30))
            .margin(20)
            .set_label_area_size(LabelAreaPosition::Left, 80)
            .set_label_area_size(LabelAreaPosition::Bottom, 50)
            .build_cartesian_2d(0.0..x_max * 1.05, 0.0..y_max * 1.1)
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .x_desc("Clients")
            .y_desc("Mean RTT (ms)")
            .label_style(("sans-serif", 16))
            .draw()
            .map_err(render_error)?;

        for (system, points) in &systems {
            let colour = *colours.get(system).unwrap_or(&COLOURS[0]);
            chart
                .draw_series(LineSeries::new(
                    points.iter().copied(),
                    colour.stroke_width(2),
                ))
                .map_err(render_error)?
                .label(system.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], colour));
            chart
                .draw_series(points.iter().map(|&(x, y)| Circle::new((x, y), 4, colour.filled())))
                .map_err(render_error)?;
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.filled())
            .border_style(BLACK)
            .draw()
            .map_err(render_error)?;
        root.present().map_err(render_error)?;

        info!("wrote {}", path.display());
        written.push(path.clone());
    }
    Ok(written)
}

/// Renders mean RTT vs file size on a log10 x axis, one PNG per
/// (operation, client count).
pub fn plot_vs_file_size(rows: &[Summary], out_dir: &Path) -> Result<Vec<PathBuf>, Error> {
    std::fs::create_dir_all(out_dir)?;
    let colours = palette(rows);

    let mut written = Vec::new();
    for ((operation, clients), systems) in by_file_size(rows) {
        let path = out_dir.join(format!("rtt_vs_file_size_{}_{}clients.png", operation, clients));
        let caption = format!(
            "Mean RTT vs File Size - {} {} client(s)",
            operation.to_uppercase(),
            clients
        );
        let (x_min, x_max, y_max) = bounds(&systems);

        let root = BitMapBackend::new(&path, SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&caption, ("sans-serif", 30))
            .margin(20)
            .set_label_area_size(LabelAreaPosition::Left, 80)
            .set_label_area_size(LabelAreaPosition::Bottom, 50)
            .build_cartesian_2d((x_min * 0.9..x_max * 1.1).log_scale(), 0.0..y_max * 1.1)
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .x_desc("File Size (KB)")
            .y_desc("Mean RTT (ms)")
            .label_style(("sans-serif", 16))
            .draw()
            .map_err(render_error)?;

        for (system, points) in &systems {
            let colour = *colours.get(system).unwrap_or(&COLOURS[0]);
            chart
                .draw_series(LineSeries::new(
                    points.iter().copied(),
                    colour.stroke_width(2),
                ))
                .map_err(render_error)?
                .label(system.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], colour));
            chart
                .draw_series(points.iter().map(|&(x, y)| Circle::new((x, y), 4, colour.filled())))
                .map_err(render_error)?;
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.filled())
            .border_style(BLACK)
            .draw()
            .map_err(render_error)?;
        root.present().map_err(render_error)?;

        info!("wrote {}", path.display());
        written.push(path.clone());
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(system: &str, operation: &str, size: u64, clients: u64, mean: f64) -> Summary {
        Summary {
            system: system.to_string(),
            operation: operation.to_string(),
            file_size_kb: size,
            clients,
            mean_ms: mean,
            stddev_ms: 0.0,
            min_ms: mean,
            max_ms: mean,
            count: 1,
        }
    }

    #[test]
    fn clients_series_grouping() {
        let rows = vec![
            row("grpc", "upload", 64, 8, 2.0),
            row("grpc", "upload", 64, 1, 1.0),
            row("rabbit", "upload", 64, 1, 3.0),
            row("grpc", "upload", 1024, 1, 9.0),
        ];
        let charts = by_clients(&rows);
        assert_eq!(charts.len(), 2);

        let systems = &charts[&("upload".to_string(), 64)];
        assert_eq!(systems.len(), 2);
        // points come out sorted by client count
        assert_eq!(systems["grpc"], vec![(1.0, 1.0), (8.0, 2.0)]);
        assert_eq!(systems["rabbit"], vec![(1.0, 3.0)]);
    }

    #[test]
    fn file_size_series_skip_sizeless_rows() {
        let rows = vec![
            row("grpc", "upload", 1024, 4, 5.0),
            row("grpc", "upload", 2, 4, 1.0),
            row("grpc", "list", 0, 4, 0.5),
        ];
        let charts = by_file_size(&rows);
        assert_eq!(charts.len(), 1);

        let systems = &charts[&("upload".to_string(), 4)];
        assert_eq!(systems["grpc"], vec![(2.0, 1.0), (1024.0, 5.0)]);
    }

    #[test]
    fn palette_is_stable() {
        let rows = vec![
            row("rabbit", "upload", 64, 1, 1.0),
            row("grpc", "upload", 64, 1, 1.0),
            row("rabbit", "download", 64, 1, 1.0),
        ];
        let colours = palette(&rows);
        assert_eq!(colours.len(), 2);
        // first sorted label gets the first palette entry
        assert_eq!(colours["grpc"], COLOURS[0]);
        assert_eq!(colours["rabbit"], COLOURS[1]);
    }

    #[test]
    fn bounds_cover_all_series() {
        let rows = vec![
            row("grpc", "upload", 2, 1, 1.0),
            row("grpc", "upload", 1024, 1, 50.0),
            row("rabbit", "upload", 64, 1, 80.0),
        ];
        let charts = by_file_size(&rows);
        let (x_min, x_max, y_max) = bounds(&charts[&("upload".to_string(), 1)]);
        assert_eq!(x_min, 2.0);
        assert_eq!(x_max, 1024.0);
        assert_eq!(y_max, 80.0);
    }
}
