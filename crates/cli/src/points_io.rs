//! Point files: CSV with `x`,`y` columns (polars) or JSON `[[x, y], ...]`.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{bail, Context, Result};
use mvee::Point2;
use polars::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Csv,
    Json,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(Format::Csv),
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Format::Json),
        _ => bail!(
            "unsupported point file {} (expected .csv or .json)",
            path.display()
        ),
    }
}

pub fn read_points(path: &Path) -> Result<Vec<Point2>> {
    match format_of(path)? {
        Format::Csv => read_csv(path),
        Format::Json => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let raw: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(raw.into_iter().map(|[x, y]| Point2::new(x, y)).collect())
        }
    }
}

pub fn write_points(path: &Path, points: &[Point2]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    match format_of(path)? {
        Format::Csv => {
            let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
            let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
            let mut df = df!("x" => xs, "y" => ys)?;
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)?;
        }
        Format::Json => {
            let raw: Vec<[f64; 2]> = points.iter().map(|p| [p.x, p.y]).collect();
            fs::write(path, serde_json::to_vec_pretty(&raw)?)
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }
    Ok(())
}

fn read_csv(path: &Path) -> Result<Vec<Point2>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");
    let xs = column_f64(&df, "x")?;
    let ys = column_f64(&df, "y")?;
    Ok(xs.into_iter().zip(ys).map(|(x, y)| Point2::new(x, y)).collect())
}

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null `{name}` in row {row}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.5, -2.0),
            Point2::new(3.25, 7.0),
        ]
    }

    #[test]
    fn json_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.json");
        write_points(&path, &sample()).unwrap();
        assert_eq!(read_points(&path).unwrap(), sample());
    }

    #[test]
    fn csv_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/pts.csv");
        write_points(&path, &sample()).unwrap();
        assert_eq!(read_points(&path).unwrap(), sample());
    }

    #[test]
    fn csv_integer_columns_are_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ints.csv");
        fs::write(&path, "x,y\n0,0\n4,0\n0,3\n").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts[1], Point2::new(4.0, 0.0));
    }

    #[test]
    fn unknown_extension_rejected() {
        assert!(read_points(Path::new("points.txt")).is_err());
    }
}
