//! Point-set files.
//!
//! - CSV / Parquet: read and written with polars; columns `x` and `y`.
//! - JSON: an array of `[x, y]` pairs.
//!
//! The format is picked from the file extension.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use quickhull2::geom2::{Coord, Point};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Frame(FrameFormat),
}

/// Columnar formats handled by polars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameFormat {
    Csv,
    Parquet,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("csv") => Ok(Self::Frame(FrameFormat::Csv)),
            Some("parquet") => Ok(Self::Frame(FrameFormat::Parquet)),
            Some("json") => Ok(Self::Json),
            _ => bail!(
                "unsupported point file {} (expected .csv, .parquet or .json)",
                path.display()
            ),
        }
    }
}

/// Coordinate types the CLI can read from a frame column.
pub trait ColumnCoord: Coord + Serialize + DeserializeOwned {
    fn column(df: &DataFrame, name: &str) -> Result<Vec<Self>>;
}

impl ColumnCoord for f64 {
    fn column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
        let s = df.column(name)?.cast(&DataType::Float64)?;
        s.f64()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| v.with_context(|| format!("null `{name}` at row {row}")))
            .collect()
    }
}

impl ColumnCoord for i64 {
    fn column(df: &DataFrame, name: &str) -> Result<Vec<i64>> {
        let raw = df.column(name)?;
        if raw.dtype().is_float() {
            // Refuse to truncate: integer mode needs integral input.
            for (row, v) in f64::column(df, name)?.into_iter().enumerate() {
                if v.fract() != 0.0 {
                    bail!("`{name}` at row {row} is not an integer ({v})");
                }
            }
        }
        let s = raw.cast(&DataType::Int64)?;
        s.i64()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| v.with_context(|| format!("null `{name}` at row {row}")))
            .collect()
    }
}

fn load_frame(path: &Path, format: FrameFormat) -> Result<DataFrame> {
    let lf = match format {
        FrameFormat::Csv => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?,
        FrameFormat::Parquet => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
    };
    Ok(lf.select([col("x"), col("y")]).collect()?)
}

/// Read a point file. An empty file yields an empty vector; rejecting it is
/// the hull builder's job.
pub fn read_points<T: ColumnCoord>(path: &Path) -> Result<Vec<Point<T>>> {
    let format = match Format::from_path(path)? {
        Format::Frame(format) => format,
        Format::Json => return read_json(path),
    };
    if fs::metadata(path)
        .with_context(|| format!("reading {}", path.display()))?
        .len()
        == 0
    {
        return Ok(Vec::new());
    }
    let df = load_frame(path, format).with_context(|| format!("loading {}", path.display()))?;
    let xs = T::column(&df, "x")?;
    let ys = T::column(&df, "y")?;
    Ok(xs.into_iter().zip(ys).map(|(x, y)| Point::new(x, y)).collect())
}

fn read_json<T: ColumnCoord>(path: &Path) -> Result<Vec<Point<T>>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let pairs: Vec<[T; 2]> =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(pairs.into_iter().map(|[x, y]| Point::new(x, y)).collect())
}

pub fn write_points(path: &Path, points: &[Point<f64>]) -> Result<()> {
    ensure_parent(path)?;
    let format = match Format::from_path(path)? {
        Format::Frame(format) => format,
        Format::Json => {
            let pairs: Vec<[f64; 2]> = points.iter().map(|&p| p.into()).collect();
            fs::write(path, serde_json::to_vec(&pairs)?)
                .with_context(|| format!("writing {}", path.display()))?;
            return Ok(());
        }
    };
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match format {
        FrameFormat::Csv => CsvWriter::new(&mut file).include_header(true).finish(&mut df)?,
        FrameFormat::Parquet => {
            ParquetWriter::new(&mut file).finish(&mut df)?;
        }
    }
    Ok(())
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            Format::from_path(Path::new("a/b.CSV")).unwrap(),
            Format::Frame(FrameFormat::Csv)
        );
        assert_eq!(
            Format::from_path(Path::new("b.parquet")).unwrap(),
            Format::Frame(FrameFormat::Parquet)
        );
        assert_eq!(Format::from_path(Path::new("b.json")).unwrap(), Format::Json);
        assert!(Format::from_path(Path::new("b.txt")).is_err());
    }

    #[test]
    fn csv_is_read_in_both_numeric_modes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "x,y\n0,0\n4,0\n4,4\n2,1\n").unwrap();
        let ints: Vec<Point<i64>> = read_points(&path).unwrap();
        assert_eq!(ints[3], Point::new(2, 1));
        let floats: Vec<Point<f64>> = read_points(&path).unwrap();
        assert_eq!(floats[2], Point::new(4.0, 4.0));
    }

    #[test]
    fn int_mode_rejects_fractions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "x,y\n0.5,0\n1.0,2.0\n").unwrap();
        let err = read_points::<i64>(&path).unwrap_err();
        assert!(err.to_string().contains("not an integer"));
    }

    #[test]
    fn json_and_generated_csv() {
        let dir = tempdir().unwrap();
        let json = dir.path().join("pts.json");
        fs::write(&json, "[[1, 2], [3, -4]]").unwrap();
        let pts: Vec<Point<i64>> = read_points(&json).unwrap();
        assert_eq!(pts, vec![Point::new(1, 2), Point::new(3, -4)]);

        let csv = dir.path().join("nested/out.csv");
        write_points(&csv, &[Point::new(1.5, 2.0), Point::new(-3.0, 0.25)]).unwrap();
        let back: Vec<Point<f64>> = read_points(&csv).unwrap();
        assert_eq!(back, vec![Point::new(1.5, 2.0), Point::new(-3.0, 0.25)]);

        let parquet = dir.path().join("out.parquet");
        write_points(&parquet, &[Point::new(0.0, 1.0), Point::new(2.0, -1.0)]).unwrap();
        let back: Vec<Point<f64>> = read_points(&parquet).unwrap();
        assert_eq!(back, vec![Point::new(0.0, 1.0), Point::new(2.0, -1.0)]);
        let json_out = dir.path().join("out.json");
        write_points(&json_out, &back).unwrap();
        assert_eq!(read_points::<f64>(&json_out).unwrap(), back);
    }

    #[test]
    fn empty_files_yield_no_points() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "").unwrap();
        assert!(read_points::<f64>(&path).unwrap().is_empty());
        let path = dir.path().join("empty.json");
        fs::write(&path, "[]").unwrap();
        assert!(read_points::<f64>(&path).unwrap().is_empty());
    }
}
