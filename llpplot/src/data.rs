//! Loading of the per-detector sensitivity curves.

use super::error::{Error, Result};
use super::style::{self, DetectorStyle};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// File extension of the data files.
pub const DATA_EXTENSION: &str = "dat";

/// Sensitivity curve of a single detector: pairs of proper decay length `cτ` and the value of
/// the sensitivity metric, together with the style it is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    points: Vec<(f64, f64)>,
    style: DetectorStyle,
}

/// Series keyed by detector name. Iteration order, which is also the order in which the curves
/// are drawn and listed in the legend, is lexicographic in the name.
pub type SeriesMap = BTreeMap<String, Series>;

impl Series {
    /// Constructor. The style is looked up from `name`.
    #[must_use]
    pub fn new(name: &str, points: Vec<(f64, f64)>) -> Self {
        Self {
            points,
            style: style::detector_style(name),
        }
    }

    /// Returns the `(cτ, value)` pairs in file order.
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Returns the style this series is drawn with.
    #[must_use]
    pub const fn style(&self) -> &DetectorStyle {
        &self.style
    }

    /// Returns the smallest and largest `cτ`.
    #[must_use]
    pub fn x_range(&self) -> (f64, f64) {
        min_max(self.points.iter().map(|&(x, _)| x))
    }

    /// Returns the smallest and largest value.
    #[must_use]
    pub fn y_range(&self) -> (f64, f64) {
        min_max(self.points.iter().map(|&(_, y)| y))
    }

    /// Writes the points in the tab-separated format read by [`load_data`].
    #[must_use]
    pub fn to_dat(&self) -> String {
        self.points
            .iter()
            .map(|(x, y)| format!("{x}\t{y}\n"))
            .collect()
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
        (min.min(value), max.max(value))
    })
}

/// Parses the contents of a data file. Every line with at least two tab-separated tokens yields
/// one pair; shorter lines, in particular empty ones, are skipped.
///
/// # Errors
///
/// Returns [`Error::ParseFloat`] if one of the first two tokens of a line isn't a number.
pub fn parse_points(path: &Path, content: &str) -> Result<Vec<(f64, f64)>> {
    let parse = |line: usize, token: &str| {
        token.trim().parse::<f64>().map_err(|source| Error::ParseFloat {
            path: path.to_path_buf(),
            line,
            token: token.to_owned(),
            source,
        })
    };

    let mut points = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let mut tokens = line.split('\t');

        if let (Some(x), Some(y)) = (tokens.next(), tokens.next()) {
            points.push((parse(index + 1, x)?, parse(index + 1, y)?));
        }
    }

    Ok(points)
}

/// Reads all `.dat` files directly inside `dir`. The file stem is the name of the detector,
/// which determines the style of the series. Files without any data rows are left out.
///
/// # Errors
///
/// Fails if `dir` is not a directory, if a file can't be read or if a file contains a value
/// that is not a number.
pub fn load_data(dir: &Path) -> Result<SeriesMap> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut data = SeriesMap::new();

    for entry in fs::read_dir(dir).map_err(|err| Error::io(dir, err))? {
        let path = entry.map_err(|err| Error::io(dir, err))?.path();

        if !path.is_file()
            || path.extension().and_then(|ext| ext.to_str()) != Some(DATA_EXTENSION)
        {
            continue;
        }

        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            log::warn!("skipping `{}`: file name is not valid UTF-8", path.display());
            continue;
        };

        log::info!("reading `{}` as {name}", path.display());

        let content = fs::read_to_string(&path).map_err(|err| Error::io(&path, err))?;
        let points = parse_points(&path, &content)?;

        if points.is_empty() {
            log::debug!("`{}` contains no data, skipping it", path.display());
            continue;
        }

        data.insert(name.to_owned(), Series::new(name, points));
    }

    Ok(data)
}

/// Removes the detectors in `names` from `data`. Names that aren't present are ignored.
pub fn exclude<S: AsRef<str>>(data: &mut SeriesMap, names: &[S]) {
    for name in names {
        if data.remove(name.as_ref()).is_some() {
            log::info!("excluding {}", name.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn single_file() {
        let dir = TempDir::new().unwrap();
        dir.child("ANUBIS0.dat")
            .write_str("1.0\t2.0\n3.0\t4.0\n")
            .unwrap();

        let data = load_data(dir.path()).unwrap();

        assert_eq!(data.len(), 1);
        let series = &data["ANUBIS0"];
        assert_eq!(series.points(), [(1.0, 2.0), (3.0, 4.0)]);
        assert_eq!(series.style().color, "#005AC8");
        assert_eq!(series.style().linestyle, "--");
        assert_eq!(series.style().label, r"ANUBIS0, 3 ab$^{-1}$");
    }

    #[test]
    fn empty_file_is_dropped() {
        let dir = TempDir::new().unwrap();
        dir.child("FASER.dat").touch().unwrap();

        assert!(load_data(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn blank_and_short_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        dir.child("MAPP1.dat")
            .write_str("\n0.5\n1e-2\t3.5e-9\n\n")
            .unwrap();
        dir.child("MAPP2.dat").write_str("\n\n").unwrap();

        let data = load_data(dir.path()).unwrap();

        assert_eq!(data.len(), 1);
        assert_eq!(data["MAPP1"].points(), [(1e-2, 3.5e-9)]);
    }

    #[test]
    fn unknown_detector_gets_empty_style() {
        let dir = TempDir::new().unwrap();
        dir.child("UNKNOWN.dat").write_str("1\t1\n").unwrap();

        let data = load_data(dir.path()).unwrap();

        assert_eq!(*data["UNKNOWN"].style(), DetectorStyle::default());
    }

    #[test]
    fn other_files_are_ignored() {
        let dir = TempDir::new().unwrap();
        dir.child("AL3X.txt").write_str("1\t1\n").unwrap();
        dir.child("AL3X.dat.bak").write_str("1\t1\n").unwrap();
        dir.child("notes").write_str("not\ta number\n").unwrap();
        dir.child("nested.dat").create_dir_all().unwrap();
        dir.child("nested.dat/FACET.dat")
            .write_str("1\t1\n")
            .unwrap();

        assert!(load_data(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn sorted_by_name() {
        let dir = TempDir::new().unwrap();

        for name in ["MATHUSLA1", "AL3X", "FASER2", "CODEXB1", "ANUBIS1", "FASER"] {
            dir.child(format!("{name}.dat"))
                .write_str("1\t1\n")
                .unwrap();
        }

        let data = load_data(dir.path()).unwrap();

        assert_eq!(
            data.keys().map(String::as_str).collect::<Vec<_>>(),
            ["AL3X", "ANUBIS1", "CODEXB1", "FASER", "FASER2", "MATHUSLA1"]
        );
    }

    #[test]
    fn missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("data_points");

        assert!(matches!(
            load_data(&missing),
            Err(Error::NotADirectory(path)) if path == missing
        ));
    }

    #[test]
    fn file_instead_of_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.child("FACET.dat");
        file.write_str("1\t1\n").unwrap();

        assert!(matches!(
            load_data(file.path()),
            Err(Error::NotADirectory(_))
        ));
    }

    #[test]
    fn malformed_number() {
        let dir = TempDir::new().unwrap();
        dir.child("FACET.dat")
            .write_str("1.0\t2.0\n3.0\tfour\n")
            .unwrap();

        let err = load_data(dir.path()).unwrap_err();

        assert!(matches!(
            &err,
            Error::ParseFloat { line: 2, token, .. } if token == "four"
        ));
        assert!(err.to_string().ends_with("line 2: `four` is not a number"));
    }

    #[test]
    fn trailing_tab_is_an_error() {
        let path = Path::new("FACET.dat");

        assert!(parse_points(path, "1.0\t\n").is_err());
    }

    #[test]
    fn extra_columns_and_whitespace() {
        let points = parse_points(Path::new("x.dat"), "1.5 \t 2.5\t7\r\n").unwrap();

        assert_eq!(points, [(1.5, 2.5)]);
    }

    #[test]
    fn dat_round_trip() {
        let content = "0.01\t1.2345678901234567e-11\n3.5\t42\n1e7\t0.1\n";
        let path = Path::new("CODEXB0.dat");
        let series = Series::new("CODEXB0", parse_points(path, content).unwrap());
        let reparsed = parse_points(path, &series.to_dat()).unwrap();

        assert_eq!(reparsed.len(), 3);
        assert_eq!(
            Series::new("ANUBIS0", vec![(1.0, 2.0), (3.0, 4.0)]).to_dat(),
            "1\t2\n3\t4\n"
        );

        for ((x1, y1), (x2, y2)) in series.points().iter().zip(&reparsed) {
            assert_approx_eq!(f64, *x1, *x2, ulps = 0);
            assert_approx_eq!(f64, *y1, *y2, ulps = 0);
        }
    }

    #[test]
    fn ranges() {
        let series = Series::new("FACET", vec![(3.0, 1e-3), (0.1, 5.0), (20.0, 0.5)]);

        assert_eq!(series.x_range(), (0.1, 20.0));
        assert_eq!(series.y_range(), (1e-3, 5.0));
    }

    #[test]
    fn excluding() {
        let mut data = SeriesMap::new();
        data.insert("FASER".to_owned(), Series::new("FASER", vec![(1.0, 1.0)]));
        data.insert("FASER2".to_owned(), Series::new("FASER2", vec![(1.0, 1.0)]));
        data.insert("AL3X".to_owned(), Series::new("AL3X", vec![(1.0, 1.0)]));

        exclude(&mut data, &["FASER", "FASER2", "MAPP1"]);

        assert_eq!(data.keys().collect::<Vec<_>>(), ["AL3X"]);
    }
}
