//! Reader for exported simulation text files.
//!
//! ## Directory Layout
//! ```text
//! <data_directory>
//! ├── 方向1
//! │   ├── 方向1 10.txt   - 10 MHz, incidence direction 1
//! │   └── 方向1 20.txt
//! └── 方向2
//!     └── ...
//! ```
//!
//! Each file holds whitespace separated `theta phi rcs` rows, optionally
//! preceded by a `Theta ...` header line.

use glam::DVec3;
use std::path::{Path, PathBuf};

use super::DataError;
use crate::config::ReaderConfig;
use crate::engine::{Sample, SampleCollection};
use crate::geo::{incidence_from_propagation, IncidentAngles};

/// Samples parsed from one file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFile {
    pub samples: Vec<Sample>,
    /// Rows that were neither blank, header, nor valid data.
    pub skipped_rows: usize,
}

/// Incidence angles for a 1-based direction folder.
///
/// Direction 1 propagates along -Y. The remaining directions have no
/// recorded propagation vector and use (0°, `direction`°) as placeholder.
pub fn incidence_for_direction(direction: u32) -> IncidentAngles {
    match direction {
        1 => incidence_from_propagation(DVec3::new(0.0, -1.0, 0.0)),
        _ => IncidentAngles::new(0.0, direction as f64),
    }
}

/// Extracts the frequency (MHz) from a data file name.
///
/// Everything except digits, dots and spaces is dropped, and the second
/// remaining token is the frequency: `"方向1 10.txt"` gives 10.
pub fn frequency_from_file_name(file_name: &str) -> Result<f64, DataError> {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    let digits: String = stem
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ' ')
        .collect();

    digits
        .split_whitespace()
        .nth(1)
        .and_then(|token| token.parse::<f64>().ok())
        .filter(|f| f.is_finite())
        .ok_or_else(|| DataError::InvalidFileName(file_name.to_string()))
}

/// Parses the rows of one data file.
///
/// Blank lines and `Theta` header lines are ignored. Rows with fewer than
/// three fields or with unparseable numbers are skipped and counted.
pub fn parse_samples(text: &str, frequency: f64, incidence: IncidentAngles) -> ParsedFile {
    let mut parsed = ParsedFile::default();

    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with("Theta") {
            continue;
        }

        let mut fields = line.split_whitespace().map(str::parse::<f64>);
        match (fields.next(), fields.next(), fields.next()) {
            (Some(Ok(theta)), Some(Ok(phi)), Some(Ok(rcs)))
                if theta.is_finite() && phi.is_finite() && rcs.is_finite() =>
            {
                parsed.samples.push(Sample::new(
                    frequency,
                    incidence.elevation,
                    incidence.azimuth,
                    theta,
                    phi,
                    rcs,
                ));
            }
            _ => parsed.skipped_rows += 1,
        }
    }

    parsed
}

/// Lists the entries of a directory.
pub type DirectoryLister = fn(&Path) -> std::io::Result<Vec<PathBuf>>;

/// Lists `dir` on the filesystem.
///
/// Entries that cannot be read are logged and left out.
pub fn list_directory(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        match entry {
            Ok(entry) => paths.push(entry.path()),
            Err(e) => log::warn!("Unreadable entry in {}: {}", dir.display(), e),
        }
    }
    Ok(paths)
}

/// Loads every direction folder under a data directory.
pub struct DataReader {
    config: ReaderConfig,
    lister: DirectoryLister,
}

impl DataReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self::with_lister(config, list_directory)
    }

    /// Creates a reader that lists direction folders with `lister`.
    pub fn with_lister(config: ReaderConfig, lister: DirectoryLister) -> Self {
        Self { config, lister }
    }

    /// Reads all samples from every direction folder.
    ///
    /// Missing or unlistable folders and unreadable or misnamed files are
    /// skipped with a log message. Fails only if the root directory is
    /// missing or nothing could be read at all.
    pub fn read_all(&self) -> Result<Vec<Sample>, DataError> {
        let root = &self.config.data_directory;
        if !root.is_dir() {
            return Err(DataError::DirectoryNotFound(root.clone()));
        }

        let mut all = Vec::new();
        for direction in 1..=self.config.direction_count {
            let dir = self.config.direction_path(direction);
            if !dir.is_dir() {
                log::debug!("Direction folder {} not present", dir.display());
                continue;
            }

            let incidence = incidence_for_direction(direction);
            let files = match self.data_files(&dir) {
                Ok(files) => files,
                Err(e) => {
                    log::warn!("Skipping direction {}: {}", direction, e);
                    continue;
                }
            };
            log::info!(
                "Direction {}: {} data files, incidence {:.1}°/{:.1}°",
                direction,
                files.len(),
                incidence.elevation,
                incidence.azimuth
            );

            for path in files {
                match Self::read_file(&path, incidence) {
                    Ok(parsed) => {
                        log::debug!(
                            "{}: {} samples, {} rows skipped",
                            path.display(),
                            parsed.samples.len(),
                            parsed.skipped_rows
                        );
                        all.extend(parsed.samples);
                    }
                    Err(e) => log::warn!("Skipping {}: {}", path.display(), e),
                }
            }
        }

        if all.is_empty() {
            return Err(DataError::NoSamples(root.clone()));
        }
        log::info!("Read {} samples from {}", all.len(), root.display());
        Ok(all)
    }

    /// Reads all samples and freezes them into a collection.
    pub fn load_collection(&self) -> Result<SampleCollection, DataError> {
        let samples = self.read_all()?;
        SampleCollection::new(samples).map_err(DataError::Engine)
    }

    /// Reads one data file, taking its frequency from the file name.
    pub fn read_file(path: &Path, incidence: IncidentAngles) -> Result<ParsedFile, DataError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| DataError::InvalidFileName(path.display().to_string()))?;
        let frequency = frequency_from_file_name(file_name)?;
        let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(parse_samples(&text, frequency, incidence))
    }

    /// Data files in `dir`, sorted by name.
    fn data_files(&self, dir: &Path) -> Result<Vec<PathBuf>, DataError> {
        let entries = (self.lister)(dir).map_err(|source| DataError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files: Vec<PathBuf> = entries
            .into_iter()
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .and_then(|e| e.to_str())
                        .is_some_and(|e| e == self.config.extension)
            })
            .collect();
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::fs;

    const FILE_BODY: &str = "\
Theta [deg.]  Phi   [deg.]  RCS [dB(m^2)]
-----------------------------------------
   0.000        0.000        -12.50
  90.000      -90.000        -20.25

 180.000      370.000        -8.00
   1.0 oops 2.0
";

    #[test]
    fn test_frequency_from_file_name() {
        assert_eq!(frequency_from_file_name("方向1 10.txt").unwrap(), 10.0);
        assert_eq!(frequency_from_file_name("方向3 12.5.txt").unwrap(), 12.5);
        assert!(matches!(
            frequency_from_file_name("方向1.txt"),
            Err(DataError::InvalidFileName(_))
        ));
    }

    #[test]
    fn test_parse_skips_header_and_bad_rows() {
        let parsed = parse_samples(FILE_BODY, 10.0, IncidentAngles::new(0.0, 2.0));
        assert_eq!(parsed.samples.len(), 3);
        // The dashed separator and the "oops" row
        assert_eq!(parsed.skipped_rows, 2);

        let second = parsed.samples[1];
        assert_eq!(second.frequency, 10.0);
        assert_eq!(second.incident_azimuth, 2.0);
        assert_eq!(second.theta, 90.0);
        assert_eq!(second.phi, 270.0);
        assert_eq!(second.rcs, -20.25);
        assert_eq!(parsed.samples[2].phi, 10.0);
    }

    #[test]
    fn test_direction_incidence() {
        let first = incidence_for_direction(1);
        assert_abs_diff_eq!(first.elevation, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.azimuth, 270.0, epsilon = 1e-9);
        assert_eq!(incidence_for_direction(4), IncidentAngles::new(0.0, 4.0));
    }

    #[test]
    fn test_read_all_walks_direction_folders() {
        let root = tempfile::tempdir().unwrap();
        let config = ReaderConfig::new(root.path()).with_direction_count(3);

        let dir1 = config.direction_path(1);
        let dir3 = config.direction_path(3);
        fs::create_dir_all(&dir1).unwrap();
        fs::create_dir_all(&dir3).unwrap();
        fs::write(dir1.join("方向1 10.txt"), FILE_BODY).unwrap();
        fs::write(dir1.join("方向1 20.txt"), "0 0 -1\n").unwrap();
        fs::write(dir1.join("notes.md"), "ignored").unwrap();
        fs::write(dir3.join("方向3 10.txt"), "45 45 -3\n").unwrap();
        fs::write(dir3.join("bad name.txt"), "45 45 -3\n").unwrap();

        let samples = DataReader::new(config).read_all().unwrap();
        assert_eq!(samples.len(), 5);
        assert!(samples.iter().any(|s| s.frequency == 20.0));
        assert!(samples
            .iter()
            .any(|s| s.incident_azimuth == 3.0 && s.rcs == -3.0));
    }

    fn deny_second_direction(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
        if dir.ends_with("方向2") {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        list_directory(dir)
    }

    #[test]
    fn test_unlistable_direction_is_skipped() {
        let root = tempfile::tempdir().unwrap();
        let config = ReaderConfig::new(root.path()).with_direction_count(3);
        for direction in 1..=3 {
            let dir = config.direction_path(direction);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(format!("方向{} 10.txt", direction)), "0 0 -1\n").unwrap();
        }

        let samples = DataReader::with_lister(config, deny_second_direction)
            .read_all()
            .unwrap();
        assert_eq!(samples.len(), 2);
        assert!(samples.iter().all(|s| s.incident_azimuth != 2.0));
        assert!(samples.iter().any(|s| s.incident_azimuth == 3.0));
    }

    #[test]
    fn test_missing_root_is_error() {
        let root = tempfile::tempdir().unwrap();
        let reader = DataReader::new(ReaderConfig::new(root.path().join("absent")));
        assert!(matches!(
            reader.read_all(),
            Err(DataError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn test_empty_root_has_no_samples() {
        let root = tempfile::tempdir().unwrap();
        let reader = DataReader::new(ReaderConfig::new(root.path()));
        assert!(matches!(reader.load_collection(), Err(DataError::NoSamples(_))));
    }
}
