//! A detection session: the marker bank chosen by a configuration, and the
//! pipeline boundary where observed signatures are identified.
//!
//! Frame acquisition and ring fitting live outside this crate. What reaches
//! the session is a radius-ratio vector per ring candidate; offline, those
//! vectors come from a text file with one observation per line.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::cmdline::{Configuration, InputSource};
use crate::marker::{parse_line, BankError, IdentifyError, MarkerBank};

/// Extensions handled by the external image/video pipeline.
const MEDIA_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "tif", "tiff", "avi", "mov", "mp4", "mkv",
];

// ── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum SessionError {
    /// The configured bank file could not be loaded.
    Bank(BankError),
    /// The input needs the external acquisition pipeline.
    UnsupportedInput(String),
    /// The observation file could not be read.
    Input {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bank(e) => write!(f, "{}", e),
            Self::UnsupportedInput(what) => write!(
                f,
                "{} must go through the image/video detection pipeline",
                what
            ),
            Self::Input { path, source } => {
                write!(f, "failed reading observations {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bank(e) => Some(e),
            Self::UnsupportedInput(_) => None,
            Self::Input { source, .. } => Some(source),
        }
    }
}

impl From<BankError> for SessionError {
    fn from(e: BankError) -> Self {
        Self::Bank(e)
    }
}

// ── Types ──────────────────────────────────────────────────────────────────

/// Identification outcome for one observed signature.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct IdentificationRecord {
    /// 1-based line number in the observation source.
    pub line: usize,
    pub ratios: Vec<f32>,
    /// 1-based marker id, `None` when rejected.
    pub id: Option<usize>,
    /// Distance to the nearest bank entry, `None` for an empty bank.
    pub distance: Option<f32>,
}

/// Configuration plus the bank it selects.
#[derive(Debug, Clone)]
pub struct Session {
    config: Configuration,
    bank: MarkerBank,
}

impl Session {
    /// Build the bank for `config`.
    ///
    /// A bank file, when given, takes precedence over the ring count.
    pub fn open(config: Configuration) -> Result<Self, SessionError> {
        let bank = match config.bank() {
            Some(path) => {
                let bank = MarkerBank::load(path)?;
                tracing::info!(
                    "Bank file {}: {} markers",
                    path.display(),
                    bank.len()
                );
                bank
            }
            None => {
                let bank = MarkerBank::build(config.n_rings());
                match bank.family() {
                    Some(family) => {
                        tracing::info!("Compiled-in {} bank: {} markers", family, bank.len())
                    }
                    None => tracing::warn!("Ring count {} selects an empty bank", config.n_rings()),
                }
                bank
            }
        };
        Ok(Self { config, bank })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn bank(&self) -> &MarkerBank {
        &self.bank
    }

    /// Identify one observed signature against the session bank.
    pub fn identify(&self, observed: &[f32]) -> Result<usize, IdentifyError> {
        self.bank.identify(observed)
    }

    /// Identify every observation of the configured input.
    ///
    /// Only text observation files are handled here; camera indices and
    /// media files are rejected with [`SessionError::UnsupportedInput`].
    pub fn run(&self) -> Result<Vec<IdentificationRecord>, SessionError> {
        match self.config.input() {
            InputSource::Camera(index) => Err(SessionError::UnsupportedInput(format!(
                "live capture from camera {}",
                index
            ))),
            InputSource::File(path) if is_media_file(path) => Err(
                SessionError::UnsupportedInput(format!("media file {}", path.display())),
            ),
            InputSource::File(path) => self.identify_file(path),
        }
    }

    /// Identify each line of an observation file.
    pub fn identify_file(&self, path: &Path) -> Result<Vec<IdentificationRecord>, SessionError> {
        let file = std::fs::File::open(path).map_err(|source| SessionError::Input {
            path: path.to_path_buf(),
            source,
        })?;
        self.identify_lines(std::io::BufReader::new(file))
            .map_err(|source| SessionError::Input {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Identify each line of `reader`; lines without numbers are skipped.
    ///
    /// Bytes that are not valid UTF-8 are treated as non-numeric text, as in
    /// [`MarkerBank::from_reader`].
    pub fn identify_lines<R: BufRead>(
        &self,
        reader: R,
    ) -> std::io::Result<Vec<IdentificationRecord>> {
        let mut records = Vec::new();
        for (line_no, line) in reader.split(b'\n').enumerate() {
            let ratios = parse_line(&String::from_utf8_lossy(&line?));
            if ratios.is_empty() {
                continue;
            }
            let best = self.bank.best_match(&ratios);
            let id = best.filter(|m| m.is_accepted()).map(|m| m.id);
            match id {
                Some(id) => tracing::debug!("line {}: marker {}", line_no + 1, id),
                None => tracing::debug!("line {}: unidentified", line_no + 1),
            }
            records.push(IdentificationRecord {
                line: line_no + 1,
                ratios,
                id,
                distance: best.map(|m| m.distance),
            });
        }
        Ok(records)
    }
}

fn is_media_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            MEDIA_EXTENSIONS
                .iter()
                .any(|m| m.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmdline::{parse_args, Resolution};
    use std::io::Cursor;

    fn config(args: &[&str]) -> Configuration {
        match parse_args(args).expect("valid args") {
            Resolution::Configured(cfg) => cfg,
            Resolution::NoConfigurationRequested => panic!("no configuration"),
        }
    }

    #[test]
    fn ring_count_selects_compiled_in_bank() {
        let session = Session::open(config(&["-i", "obs.txt", "-n", "4"])).unwrap();
        assert_eq!(session.bank().len(), 128);
        assert_eq!(session.config().n_rings(), 4);
    }

    #[test]
    fn bank_file_takes_precedence_over_ring_count() {
        let dir = tempfile::tempdir().unwrap();
        let bank_path = dir.path().join("ids.txt");
        std::fs::write(&bank_path, "1.0 2.0\n3.0, 4.0\n").unwrap();

        let bank_arg = bank_path.to_str().unwrap();
        let session = Session::open(config(&["-i", "obs.txt", "-n", "3", "-b", bank_arg])).unwrap();
        assert_eq!(session.bank().len(), 2);
        assert_eq!(session.identify(&[3.0, 4.0]), Ok(2));
    }

    #[test]
    fn missing_bank_file_aborts_open() {
        let dir = tempfile::tempdir().unwrap();
        let bank_path = dir.path().join("nope.txt");
        let bank_arg = bank_path.to_str().unwrap();
        let err = Session::open(config(&["-i", "obs.txt", "-n", "3", "-b", bank_arg])).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Bank(BankError::BankFileNotFound { .. })
        ));
    }

    #[test]
    fn unsupported_ring_count_opens_with_empty_bank() {
        let session = Session::open(config(&["-i", "obs.txt", "-n", "5"])).unwrap();
        assert!(session.bank().is_empty());
        assert!(session.identify(&[2.0, 1.666667, 1.428571, 1.25, 1.111111]).is_err());
    }

    #[test]
    fn identify_lines_reports_each_observation() {
        let session = Session::open(config(&["-i", "obs.txt", "-n", "3"])).unwrap();
        let text = "2.0 1.666667 1.428571 1.25 1.111111\n\n9 9 9 9 9\n4.0,2.5,1.818182,1.428571,1.176471\n";
        let records = session.identify_lines(Cursor::new(text)).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!((records[0].line, records[0].id), (1, Some(1)));
        assert_eq!(records[0].distance, Some(0.0));
        assert_eq!((records[1].line, records[1].id), (3, None));
        assert!(records[1].distance.unwrap() > 0.6);
        assert_eq!((records[2].line, records[2].id), (4, Some(32)));
    }

    #[test]
    fn identify_lines_tolerates_invalid_utf8() {
        let session = Session::open(config(&["-i", "obs.txt", "-n", "3"])).unwrap();
        let bytes: &[u8] =
            b"2.0 1.666667 1.428571 1.25 1.111111\n# \xe9cart\n2.222222 1.666667 1.428571 1.25 1.111111\n";
        let records = session.identify_lines(bytes).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!((records[0].line, records[0].id), (1, Some(1)));
        assert_eq!((records[1].line, records[1].id), (3, Some(2)));
    }

    #[test]
    fn run_reads_observation_file() {
        let dir = tempfile::tempdir().unwrap();
        let obs = dir.path().join("observations.txt");
        std::fs::write(&obs, "2.222222 1.666667 1.428571 1.25 1.111111\n").unwrap();

        let session = Session::open(config(&["-i", obs.to_str().unwrap(), "-n", "3"])).unwrap();
        let records = session.run().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, Some(2));
    }

    #[test]
    fn run_rejects_camera_and_media_inputs() {
        for input in ["0", "frame.PNG", "clip.avi"] {
            let session = Session::open(config(&["-i", input, "-n", "3"])).unwrap();
            assert!(
                matches!(session.run(), Err(SessionError::UnsupportedInput(_))),
                "{input}"
            );
        }
    }

    #[test]
    fn run_reports_missing_observation_file() {
        let dir = tempfile::tempdir().unwrap();
        let obs = dir.path().join("absent.txt");
        let session = Session::open(config(&["-i", obs.to_str().unwrap(), "-n", "3"])).unwrap();
        assert!(matches!(session.run(), Err(SessionError::Input { .. })));
    }

    #[test]
    fn records_serialize_to_json() {
        let record = IdentificationRecord {
            line: 2,
            ratios: vec![1.5, 2.0],
            id: None,
            distance: Some(0.75),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["line"], 2);
        assert!(json["id"].is_null());
        assert_eq!(json["distance"], 0.75);
    }
}
