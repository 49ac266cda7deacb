//! Marker bank: the codebook of known radius-ratio signatures.
//!
//! A bank is built once, either from a compiled-in family table or from a
//! bank file, and is immutable afterwards. Identification is a linear
//! nearest-neighbor scan under a fixed Euclidean rejection threshold.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use super::family::MarkerFamily;
use super::line_parse::parse_line;

/// Maximum Euclidean distance at which an observation is still accepted.
pub const REJECTION_THRESHOLD: f32 = 0.6;

// ── Errors ─────────────────────────────────────────────────────────────────

/// Errors raised while constructing a bank from a file.
#[derive(Debug)]
pub enum BankError {
    /// The bank file could not be opened.
    BankFileNotFound {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The bank file was opened but reading it failed part-way.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for BankError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BankFileNotFound { path, source } => {
                write!(f, "unable to open the bank file {}: {}", path.display(), source)
            }
            Self::Read { path, source } => {
                write!(f, "failed reading bank file {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for BankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BankFileNotFound { source, .. } | Self::Read { source, .. } => Some(source),
        }
    }
}

/// Identification failure for a single observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IdentifyError {
    /// No candidate lies within [`REJECTION_THRESHOLD`].
    ///
    /// `best_distance` is the nearest distance found, or `None` when the bank
    /// is empty or no distance was comparable (non-finite observation).
    UnidentifiedMarker { best_distance: Option<f32> },
}

impl std::fmt::Display for IdentifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnidentifiedMarker {
                best_distance: Some(d),
            } => write!(
                f,
                "unable to identify marker: nearest distance {:.4} exceeds {}",
                d, REJECTION_THRESHOLD
            ),
            Self::UnidentifiedMarker {
                best_distance: None,
            } => write!(f, "unable to identify marker: no comparable candidate"),
        }
    }
}

impl std::error::Error for IdentifyError {}

// ── Types ──────────────────────────────────────────────────────────────────

/// Nearest bank entry for an observation, before thresholding.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct BankMatch {
    /// 1-based marker id.
    pub id: usize,
    /// 0-based index into the bank.
    pub index: usize,
    /// Euclidean distance over the common prefix of both signatures.
    pub distance: f32,
}

impl BankMatch {
    /// Whether this match passes the rejection threshold.
    pub fn is_accepted(&self) -> bool {
        self.distance <= REJECTION_THRESHOLD
    }
}

/// Ordered collection of reference signatures.
///
/// Signatures are not required to share a length. Identification compares
/// only up to the shorter of the two sequences, so a bank file with ragged
/// lines still loads and matches.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct MarkerBank {
    family: Option<MarkerFamily>,
    signatures: Vec<Vec<f32>>,
}

impl MarkerBank {
    /// Build the compiled-in bank for `n_rings`.
    ///
    /// Ring counts without a compiled-in table (anything but 3 and 4) give an
    /// empty bank. Every later [`identify`](Self::identify) on it fails, with
    /// nothing else pointing at the ring count as the cause.
    pub fn build(n_rings: usize) -> Self {
        match MarkerFamily::from_ring_count(n_rings) {
            Some(family) => Self::from_family(family),
            None => {
                tracing::warn!(
                    "no compiled-in bank for {} rings; bank is empty and no marker can be identified",
                    n_rings
                );
                Self::default()
            }
        }
    }

    /// Bank holding the compiled-in table of `family`.
    pub fn from_family(family: MarkerFamily) -> Self {
        Self {
            family: Some(family),
            signatures: family.signatures().map(<[f32]>::to_vec).collect(),
        }
    }

    /// Bank holding the given signatures as-is, in order.
    pub fn from_signatures(signatures: Vec<Vec<f32>>) -> Self {
        Self {
            family: None,
            signatures,
        }
    }

    /// Load a bank file: one signature per line.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| BankError::BankFileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let bank = Self::from_reader(std::io::BufReader::new(file)).map_err(|source| {
            BankError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        tracing::debug!(
            "loaded {} signatures from bank file {}",
            bank.len(),
            path.display()
        );
        Ok(bank)
    }

    /// Read bank lines from any buffered source.
    ///
    /// Each line goes through [`parse_line`]; lines yielding no number are
    /// skipped and take no slot. Bytes that are not valid UTF-8 are treated
    /// as non-numeric text.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut signatures = Vec::new();
        for (line_no, line) in reader.split(b'\n').enumerate() {
            let line = line?;
            let values = parse_line(&String::from_utf8_lossy(&line));
            if values.is_empty() {
                tracing::trace!("bank line {}: no values, skipped", line_no + 1);
                continue;
            }
            signatures.push(values);
        }
        Ok(Self::from_signatures(signatures))
    }

    /// Family of the compiled-in table this bank came from, if any.
    pub fn family(&self) -> Option<MarkerFamily> {
        self.family
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Signatures in bank order.
    pub fn signatures(&self) -> impl Iterator<Item = &[f32]> + '_ {
        self.signatures.iter().map(Vec::as_slice)
    }

    /// Signature of the marker with 1-based `id`.
    pub fn signature(&self, id: usize) -> Option<&[f32]> {
        id.checked_sub(1)
            .and_then(|idx| self.signatures.get(idx))
            .map(Vec::as_slice)
    }

    /// Nearest signature to `observed`, without applying the threshold.
    ///
    /// Ties keep the lowest index. Returns `None` for an empty bank or when
    /// no distance is comparable (a NaN in `observed`).
    pub fn best_match(&self, observed: &[f32]) -> Option<BankMatch> {
        let mut best: Option<BankMatch> = None;
        for (index, candidate) in self.signatures.iter().enumerate() {
            let distance = prefix_distance(observed, candidate);
            if distance < best.map_or(f32::MAX, |b| b.distance) {
                best = Some(BankMatch {
                    id: index + 1,
                    index,
                    distance,
                });
            }
        }
        if let Some(m) = best {
            tracing::trace!("nearest candidate {}: distance {}", m.id, m.distance);
        }
        best
    }

    /// Identify `observed`, returning its 1-based marker id.
    pub fn identify(&self, observed: &[f32]) -> Result<usize, IdentifyError> {
        match self.best_match(observed) {
            Some(m) if m.is_accepted() => Ok(m.id),
            best => Err(IdentifyError::UnidentifiedMarker {
                best_distance: best.map(|m| m.distance),
            }),
        }
    }
}

/// Euclidean distance over the first `min(a.len(), b.len())` elements.
fn prefix_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}
