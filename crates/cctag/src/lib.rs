//! cctag — marker identification for concentric-ring fiducials (CCTags).
//!
//! A detected CCTag is summarized by the ratios between the radii of its
//! successive rings. This crate turns that signature into a marker id:
//!
//! 1. **Cmdline** – resolve the program options into an immutable
//!    [`Configuration`].
//! 2. **Marker** – build the [`MarkerBank`] for the configured family (or load
//!    it from a bank file) and identify signatures by nearest neighbor.
//! 3. **Session** – tie both together at the boundary with the external
//!    detection pipeline.
//!
//! Image acquisition and ring fitting are not part of this crate.
//!
//! ```
//! use cctag::MarkerBank;
//!
//! let bank = MarkerBank::build(3);
//! let observed = [2.0, 1.666667, 1.428571, 1.25, 1.111111];
//! assert_eq!(bank.identify(&observed), Ok(1));
//! ```

pub mod cmdline;
pub mod marker;
pub mod session;

pub use cmdline::{parse_args, usage, Configuration, InputSource, ParseError, Resolution};
pub use marker::{
    parse_line, BankError, BankMatch, IdentifyError, MarkerBank, MarkerFamily,
    REJECTION_THRESHOLD,
};
pub use session::{IdentificationRecord, Session, SessionError};
