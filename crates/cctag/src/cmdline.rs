//! Command-line configuration for the detection program.
//!
//! The option schema is declared once with `clap` derive. Parsing never
//! prints anything: [`usage`] and [`Configuration::describe`] render text on
//! request, and the caller decides where it goes.
//!
//! Required options are declared optional in the raw schema so absence and
//! malformed values surface as typed [`ParseError`]s instead of clap's
//! rendered messages. The resulting [`Configuration`] holds them as plain
//! fields.

use std::ffi::OsString;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};

const PROGRAM_NAME: &str = "cctag-detect";

// ── Raw schema ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = PROGRAM_NAME)]
#[command(about = "Program for detecting CCTags in images or in a video")]
struct RawArgs {
    /// Path to an image (JPG, PNG) or video (avi, mov), or camera index for live capture (0, 1...).
    #[arg(short = 'i', long, help_heading = "Required input parameters")]
    input: Option<String>,

    /// Number of rings of the CCTags to detect.
    // Hyphen values let `-n -1` reach the integer check. The cost: in
    // `-n -i x`, `-i` is taken as the ring count and `x` is reported as an
    // unknown token.
    #[arg(
        short = 'n',
        long,
        allow_hyphen_values = true,
        help_heading = "Required input parameters"
    )]
    nbrings: Option<String>,

    /// Path to a bank parameter file, e.g. 4Crowns/ids.txt.
    #[arg(short = 'b', long, help_heading = "Optional parameters")]
    bank: Option<PathBuf>,

    /// Path to configuration XML file.
    #[arg(short = 'p', long, help_heading = "Optional parameters")]
    params: Option<PathBuf>,

    /// Output folder name.
    #[arg(short = 'o', long, help_heading = "Optional parameters")]
    output: Option<PathBuf>,

    #[cfg(feature = "accel")]
    #[command(flatten)]
    accel: AccelArgs,
}

#[cfg(feature = "accel")]
#[derive(Debug, clap::Args)]
#[command(next_help_heading = "Optional parameters")]
struct AccelArgs {
    /// Accelerator debug option, run all accelerated ops synchronously.
    #[arg(long)]
    sync: bool,

    /// Select the accelerated code path instead of the CPU path.
    #[arg(long)]
    use_accel: bool,

    /// Path storing images to debug intermediate accelerated results.
    #[arg(long)]
    debug_dir: Option<PathBuf>,

    /// Use <n> accelerated pipes concurrently.
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    parallel: String,
}

// ── Errors ─────────────────────────────────────────────────────────────────

/// Why the command line could not be turned into a [`Configuration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A required option was not given. Holds the long option name.
    MissingRequiredOption(String),
    /// An option value could not be parsed. Holds the long option name and
    /// the raw value.
    InvalidValue(String, String),
    /// A token that matches no option.
    UnknownOption(String),
    /// Any other rejection by the parser (for example a repeated option).
    Malformed(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredOption(name) => {
                write!(f, "missing required option '--{}'", name)
            }
            Self::InvalidValue(name, raw) => {
                write!(f, "invalid value '{}' for option '--{}'", raw, name)
            }
            Self::UnknownOption(token) => write!(f, "unknown option '{}'", token),
            Self::Malformed(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ParseError {}

// ── Configuration ──────────────────────────────────────────────────────────

/// Where frames come from.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSource {
    /// Image, video or signature file.
    File(PathBuf),
    /// Live-capture camera index.
    Camera(u32),
}

impl InputSource {
    /// A value made only of ASCII digits is a camera index; anything else is
    /// a path.
    pub fn classify(raw: &str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = raw.parse() {
                return Self::Camera(index);
            }
        }
        Self::File(PathBuf::from(raw))
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Camera(index) => write!(f, "{}", index),
        }
    }
}

/// Options of the accelerated build.
#[cfg(feature = "accel")]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AccelOptions {
    /// Run all accelerated operations synchronously.
    pub sync: bool,
    /// Use the accelerated path instead of the CPU path.
    pub enabled: bool,
    pub debug_dir: Option<PathBuf>,
    /// Number of concurrent accelerated pipes, at least 1.
    pub parallel: usize,
}

/// Resolved, immutable program configuration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Configuration {
    input: InputSource,
    n_rings: usize,
    bank: Option<PathBuf>,
    params: Option<PathBuf>,
    output: Option<PathBuf>,
    #[cfg(feature = "accel")]
    accel: AccelOptions,
}

impl Configuration {
    pub fn input(&self) -> &InputSource {
        &self.input
    }

    /// Number of rings of the markers to detect.
    pub fn n_rings(&self) -> usize {
        self.n_rings
    }

    /// Bank file replacing the compiled-in table, if given.
    pub fn bank(&self) -> Option<&Path> {
        self.bank.as_deref()
    }

    /// Detector parameters file, if given.
    pub fn params(&self) -> Option<&Path> {
        self.params.as_deref()
    }

    /// Output folder, if given.
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    #[cfg(feature = "accel")]
    pub fn accel(&self) -> &AccelOptions {
        &self.accel
    }

    /// Render the "You called ... with:" summary of every option.
    pub fn describe(&self, argv0: &str) -> String {
        let show = |p: Option<&Path>| p.map(|p| p.display().to_string()).unwrap_or_default();

        let mut out = String::new();
        let _ = writeln!(out, "You called {} with:", argv0);
        let _ = writeln!(out, "    --input     {}", self.input);
        let _ = writeln!(out, "    --nbrings   {}", self.n_rings);
        let _ = writeln!(out, "    --bank      {}", show(self.bank()));
        let _ = writeln!(out, "    --params    {}", show(self.params()));
        let _ = writeln!(out, "    --output    {}", show(self.output()));
        #[cfg(feature = "accel")]
        {
            let _ = writeln!(out, "    --parallel  {}", self.accel.parallel);
            if self.accel.sync {
                let _ = writeln!(out, "    --sync");
            }
            if let Some(dir) = &self.accel.debug_dir {
                let _ = writeln!(out, "    --debug-dir {}", dir.display());
            }
            if self.accel.enabled {
                let _ = writeln!(out, "    --use-accel");
            }
        }
        out
    }
}

/// Outcome of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Configured(Configuration),
    /// No arguments, or a help request: print [`usage`] and exit cleanly.
    NoConfigurationRequested,
}

// ── Parsing ────────────────────────────────────────────────────────────────

/// Parse program arguments, excluding the program name.
pub fn parse_args<I, T>(args: I) -> Result<Resolution, ParseError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.is_empty() {
        return Ok(Resolution::NoConfigurationRequested);
    }

    let argv = std::iter::once(OsString::from(PROGRAM_NAME)).chain(args);
    let raw = match RawArgs::try_parse_from(argv) {
        Ok(raw) => raw,
        Err(err) => return map_clap_error(&err),
    };
    resolve(raw).map(Resolution::Configured)
}

/// Parse the arguments of the running process.
pub fn parse_env_args() -> Result<Resolution, ParseError> {
    parse_args(std::env::args_os().skip(1))
}

/// Help text of the option schema.
pub fn usage() -> String {
    RawArgs::command().render_help().to_string()
}

fn resolve(raw: RawArgs) -> Result<Configuration, ParseError> {
    let input = raw
        .input
        .ok_or_else(|| ParseError::MissingRequiredOption("input".into()))?;
    if input.is_empty() {
        return Err(ParseError::InvalidValue("input".into(), input));
    }
    let nbrings = raw
        .nbrings
        .ok_or_else(|| ParseError::MissingRequiredOption("nbrings".into()))?;
    let n_rings = nbrings
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidValue("nbrings".into(), nbrings.clone()))?;

    Ok(Configuration {
        input: InputSource::classify(&input),
        n_rings,
        bank: raw.bank,
        params: raw.params,
        output: raw.output,
        #[cfg(feature = "accel")]
        accel: resolve_accel(raw.accel)?,
    })
}

#[cfg(feature = "accel")]
fn resolve_accel(raw: AccelArgs) -> Result<AccelOptions, ParseError> {
    let parallel = match raw.parallel.parse::<usize>() {
        Ok(n) if n >= 1 => n,
        _ => return Err(ParseError::InvalidValue("parallel".into(), raw.parallel)),
    };
    Ok(AccelOptions {
        sync: raw.sync,
        enabled: raw.use_accel,
        debug_dir: raw.debug_dir,
        parallel,
    })
}

fn map_clap_error(err: &clap::Error) -> Result<Resolution, ParseError> {
    let invalid_arg = context_string(err, ContextKind::InvalidArg);
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            Ok(Resolution::NoConfigurationRequested)
        }
        ErrorKind::UnknownArgument => {
            Err(ParseError::UnknownOption(invalid_arg.unwrap_or_default()))
        }
        ErrorKind::MissingRequiredArgument => Err(ParseError::MissingRequiredOption(
            invalid_arg.as_deref().map(option_name).unwrap_or_default(),
        )),
        ErrorKind::InvalidValue | ErrorKind::ValueValidation | ErrorKind::InvalidUtf8 => {
            Err(ParseError::InvalidValue(
                invalid_arg.as_deref().map(option_name).unwrap_or_default(),
                context_string(err, ContextKind::InvalidValue).unwrap_or_default(),
            ))
        }
        _ => Err(ParseError::Malformed(
            err.to_string().lines().next().unwrap_or_default().to_string(),
        )),
    }
}

fn context_string(err: &clap::Error, kind: ContextKind) -> Option<String> {
    match err.get(kind)? {
        ContextValue::String(s) => Some(s.clone()),
        ContextValue::Strings(v) => v.first().cloned(),
        _ => None,
    }
}

/// `"--nbrings <NBRINGS>"` → `"nbrings"`.
fn option_name(rendered: &str) -> String {
    rendered
        .trim_start_matches('-')
        .split([' ', '='])
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured(args: &[&str]) -> Configuration {
        match parse_args(args) {
            Ok(Resolution::Configured(cfg)) => cfg,
            other => panic!("expected configuration for {args:?}, got {other:?}"),
        }
    }

    #[test]
    fn no_arguments_requests_no_configuration() {
        let empty: [&str; 0] = [];
        assert_eq!(parse_args(empty), Ok(Resolution::NoConfigurationRequested));
    }

    #[test]
    fn help_requests_no_configuration() {
        for args in [&["--help"][..], &["-h"][..], &["-i", "x.png", "--help"][..]] {
            assert_eq!(
                parse_args(args),
                Ok(Resolution::NoConfigurationRequested),
                "{args:?}"
            );
        }
    }

    #[test]
    fn required_options_only() {
        let cfg = configured(&["--input", "x.png", "--nbrings", "3"]);
        assert_eq!(cfg.input(), &InputSource::File(PathBuf::from("x.png")));
        assert_eq!(cfg.n_rings(), 3);
        assert_eq!(cfg.bank(), None);
        assert_eq!(cfg.params(), None);
        assert_eq!(cfg.output(), None);
    }

    #[test]
    fn short_options_and_optionals() {
        let cfg = configured(&[
            "-i", "clip.avi", "-n", "4", "-b", "4Crowns/ids.txt", "-p", "params.xml", "-o", "out",
        ]);
        assert_eq!(cfg.n_rings(), 4);
        assert_eq!(cfg.bank(), Some(Path::new("4Crowns/ids.txt")));
        assert_eq!(cfg.params(), Some(Path::new("params.xml")));
        assert_eq!(cfg.output(), Some(Path::new("out")));
    }

    #[test]
    fn equals_syntax_is_accepted() {
        let cfg = configured(&["--input=x.png", "--nbrings=3", "--output=res"]);
        assert_eq!(cfg.n_rings(), 3);
        assert_eq!(cfg.output(), Some(Path::new("res")));
    }

    #[test]
    fn empty_path_value_is_invalid() {
        let res = parse_args(["-i", "x.png", "-n", "3", "--bank="]);
        assert!(
            matches!(res, Err(ParseError::InvalidValue(ref name, _)) if name == "bank"),
            "{res:?}"
        );
    }

    #[test]
    fn digit_input_is_a_camera_index() {
        let cfg = configured(&["-i", "1", "-n", "3"]);
        assert_eq!(cfg.input(), &InputSource::Camera(1));
        assert_eq!(
            InputSource::classify("01.png"),
            InputSource::File(PathBuf::from("01.png"))
        );
        assert_eq!(
            InputSource::classify("99999999999"),
            InputSource::File(PathBuf::from("99999999999"))
        );
    }

    #[test]
    fn missing_nbrings_is_reported() {
        assert_eq!(
            parse_args(["--input", "x.png"]),
            Err(ParseError::MissingRequiredOption("nbrings".into()))
        );
    }

    #[test]
    fn missing_input_is_reported() {
        assert_eq!(
            parse_args(["--nbrings", "3"]),
            Err(ParseError::MissingRequiredOption("input".into()))
        );
    }

    #[test]
    fn unparseable_ring_count_is_invalid() {
        for raw in ["three", "-1", "3.5", ""] {
            assert_eq!(
                parse_args(["--input", "x.png", "--nbrings", raw]),
                Err(ParseError::InvalidValue("nbrings".into(), raw.into())),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn ring_count_swallows_following_flag() {
        assert_eq!(
            parse_args(["-n", "-i", "x"]),
            Err(ParseError::UnknownOption("x".into()))
        );
        assert_eq!(
            parse_args(["-i", "x.png", "-n", "-b"]),
            Err(ParseError::InvalidValue("nbrings".into(), "-b".into()))
        );
    }

    #[test]
    fn zero_rings_is_accepted() {
        assert_eq!(configured(&["-i", "x.png", "-n", "0"]).n_rings(), 0);
    }

    #[test]
    fn empty_input_is_invalid() {
        assert_eq!(
            parse_args(["--input", "", "--nbrings", "3"]),
            Err(ParseError::InvalidValue("input".into(), String::new()))
        );
    }

    #[test]
    fn unknown_option_is_reported() {
        assert_eq!(
            parse_args(["--input", "x.png", "--nbrings", "3", "--colour"]),
            Err(ParseError::UnknownOption("--colour".into()))
        );
    }

    #[test]
    fn stray_positional_is_rejected() {
        let res = parse_args(["--input", "x.png", "--nbrings", "3", "extra"]);
        assert!(
            matches!(res, Err(ParseError::UnknownOption(ref t)) if t == "extra"),
            "{res:?}"
        );
    }

    #[test]
    fn option_without_value_is_invalid() {
        let res = parse_args(["--nbrings", "3", "--input"]);
        assert!(
            matches!(res, Err(ParseError::InvalidValue(ref name, _)) if name == "input"),
            "{res:?}"
        );
    }

    #[test]
    fn repeated_option_is_rejected() {
        let res = parse_args(["-i", "a.png", "-i", "b.png", "-n", "3"]);
        assert!(matches!(res, Err(ParseError::Malformed(_))), "{res:?}");
    }

    #[test]
    fn usage_lists_every_option() {
        let text = usage();
        for opt in ["--input", "--nbrings", "--bank", "--params", "--output"] {
            assert!(text.contains(opt), "usage lacks {opt}:\n{text}");
        }
        assert!(text.contains("Required input parameters"));
    }

    #[test]
    fn describe_lists_resolved_values() {
        let cfg = configured(&["-i", "x.png", "-n", "3", "-b", "ids.txt"]);
        let text = cfg.describe("cctag-detect");
        assert!(text.starts_with("You called cctag-detect with:\n"));
        assert!(text.contains("--input     x.png\n"));
        assert!(text.contains("--nbrings   3\n"));
        assert!(text.contains("--bank      ids.txt\n"));
    }

    #[test]
    fn configuration_serializes() {
        let cfg = configured(&["-i", "2", "-n", "4"]);
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json["input"]["camera"], 2);
        assert_eq!(json["n_rings"], 4);
        assert!(json["bank"].is_null());
    }

    #[cfg(feature = "accel")]
    #[test]
    fn accel_options_default_and_parse() {
        let cfg = configured(&["-i", "x.png", "-n", "3"]);
        assert_eq!(cfg.accel().parallel, 1);
        assert!(!cfg.accel().sync && !cfg.accel().enabled);

        let cfg = configured(&[
            "-i", "x.png", "-n", "3", "--sync", "--use-accel", "--debug-dir", "dbg", "--parallel", "4",
        ]);
        assert_eq!(
            cfg.accel(),
            &AccelOptions {
                sync: true,
                enabled: true,
                debug_dir: Some(PathBuf::from("dbg")),
                parallel: 4,
            }
        );
        assert!(cfg.describe("x").contains("--use-accel"));
    }

    #[cfg(feature = "accel")]
    #[test]
    fn accel_parallel_must_be_positive() {
        for raw in ["0", "-2", "many"] {
            assert_eq!(
                parse_args(["-i", "x.png", "-n", "3", "--parallel", raw]),
                Err(ParseError::InvalidValue("parallel".into(), raw.into()))
            );
        }
    }

    #[cfg(not(feature = "accel"))]
    #[test]
    fn accel_options_are_unknown_without_feature() {
        assert_eq!(
            parse_args(["-i", "x.png", "-n", "3", "--use-accel"]),
            Err(ParseError::UnknownOption("--use-accel".into()))
        );
    }
}
