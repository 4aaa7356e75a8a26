//! Output verbosity levels.

use serde::{Deserialize, Serialize};

/// Verbosity of console output.
///
/// Discriminants are the numeric levels used by the console runtime, so
/// levels compare in the natural order (`Quiet < Normal < ... < Debug`).
///
/// # Examples
///
/// ```
/// use signature_console::Verbosity;
///
/// assert_eq!(Verbosity::from_symbol("vv"), Verbosity::VeryVerbose);
/// assert_eq!(Verbosity::from_symbol("loud"), Verbosity::Normal);
/// assert_eq!(Verbosity::Debug.level(), 256);
/// assert!(Verbosity::Quiet < Verbosity::Normal);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
#[repr(u16)]
pub enum Verbosity {
    Quiet = 16,
    #[default]
    Normal = 32,
    Verbose = 64,
    VeryVerbose = 128,
    Debug = 256,
}

impl Verbosity {
    /// Maps a symbolic level (`v`, `vv`, `vvv`, `quiet`, `normal`).
    ///
    /// Unrecognized symbols map to [`Verbosity::Normal`].
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "v" => Self::Verbose,
            "vv" => Self::VeryVerbose,
            "vvv" => Self::Debug,
            "quiet" => Self::Quiet,
            _ => Self::Normal,
        }
    }

    /// Returns the symbolic name of this level.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "v",
            Self::VeryVerbose => "vv",
            Self::Debug => "vvv",
        }
    }

    /// Derives a level from `--quiet` and the number of `-v` flags.
    ///
    /// `--quiet` wins over any number of `-v`.
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::VeryVerbose,
            _ => Self::Debug,
        }
    }

    /// Returns the numeric level.
    pub fn level(self) -> u16 {
        self as u16
    }
}

impl From<String> for Verbosity {
    fn from(symbol: String) -> Self {
        Self::from_symbol(&symbol)
    }
}

impl From<Verbosity> for String {
    fn from(verbosity: Verbosity) -> Self {
        verbosity.symbol().to_string()
    }
}
