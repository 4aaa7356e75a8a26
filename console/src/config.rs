//! Console configuration.
//!
//! Loaded from YAML, e.g.:
//!
//! ```yaml
//! verbosity: vv
//! output: buffered
//! decorated: false
//! interactive: false
//! ```
//!
//! Every key is optional.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::output::{BufferedOutput, Output, OutputKind, TerminalOutput};
use crate::verbosity::Verbosity;

/// Settings used to construct an [`Output`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Initial verbosity; runtime flags may raise or lower it per run.
    pub verbosity: Verbosity,
    /// Adapter to construct.
    pub output: OutputKind,
    /// Whether styles are rendered.
    pub decorated: bool,
    /// Whether prompts may wait for answers.
    pub interactive: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            output: OutputKind::Terminal,
            decorated: true,
            interactive: true,
        }
    }
}

impl ConsoleConfig {
    /// Loads the configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// Parses the configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Constructs the configured output adapter.
    pub fn build_output(&self) -> Box<dyn Output> {
        match self.output {
            OutputKind::Terminal => Box::new(TerminalOutput::new(
                self.verbosity,
                self.decorated,
                self.interactive,
            )),
            OutputKind::Buffered => Box::new(self.build_buffered()),
        }
    }

    /// Constructs a [`BufferedOutput`] with these settings, regardless of
    /// [`output`](Self::output).
    pub fn build_buffered(&self) -> BufferedOutput {
        let mut output = BufferedOutput::new()
            .with_verbosity(self.verbosity)
            .decorated(self.decorated);
        output.set_interactive(self.interactive);
        output
    }
}
