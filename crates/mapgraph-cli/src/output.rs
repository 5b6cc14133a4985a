//! Output format selection and JSON emission.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        self == OutputFormat::Json
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<T: Serialize, W: Write>(value: &T, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value).context("failed to serialise output")?;
    writeln!(writer)?;
    Ok(())
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    write_json(value, stdout.lock())
}
