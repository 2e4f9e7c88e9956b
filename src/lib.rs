//! Core library entry for the `cluster-id` CLI.

pub mod adapters;
pub mod cli;
pub mod emit;
pub mod encode;
pub mod error;
pub mod identifier;
pub mod ports;

use std::io::Write;

use clap::Parser;

use crate::error::ClusterIdError;
use crate::identifier::ClusterId;
use crate::ports::RandomSource;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or the
/// generate/encode/emit pipeline fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let _cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    let source = adapters::live::OsRandomSource::new();
    let stdout = std::io::stdout();
    emit_cluster_id(&source, &mut stdout.lock()).map_err(|err| err.to_string())
}

/// Generates one cluster identifier and writes its encoded form to `out`.
///
/// The pipeline is strictly generate → encode → emit; a failure at any stage
/// aborts before the next stage runs, so `out` never sees partial output.
///
/// # Errors
///
/// Returns [`ClusterIdError`] when the randomness source fails or the write
/// to `out` fails.
pub fn emit_cluster_id(
    source: &dyn RandomSource,
    out: &mut dyn Write,
) -> Result<(), ClusterIdError> {
    let id = ClusterId::generate(source)?;
    let encoded = encode::encode(id.as_bytes())?;
    emit::emit(out, &encoded)
}
