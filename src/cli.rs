//! CLI argument definitions.

use clap::Parser;

/// Top-level CLI parser for `cluster-id`.
///
/// The program takes no operands: every invocation generates one identifier
/// and prints it. Parsing still rejects anything unrecognized and serves the
/// standard `--help`/`--version` surface.
#[derive(Debug, Parser)]
#[command(name = "cluster-id", version, about = "Generate a broker cluster identifier")]
pub struct Cli {}
