//! Binary entrypoint for the `cluster-id` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match cluster_id::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
