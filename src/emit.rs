//! Output emission.

use std::io::Write;

use crate::error::ClusterIdError;

/// Writes the encoded identifier and a terminating newline to `out`.
///
/// Nothing else is written: no labels, no timestamps. The writer is flushed
/// so a dead stream fails here rather than silently at process exit.
///
/// # Errors
///
/// Returns [`ClusterIdError::Io`] when the stream is closed or unwritable.
pub fn emit(out: &mut dyn Write, encoded: &str) -> Result<(), ClusterIdError> {
    writeln!(out, "{encoded}")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_the_string_and_a_single_newline() {
        let mut out = Vec::new();
        emit(&mut out, "NDJ0gheiRaK_uYYZCmiTbQ").expect("write to vec");
        assert_eq!(out, b"NDJ0gheiRaK_uYYZCmiTbQ\n");
    }

    #[test]
    fn closed_stream_surfaces_an_io_error() {
        let result = emit(&mut ClosedPipe, "NDJ0gheiRaK_uYYZCmiTbQ");
        assert!(matches!(result, Err(ClusterIdError::Io(_))));
    }
}
