//! Writing hex sequences to files and other sinks.
//!
//! `write_hex_sequence` is the entry used by the CLI: it creates (or
//! truncates) the target file and writes one `HH\n` record per line.
//! Replacement is not atomic; a failure mid-write leaves a partial file behind.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::{HexSeqError, Result};
use crate::sequence::{HexSequence, hex_byte};

/// Number of lines written by a successful call.
pub type LineCount = u64;

/// Write the hex sequence for `length` lines to `path`.
///
/// Parameters
/// - `path`: output file; created if missing, truncated if present.
/// - `length`: requested line count. Zero or negative values create an empty
///   file.
///
/// Returns
/// - `Ok(LineCount)` with the number of lines written.
/// - `Err(HexSeqError::File)` when the file cannot be opened, written, or
///   flushed.
pub fn write_hex_sequence<P: AsRef<Path>>(path: P, length: i64) -> Result<LineCount> {
    let path = path.as_ref();
    let file_error = |source| HexSeqError::File {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(file_error)?;
    debug!("Opened {} for writing", path.display());

    let mut out = BufWriter::new(file);
    let written = write_hex_lines(&mut out, length).map_err(file_error)?;
    // Flush here so a full disk is reported instead of lost on drop.
    out.flush().map_err(file_error)?;

    debug!("Wrote {} lines to {}", written, path.display());
    Ok(written)
}

/// Write the hex sequence for `length` lines to `sink`.
///
/// The sink is not flushed; wrap unbuffered writers in a `BufWriter`.
pub fn write_hex_lines<W: Write>(sink: &mut W, length: i64) -> io::Result<LineCount> {
    let mut written = 0;
    for v in HexSequence::new(length) {
        let [hi, lo] = hex_byte(v);
        sink.write_all(&[hi, lo, b'\n'])?;
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(length: i64) -> String {
        let mut buf = Vec::new();
        write_hex_lines(&mut buf, length).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_four_lines() {
        assert_eq!(render(4), "01\n02\n03\n04\n");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(render(1), "01\n");
    }

    #[test]
    fn test_empty_for_non_positive() {
        assert_eq!(render(0), "");
        assert_eq!(render(-3), "");
    }

    #[test]
    fn test_full_cycle_ends_with_zero() {
        let out = render(256);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 256);
        assert_eq!(lines[9], "0A");
        assert_eq!(lines[254], "FF");
        assert_eq!(lines[255], "00");
    }

    #[test]
    fn test_returns_line_count() {
        let mut buf = Vec::new();
        assert_eq!(write_hex_lines(&mut buf, 513).unwrap(), 513);
        assert_eq!(buf.len(), 513 * 3);
    }

    struct FailAfter(usize);

    impl Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.0 < buf.len() {
                return Err(io::Error::new(io::ErrorKind::StorageFull, "no space left"));
            }
            self.0 -= buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_error_propagates() {
        let mut sink = FailAfter(6);
        let err = write_hex_lines(&mut sink, 10).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::StorageFull);
    }

    #[test]
    fn test_missing_directory_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("data.hex");
        match write_hex_sequence(&path, 4) {
            Err(HexSeqError::File { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected file error, got {:?}", other),
        }
    }
}
