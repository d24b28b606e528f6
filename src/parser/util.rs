//! Utility functions for file parsing.

use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Open a file, reporting a missing path as [`Error::FileNotFound`].
pub fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })
}

/// Creates a buffered reader that automatically handles gzip-compressed files.
///
/// This function checks if the file path ends with ".gz" and wraps the file
/// in a gzip decoder if so. Otherwise, it returns a plain buffered reader.
pub fn create_buffered_reader(file: File, path: &Path) -> Box<dyn BufRead> {
    if is_gzip_path(path) {
        create_gzip_reader(file)
    } else {
        Box::new(BufReader::new(file))
    }
}

/// Buffered reader over a gzip stream, regardless of file name.
///
/// Multi-member streams (bgzip output) are decoded to the end.
pub fn create_gzip_reader(file: File) -> Box<dyn BufRead> {
    Box::new(BufReader::new(MultiGzDecoder::new(file)))
}

/// Whether a read error came from a broken compressed stream rather than the filesystem.
fn is_decompression_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::InvalidInput | io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof
    )
}

/// Classify an error raised while reading lines from `path`.
pub fn read_error(path: &Path, err: io::Error, compressed: bool) -> Error {
    if compressed && is_decompression_error(&err) {
        Error::Decompression {
            path: path.to_path_buf(),
            source: err,
        }
    } else {
        Error::Io(err)
    }
}

/// Read the next line from `reader` into `buf`, without its line terminator.
///
/// Returns `Ok(None)` at end of input. Only errors raised by the reader are
/// classified with [`read_error`]; bytes that are not UTF-8 make the line
/// malformed.
pub fn read_line<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    path: &Path,
    line_number: usize,
    compressed: bool,
) -> Result<Option<String>> {
    buf.clear();
    let bytes_read = reader
        .read_until(b'\n', buf)
        .map_err(|e| read_error(path, e, compressed))?;

    if bytes_read == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    String::from_utf8(buf.clone())
        .map(Some)
        .map_err(|_| Error::malformed(path, line_number, "invalid UTF-8"))
}

/// Whether `path` names a gzip file by extension.
pub fn is_gzip_path(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".gz")
}
