//! Error types for txregions.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to decompress {}: {source}", .path.display())]
    Decompression {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed line {line} in {}: {reason}", .path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("chromosome {chromosome} of transcript {transcript} has no coverage entries")]
    MissingChromosome {
        transcript: String,
        chromosome: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(path: &std::path::Path, line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedLine {
            path: path.to_path_buf(),
            line,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_error_messages() {
        let err = Error::malformed(Path::new("exons.txt"), 3, "expected 6 fields");
        assert_eq!(err.to_string(), "malformed line 3 in exons.txt: expected 6 fields");

        let err = Error::MissingChromosome {
            transcript: "NM_1".to_string(),
            chromosome: "chrM".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "chromosome chrM of transcript NM_1 has no coverage entries"
        );

        let err = Error::FileNotFound(PathBuf::from("cov.gz"));
        assert_eq!(err.to_string(), "file not found: cov.gz");
    }
}
