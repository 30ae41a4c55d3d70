use std::fmt;

/// Batch-level errors. Records are zero-based; the index always refers to the
/// position of the offending line in the input files.
///
/// Impls are hand-written instead of `#[derive(thiserror::Error)]`: thiserror
/// treats any field named `source` as the error's source, which does not
/// type-check for the `usize` field of `InvalidAlignmentIndex`.
#[derive(Debug)]
pub enum CodeSwitchError {
    Parse {
        record: usize,
        message: String,
    },

    InvalidAlignmentIndex {
        record: usize,
        source: usize,
        target: usize,
        source_len: usize,
        target_len: usize,
    },

    Io(std::io::Error),
}

impl fmt::Display for CodeSwitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeSwitchError::Parse { record, message } => {
                write!(f, "record {record}: {message}")
            }
            CodeSwitchError::InvalidAlignmentIndex {
                record,
                source,
                target,
                source_len,
                target_len,
            } => write!(
                f,
                "record {record}: alignment edge {source}-{target} out of range for \
                 {source_len}x{target_len} sentence pair"
            ),
            CodeSwitchError::Io(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for CodeSwitchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodeSwitchError::Io(err) => std::error::Error::source(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CodeSwitchError {
    fn from(err: std::io::Error) -> Self {
        CodeSwitchError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, CodeSwitchError>;
