use thiserror::Error;

/// Errors raised by profile construction, scoring and input handling.
#[derive(Debug, Error)]
pub enum MsaError {
    /// A profile needs at least one row.
    #[error("profile has no rows")]
    EmptyProfile,

    /// All rows of a profile must have the same length.
    #[error("row {row} has length {len}, expected {expected}")]
    RaggedProfile {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// The substitution matrix has no entry for this symbol.
    #[error("symbol {symbol:?} is not in the substitution matrix alphabet")]
    UnknownSymbol { symbol: char },

    #[error("unknown substitution matrix {0:?}")]
    UnknownMatrix(String),

    /// Malformed input data.
    #[error("{0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
