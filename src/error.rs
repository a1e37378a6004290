use thiserror::Error;

/// Errors produced when turning user or record text into closet vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text does not name any known value of `kind`
    #[error("unknown {kind}: '{value}'")]
    Unknown {
        kind: &'static str,
        value: String,
    },
}

impl ParseError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::Unknown {
            kind,
            value: value.to_owned(),
        }
    }
}
