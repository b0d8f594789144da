#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SeqError {
    #[error("{operation}() called on an empty sequence")]
    EmptySequence { operation: &'static str },

    #[error("single() called on a sequence with more than one element")]
    MultipleElements,
}

impl SeqError {
    pub(crate) fn empty_sequence(operation: &'static str) -> Self {
        SeqError::EmptySequence { operation }
    }
}

pub type Result<T> = std::result::Result<T, SeqError>;
