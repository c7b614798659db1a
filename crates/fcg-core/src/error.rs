use thiserror::Error;

pub type FcgResult<T> = Result<T, FcgError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FcgError {
    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
