use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The count argument is not a decimal integer that fits in an `i64`.
    #[error("invalid count argument `{input}`")]
    InvalidArgument { input: String },
}
