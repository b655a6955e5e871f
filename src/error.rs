use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown case style `{0}`")]
    UnknownStyle(String),

    #[error("`{0}` has no characters left to form an identifier")]
    EmptyIdentifier(String),
}
