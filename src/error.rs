use std::fmt::Display;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The method string is not a valid HTTP token.
    InvalidMethod(String),
}

impl Error {
    pub fn invalid_method<S: AsRef<str>>(method: S) -> Self {
        Self::InvalidMethod(method.as_ref().to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMethod(method) => {
                "Invalid HTTP method: ".fmt(f)?;
                method.fmt(f)
            }
        }
    }
}

impl std::error::Error for Error {}
