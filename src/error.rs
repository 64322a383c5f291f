use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No display devices were reported by the host")]
    NoDisplays,

    #[error("Display identifier {0:?} does not contain a display number")]
    UnparseableIdentifier(String),

    #[error("Display index {index} is out of range for {len} device(s)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Failed to enumerate displays: {0}")]
    Enumeration(String),

    #[error("WebDriver error `{error}`: {message}")]
    WebDriver { error: String, message: String },

    #[error("Malformed WebDriver response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
