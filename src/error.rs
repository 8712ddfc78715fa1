use std::error::Error as StdError;
use thiserror::Error;

/// Coarse classification used by the session boundary when reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The page could not be fetched.
    Transport,
    /// The first page of a search held no listing containers.
    NoResults,
    /// Anything else: bad input, broken markup, I/O on the console.
    Unexpected,
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to fetch {url}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("{url} answered with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("no properties found for {url}")]
    NoResults { url: String },

    #[error("'{url}' is not a valid URL")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("no supported listing site for host '{host}'")]
    UnsupportedSite { host: String },

    #[error("malformed pagination on {url}: {detail}")]
    MalformedPagination { url: String, detail: String },

    #[error("invalid selector '{selector}': {detail}")]
    Selector { selector: String, detail: String },

    #[error("console I/O failed")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    pub fn transport<E>(url: &str, source: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        ScrapeError::Transport {
            url: url.to_string(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ScrapeError::Transport { .. } | ScrapeError::HttpStatus { .. } => ErrorKind::Transport,
            ScrapeError::NoResults { .. } => ErrorKind::NoResults,
            _ => ErrorKind::Unexpected,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
