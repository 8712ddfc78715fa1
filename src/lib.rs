pub mod console;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod logging;
pub mod models;
pub mod pagination;
pub mod pipeline;
pub mod presenter;
pub mod search;
pub mod session;
pub mod sites;

pub use error::{ErrorKind, ScrapeError};
pub use models::{Field, Listing};
