use crate::error::{Result, ScrapeError};
use crate::sites::CompiledSite;
use scraper::Html;
use tracing::debug;
use url::Url;

/// Finds the next results page: the last link inside the pagination region,
/// resolved against the page it was found on.
///
/// `Ok(None)` means the control is structurally absent (no region, no link,
/// or a link that goes nowhere) and iteration should stop.
pub fn next_page_url(document: &Html, site: &CompiledSite, current: &Url) -> Result<Option<Url>> {
    let region = match document.select(&site.pagination_region).next() {
        Some(region) => region,
        None => {
            debug!("No pagination region on {}", current);
            return Ok(None);
        }
    };

    let href = match region
        .select(&site.pagination_link)
        .last()
        .and_then(|link| link.value().attr("href"))
    {
        Some(href) => href.trim(),
        None => {
            debug!("Pagination region on {} has no usable link", current);
            return Ok(None);
        }
    };

    resolve_href(current, href)
}

/// Resolves a pagination href. Path-only hrefs land on the current page's
/// origin. Placeholder hrefs (`""`, `#`, `javascript:`) yield `None`.
pub fn resolve_href(current: &Url, href: &str) -> Result<Option<Url>> {
    if href.is_empty() || href.starts_with('#') || href.to_ascii_lowercase().starts_with("javascript:") {
        return Ok(None);
    }

    current
        .join(href)
        .map(Some)
        .map_err(|e| ScrapeError::MalformedPagination {
            url: current.to_string(),
            detail: format!("cannot resolve '{}': {}", href, e),
        })
}
