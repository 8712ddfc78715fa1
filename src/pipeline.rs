use crate::console::StatusLine;
use crate::error::{Result, ScrapeError};
use crate::extractor;
use crate::fetcher::PageFetcher;
use crate::pagination;
use crate::presenter;
use crate::sites::Site;
use scraper::Html;
use std::collections::HashSet;
use std::io::Write;
use tracing::{debug, info, warn};
use url::Url;

#[derive(Debug, Clone, Default)]
pub struct ScrapingOptions {
    /// Force a site profile instead of detecting it from the URL host.
    pub site: Option<Site>,
    /// Stop after this many pages. `None` walks until pagination runs out.
    pub max_pages: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapingResult {
    pub site: &'static str,
    pub pages: usize,
    pub listings: usize,
}

pub fn parse_search_url(input: &str) -> Result<Url> {
    let input = input.trim();
    Url::parse(input).map_err(|source| ScrapeError::InvalidUrl {
        url: input.to_string(),
        source,
    })
}

/// Runs one search: fetches the start page, prints its listings, then
/// follows pagination until it runs out. Numbering continues across pages.
pub fn run_search<F, W, S>(
    fetcher: &F,
    start_url: &str,
    options: &ScrapingOptions,
    out: &mut W,
    status: &mut StatusLine<S>,
) -> Result<ScrapingResult>
where
    F: PageFetcher + ?Sized,
    W: Write,
    S: Write,
{
    let mut url = parse_search_url(start_url)?;
    let site = match options.site {
        Some(site) => site,
        None => Site::detect(&url)?,
    };
    let compiled = site.profile().compile()?;
    info!("Searching {} from {}", compiled.profile.name, url);

    let mut visited = HashSet::new();
    let mut pages = 0;
    let mut next_index = 1;

    loop {
        pages += 1;
        visited.insert(url.to_string());

        let body = fetcher.fetch(url.as_str())?;
        status.fetched(pages, url.as_str())?;
        let document = Html::parse_document(&body);

        let listings = match extractor::extract_listings(&document, &compiled, url.as_str()) {
            Ok(listings) => listings,
            Err(ScrapeError::NoResults { .. }) if pages > 1 => {
                info!("Page {} has no listings, stopping", pages);
                break;
            }
            Err(err) => return Err(err),
        };
        next_index += presenter::print_listings(out, &listings, next_index)?;
        status.page_done(pages, listings.len())?;

        // Only looked at once this page's listings are out.
        let next = match pagination::next_page_url(&document, &compiled, &url)? {
            Some(next) => next,
            None => {
                debug!("No next page after page {}", pages);
                break;
            }
        };

        if options.max_pages.map_or(false, |max| pages >= max) {
            info!("Reached maximum number of pages ({}), stopping", pages);
            break;
        }
        if visited.contains(next.as_str()) {
            warn!("Pagination points back to {}, stopping", next);
            break;
        }
        url = next;
    }

    let result = ScrapingResult {
        site: compiled.profile.name,
        pages,
        listings: next_index - 1,
    };
    status.finished(result.pages, result.listings)?;
    Ok(result)
}
