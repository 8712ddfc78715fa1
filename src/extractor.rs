use crate::error::{Result, ScrapeError};
use crate::models::{Field, Listing};
use crate::sites::CompiledSite;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Collapses whitespace runs (newlines included) to single spaces and trims.
/// Text that ends up empty counts as missing.
pub fn normalize_text<'a, I>(parts: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut text = String::new();
    for word in parts.into_iter().flat_map(str::split_whitespace) {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(word);
    }

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Text of the first descendant of `container` matching `selector`.
pub fn extract_field(container: ElementRef<'_>, selector: &Selector) -> Option<String> {
    container
        .select(selector)
        .next()
        .and_then(|element| normalize_text(element.text()))
}

fn find_containers<'a>(document: &'a Html, site: &CompiledSite) -> Vec<ElementRef<'a>> {
    document.select(&site.container).collect()
}

/// Reads every field of one container. Each lookup stands alone, a miss on
/// one leaves the others untouched.
pub fn extract_listing(container: ElementRef<'_>, site: &CompiledSite) -> Listing {
    let mut listing = Listing::default();
    for (field, selector) in &site.fields {
        let value = extract_field(container, selector);
        if value.is_none() {
            debug!(
                "{} container {:?}: no {}",
                site.profile.name,
                container.value().id(),
                field
            );
        }
        listing.set(*field, value);
    }
    listing
}

/// Whether a listing survives the site's mandatory-field policy. Listings
/// with no text at all are dropped for every site.
pub fn is_complete(listing: &Listing, required: &[Field]) -> bool {
    !listing.is_blank() && required.iter().all(|field| listing.has(*field))
}

/// Extracts and filters listings from a set of containers.
fn extract_from_containers(containers: &[ElementRef<'_>], site: &CompiledSite) -> Vec<Listing> {
    let listings: Vec<Listing> = containers
        .iter()
        .map(|container| extract_listing(*container, site))
        .filter(|listing| is_complete(listing, site.profile.required))
        .collect();

    debug!(
        "Kept {} of {} {} containers",
        listings.len(),
        containers.len(),
        site.profile.name
    );
    listings
}

/// Extracts listings from a whole results page. This is the single entry
/// point for the page walk. A page without a single container is a
/// no-results error rather than an empty success.
pub fn extract_listings(document: &Html, site: &CompiledSite, url: &str) -> Result<Vec<Listing>> {
    let containers = find_containers(document, site);
    if containers.is_empty() {
        return Err(ScrapeError::NoResults {
            url: url.to_string(),
        });
    }
    Ok(extract_from_containers(&containers, site))
}
