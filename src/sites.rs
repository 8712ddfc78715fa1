use crate::error::{Result, ScrapeError};
use crate::models::Field;
use clap::ValueEnum;
use scraper::Selector;
use url::Url;

/// How a listing container is recognised on a results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerMarker {
    /// `id` attribute starts with a fixed token, e.g. `property-12345`.
    IdPrefix(&'static str),
    /// An attribute equal to a fixed token, e.g. `data-testid="search-result"`.
    AttributeEquals {
        name: &'static str,
        value: &'static str,
    },
}

impl ContainerMarker {
    pub fn to_css(&self, tag: &str) -> String {
        match self {
            ContainerMarker::IdPrefix(prefix) => format!("{}[id^=\"{}\"]", tag, prefix),
            ContainerMarker::AttributeEquals { name, value } => {
                format!("{}[{}=\"{}\"]", tag, name, value)
            }
        }
    }
}

/// Markup knowledge for one listings site. Pure data, no behaviour beyond
/// compiling its selectors.
#[derive(Debug, Clone)]
pub struct SiteProfile {
    pub name: &'static str,
    pub host: &'static str,
    pub base_origin: &'static str,
    pub container_tag: &'static str,
    pub container: ContainerMarker,
    pub title: &'static str,
    pub address: &'static str,
    pub price: &'static str,
    pub metadata: &'static str,
    pub pagination_region: &'static str,
    pub pagination_link: &'static str,
    pub required: &'static [Field],
}

impl SiteProfile {
    pub fn field_selector(&self, field: Field) -> &'static str {
        match field {
            Field::Title => self.title,
            Field::Address => self.address,
            Field::Price => self.price,
            Field::Metadata => self.metadata,
        }
    }

    pub fn container_css(&self) -> String {
        self.container.to_css(self.container_tag)
    }

    pub fn compile(&self) -> Result<CompiledSite> {
        let fields = Field::ALL
            .iter()
            .map(|field| Ok((*field, parse_selector(self.field_selector(*field))?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(CompiledSite {
            profile: self.clone(),
            container: parse_selector(&self.container_css())?,
            fields,
            pagination_region: parse_selector(self.pagination_region)?,
            pagination_link: parse_selector(self.pagination_link)?,
        })
    }
}

pub const RIGHTMOVE: SiteProfile = SiteProfile {
    name: "Rightmove",
    host: "rightmove.co.uk",
    base_origin: "https://www.rightmove.co.uk",
    container_tag: "div",
    container: ContainerMarker::IdPrefix("property-"),
    title: "h2",
    address: "address",
    price: "span.propertyCard-priceValue",
    metadata: "div.propertyCard-branchSummary",
    pagination_region: "div.pagination",
    pagination_link: "a",
    required: &[Field::Title, Field::Address, Field::Price],
};

pub const ZOOPLA: SiteProfile = SiteProfile {
    name: "Zoopla",
    host: "zoopla.co.uk",
    base_origin: "https://www.zoopla.co.uk",
    container_tag: "div",
    container: ContainerMarker::AttributeEquals {
        name: "data-testid",
        value: "search-result",
    },
    title: "h2[data-testid=\"listing-title\"]",
    address: "address",
    price: "p[data-testid=\"listing-price\"]",
    metadata: "[data-testid=\"listing-date\"]",
    pagination_region: "nav[data-testid=\"pagination\"]",
    pagination_link: "a",
    required: &[],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Site {
    Rightmove,
    Zoopla,
}

impl Site {
    pub fn profile(&self) -> &'static SiteProfile {
        match self {
            Site::Rightmove => &RIGHTMOVE,
            Site::Zoopla => &ZOOPLA,
        }
    }

    /// Picks the site whose host matches `url` (subdomains included).
    pub fn detect(url: &Url) -> Result<Site> {
        let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
        [Site::Rightmove, Site::Zoopla]
            .into_iter()
            .find(|site| {
                let domain = site.profile().host;
                host == domain || host.ends_with(&format!(".{}", domain))
            })
            .ok_or(ScrapeError::UnsupportedSite { host })
    }
}

/// A profile with its selectors parsed, ready to query documents.
#[derive(Debug)]
pub struct CompiledSite {
    pub profile: SiteProfile,
    pub container: Selector,
    pub fields: Vec<(Field, Selector)>,
    pub pagination_region: Selector,
    pub pagination_link: Selector,
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        selector: css.to_string(),
        detail: format!("{:?}", e),
    })
}
