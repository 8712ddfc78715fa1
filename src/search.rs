use crate::sites::Site;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Channel {
    #[default]
    Buy,
    Rent,
}

/// Search filters turned into a results-page URL. Nothing here touches the
/// network.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    /// Rightmove location identifier (e.g. `REGION^87490`) or Zoopla area slug.
    pub location: String,
    pub channel: Channel,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub min_bedrooms: Option<u8>,
    pub max_bedrooms: Option<u8>,
    /// Search radius in miles.
    pub radius: Option<f32>,
    pub property_types: Vec<String>,
}

impl SearchParams {
    /// Query string pairs in the parameter names `site` expects.
    pub fn query_pairs(&self, site: Site) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let names = match site {
            Site::Rightmove => ["minPrice", "maxPrice", "minBedrooms", "maxBedrooms", "radius"],
            Site::Zoopla => ["price_min", "price_max", "beds_min", "beds_max", "radius"],
        };

        if site == Site::Rightmove {
            pairs.push(("locationIdentifier", self.location.clone()));
        }

        let values = [
            self.min_price.map(|v| v.to_string()),
            self.max_price.map(|v| v.to_string()),
            self.min_bedrooms.map(|v| v.to_string()),
            self.max_bedrooms.map(|v| v.to_string()),
            self.radius.map(|v| v.to_string()),
        ];
        for (name, value) in names.into_iter().zip(values) {
            if let Some(value) = value {
                pairs.push((name, value));
            }
        }

        match site {
            Site::Rightmove if !self.property_types.is_empty() => {
                pairs.push(("propertyTypes", self.property_types.join(",")));
            }
            Site::Zoopla => {
                for kind in &self.property_types {
                    pairs.push(("property_sub_type", kind.clone()));
                }
            }
            _ => {}
        }

        pairs
    }

    pub fn to_query_string(&self, site: Site) -> String {
        self.query_pairs(site)
            .iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn to_url(&self, site: Site) -> String {
        let origin = site.profile().base_origin;
        let path = match (site, self.channel) {
            (Site::Rightmove, Channel::Buy) => "/property-for-sale/find.html".to_string(),
            (Site::Rightmove, Channel::Rent) => "/property-to-rent/find.html".to_string(),
            (Site::Zoopla, channel) => {
                let section = match channel {
                    Channel::Buy => "for-sale",
                    Channel::Rent => "to-rent",
                };
                let slug = self.location.trim().to_lowercase().replace(' ', "-");
                format!("/{}/property/{}/", section, urlencoding::encode(&slug))
            }
        };

        let query = self.to_query_string(site);
        if query.is_empty() {
            format!("{}{}", origin, path)
        } else {
            format!("{}{}?{}", origin, path, query)
        }
    }
}
