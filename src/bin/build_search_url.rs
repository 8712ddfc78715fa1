use anyhow::{ensure, Result};
use clap::Parser;
use propscout::logging;
use propscout::search::{Channel, SearchParams};
use propscout::sites::Site;
use tracing::debug;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Build a Rightmove or Zoopla search URL to paste into propscout")]
struct Args {
    /// Site to build the URL for
    #[clap(short, long, value_enum, default_value = "rightmove")]
    site: Site,

    /// Rightmove location identifier (e.g. REGION^87490) or Zoopla area name
    #[clap(short, long)]
    location: String,

    /// Buy or rent
    #[clap(short, long, value_enum, default_value = "buy")]
    channel: Channel,

    #[clap(long)]
    min_price: Option<u32>,

    #[clap(long)]
    max_price: Option<u32>,

    #[clap(long)]
    min_bedrooms: Option<u8>,

    #[clap(long)]
    max_bedrooms: Option<u8>,

    /// Search radius in miles
    #[clap(short, long)]
    radius: Option<f32>,

    /// Property type filter, repeatable (e.g. flat, detached)
    #[clap(short = 't', long = "property-type")]
    property_types: Vec<String>,

    /// Enable debug output
    #[clap(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.debug);

    ensure!(!args.location.trim().is_empty(), "location must not be empty");
    if let (Some(min), Some(max)) = (args.min_price, args.max_price) {
        ensure!(min <= max, "min price {} is above max price {}", min, max);
    }

    let params = SearchParams {
        location: args.location,
        channel: args.channel,
        min_price: args.min_price,
        max_price: args.max_price,
        min_bedrooms: args.min_bedrooms,
        max_bedrooms: args.max_bedrooms,
        radius: args.radius,
        property_types: args.property_types,
    };
    debug!("Building {:?} URL from {:?}", args.site, params);

    println!("{}", params.to_url(args.site));
    Ok(())
}
