use anyhow::{Context, Result};
use clap::Parser;
use propscout::console;
use propscout::fetcher::{HttpFetcher, DEFAULT_USER_AGENT};
use propscout::logging;
use propscout::pipeline::ScrapingOptions;
use propscout::session::Session;
use propscout::sites::Site;
use std::io;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Propscout - prints property listings from Rightmove and Zoopla search pages")]
struct Args {
    /// Site profile to use instead of detecting it from the URL
    #[clap(short, long, value_enum)]
    site: Option<Site>,

    /// Maximum number of result pages to walk per search (default: all)
    #[clap(short, long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    max_pages: Option<usize>,

    /// User agent sent with every request
    #[clap(short, long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Enable debug output
    #[clap(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.debug);

    let fetcher = HttpFetcher::with_user_agent(&args.user_agent).context("Failed to create HTTP client")?;
    let options = ScrapingOptions {
        site: args.site,
        max_pages: args.max_pages,
    };

    let stdin = io::stdin();
    let mut session = Session::new(&fetcher, options, stdin.lock(), io::stdout(), io::stderr());

    if let Err(err) = session.run() {
        console::report_error(&mut io::stderr(), &err).context("Failed to write error report")?;
        std::process::exit(1);
    }

    Ok(())
}
