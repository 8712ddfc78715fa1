use pretty_assertions::assert_eq;
use propscout::console::{self, StatusLine};
use propscout::error::Result;
use propscout::fetcher::PageFetcher;
use propscout::pipeline::{run_search, ScrapingOptions};
use propscout::session::{Session, SessionState};
use propscout::{ErrorKind, ScrapeError};
use std::collections::HashMap;
use std::io::{self, Cursor};

struct MapFetcher(HashMap<&'static str, String>);

impl PageFetcher for MapFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        self.0.get(url).cloned().ok_or_else(|| {
            ScrapeError::transport(
                url,
                io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"),
            )
        })
    }
}

const SEARCH: &str = "https://www.rightmove.co.uk/property-to-rent/find.html?locationIdentifier=REGION%5E87490";

fn rightmove_card(id: u32, title: &str, address: &str, price: &str) -> String {
    format!(
        r#"<div id="property-{id}" class="l-searchResult">
             <div class="propertyCard">
               <h2 class="propertyCard-title">{title}</h2>
               <address class="propertyCard-address"><span>{address}</span></address>
               <span class="propertyCard-priceValue">{price}</span>
               <div class="propertyCard-branchSummary">
                 Added by Acme Agents
               </div>
             </div>
           </div>"#
    )
}

#[test]
fn incomplete_listing_is_dropped() {
    let body = format!(
        "<html><body>{}{}</body></html>",
        rightmove_card(1, "Flat", "1 Main St", "£1,200 pcm"),
        rightmove_card(2, "", "2 Main St", "£950 pcm"),
    );
    let fetcher = MapFetcher(HashMap::from([(SEARCH, body)]));
    let mut out = Vec::new();
    let mut status = StatusLine::new(io::sink());

    let result = run_search(&fetcher, SEARCH, &ScrapingOptions::default(), &mut out, &mut status).unwrap();

    assert_eq!(result.listings, 1);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "----------------------------- #1 -----------------------------\n\
         Flat\n1 Main St\n£1,200 pcm\nAdded by Acme Agents\n\n"
    );
}

#[test]
fn second_page_numbering_starts_after_first() {
    let first = format!(
        r#"<html><body>{}{}{}<div class="pagination"><a href="/search/page-2">Next</a></div></body></html>"#,
        rightmove_card(1, "Flat", "1 Main St", "£1"),
        rightmove_card(2, "Flat", "2 Main St", "£2"),
        rightmove_card(3, "Flat", "3 Main St", "£3"),
    );
    let second = format!(
        "<html><body>{}</body></html>",
        rightmove_card(4, "House", "4 Main St", "£4")
    );
    let fetcher = MapFetcher(HashMap::from([
        (SEARCH, first),
        ("https://www.rightmove.co.uk/search/page-2", second),
    ]));
    let mut out = Vec::new();
    let mut status = StatusLine::new(io::sink());

    let result = run_search(&fetcher, SEARCH, &ScrapingOptions::default(), &mut out, &mut status).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(result.pages, 2);
    assert!(output.contains("----------------------------- #4 -----------------------------\nHouse\n4 Main St"));
    assert!(!output.contains("#5"));
}

#[test]
fn transport_error_ends_session_with_one_line_report() {
    let fetcher = MapFetcher(HashMap::new());
    let input = Cursor::new(format!("{}\n\n", SEARCH).into_bytes());
    let mut session = Session::new(&fetcher, ScrapingOptions::default(), input, Vec::new(), io::sink());

    let err = session.run().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(session.state(), SessionState::Done);

    let output = String::from_utf8(session.into_output()).unwrap();
    assert!(!output.contains("#1"));

    let mut report = Vec::new();
    console::report_error(&mut report, &err).unwrap();
    let report = String::from_utf8(report).unwrap();
    assert_eq!(report.lines().count(), 1);
    assert!(report.contains("connection refused"));
}

#[test]
fn no_results_is_reported_distinctly() {
    let fetcher = MapFetcher(HashMap::from([(SEARCH, "<html><body><h1>0 results</h1></body></html>".to_string())]));
    let input = Cursor::new(format!("{}\n", SEARCH).into_bytes());
    let mut session = Session::new(&fetcher, ScrapingOptions::default(), input, Vec::new(), io::sink());

    let err = session.run().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoResults);
    assert!(err.to_string().starts_with("no properties found"));
}
