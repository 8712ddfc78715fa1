use crate::error::{ErrorKind, ScrapeError};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::error::Error as StdError;
use std::io::{self, Write};

/// Coloured progress lines for a search run. Written to stderr by the
/// binaries so stdout carries only listings.
pub struct StatusLine<W: Write> {
    out: W,
}

impl<W: Write> StatusLine<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn fetched(&mut self, page: usize, url: &str) -> io::Result<()> {
        self.line(Color::White, format!("⬇ Fetched page {}: {}", page, truncate_url(url)))
    }

    pub fn page_done(&mut self, page: usize, kept: usize) -> io::Result<()> {
        self.line(Color::DarkGrey, format!("✓ Page {}: {} listings", page, kept))
    }

    pub fn finished(&mut self, pages: usize, total: usize) -> io::Result<()> {
        self.line(
            Color::Green,
            format!("✓ Found {} listings across {} page(s)", total, pages),
        )
    }

    fn line(&mut self, color: Color, text: String) -> io::Result<()> {
        queue!(
            self.out,
            SetForegroundColor(color),
            Print(text),
            ResetColor,
            Print("\n")
        )?;
        self.out.flush()
    }
}

/// Writes the single top-level error report: one line with the message and
/// its cause chain, plus the debug form for unclassified failures.
pub fn report_error<W: Write>(out: &mut W, err: &ScrapeError) -> io::Result<()> {
    let mut message = format!("Error: {}", err);
    let mut cause = err.source();
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }

    queue!(out, SetForegroundColor(Color::Red), Print(message), ResetColor, Print("\n"))?;

    if err.kind() == ErrorKind::Unexpected {
        queue!(
            out,
            SetForegroundColor(Color::DarkGrey),
            Print(format!("  {:?}", err)),
            ResetColor,
            Print("\n")
        )?;
    }
    out.flush()
}

fn truncate_url(url: &str) -> String {
    const MAX: usize = 90;
    if url.chars().count() <= MAX {
        url.to_string()
    } else {
        let head: String = url.chars().take(MAX - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn transport_report_is_one_line_with_cause() {
        let err = ScrapeError::transport(
            "https://www.zoopla.co.uk/for-sale/",
            io::Error::new(io::ErrorKind::TimedOut, "operation timed out"),
        );
        let mut out = Vec::new();
        report_error(&mut out, &err).unwrap();

        let report = text(out);
        assert_eq!(report.lines().count(), 1);
        assert!(report.contains("Error: failed to fetch https://www.zoopla.co.uk/for-sale/: operation timed out"));
    }

    #[test]
    fn unexpected_report_adds_diagnostic() {
        let err = ScrapeError::MalformedPagination {
            url: "https://www.rightmove.co.uk/find".into(),
            detail: "bad href".into(),
        };
        let mut out = Vec::new();
        report_error(&mut out, &err).unwrap();

        let report = text(out);
        assert_eq!(report.lines().count(), 2);
        assert!(report.contains("MalformedPagination"));
    }

    #[test]
    fn status_lines_mention_page_and_count() {
        let mut status = StatusLine::new(Vec::new());
        status.fetched(2, "https://www.rightmove.co.uk/search/page-2").unwrap();
        status.page_done(2, 7).unwrap();

        let log = text(status.into_inner());
        assert!(log.contains("Fetched page 2: https://www.rightmove.co.uk/search/page-2"));
        assert!(log.contains("Page 2: 7 listings"));
    }

    #[test]
    fn long_urls_are_truncated() {
        let url = format!("https://www.rightmove.co.uk/{}", "a".repeat(200));
        let short = truncate_url(&url);
        assert_eq!(short.chars().count(), 90);
        assert!(short.ends_with("..."));
    }
}
