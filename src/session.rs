use crate::console::StatusLine;
use crate::error::Result;
use crate::fetcher::PageFetcher;
use crate::pipeline::{self, ScrapingOptions};
use std::io::{BufRead, Write};
use tracing::info;

pub const URL_PROMPT: &str = "Enter a search URL: ";
pub const AGAIN_PROMPT: &str = "Press enter to search again, or type q to quit: ";
pub const QUIT: &str = "q";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Prompting,
    Done,
}

/// Interactive prompt loop. Each search is independent; the first error
/// ends the session and is handed back to the caller for reporting.
pub struct Session<'a, F: ?Sized, R, W, S: Write> {
    fetcher: &'a F,
    options: ScrapingOptions,
    input: R,
    out: W,
    status: StatusLine<S>,
    state: SessionState,
    searches: usize,
}

impl<'a, F, R, W, S> Session<'a, F, R, W, S>
where
    F: PageFetcher + ?Sized,
    R: BufRead,
    W: Write,
    S: Write,
{
    pub fn new(fetcher: &'a F, options: ScrapingOptions, input: R, out: W, status: S) -> Self {
        Self {
            fetcher,
            options,
            input,
            out,
            status: StatusLine::new(status),
            state: SessionState::Prompting,
            searches: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of searches that ran to completion.
    pub fn searches(&self) -> usize {
        self.searches
    }

    pub fn run(&mut self) -> Result<()> {
        while self.state == SessionState::Prompting {
            if let Err(err) = self.step() {
                self.state = SessionState::Done;
                return Err(err);
            }
        }
        Ok(())
    }

    /// One pass through the prompting state.
    pub fn step(&mut self) -> Result<()> {
        let url = match self.prompt(URL_PROMPT)? {
            Some(line) => line,
            None => {
                self.state = SessionState::Done;
                return Ok(());
            }
        };
        if url.is_empty() {
            return Ok(());
        }

        writeln!(self.out, "Getting properties...\n")?;
        let result = pipeline::run_search(self.fetcher, &url, &self.options, &mut self.out, &mut self.status)?;
        self.searches += 1;
        info!(
            "Search {} done: {} listings over {} pages from {}",
            self.searches, result.listings, result.pages, result.site
        );

        match self.prompt(AGAIN_PROMPT)? {
            Some(answer) if !answer.eq_ignore_ascii_case(QUIT) => {}
            _ => self.state = SessionState::Done,
        }
        Ok(())
    }

    /// Prints `prompt` and reads one trimmed line. `None` on end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn into_output(self) -> W {
        self.out
    }
}
