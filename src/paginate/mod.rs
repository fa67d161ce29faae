//! Line paginator: strips documentation markers and lays lines out on
//! fixed-length pages with a timestamped header and a sheet label footer.

mod clock;
mod page;

pub use clock::{Clock, FixedClock, SystemClock};
pub use page::{sheet_label, Page};

use super::{err, utils, Result};
use std::io::{BufRead, Write};
use tracing::debug;

pub const DEFAULT_PAGE_LEN: usize = 50;
pub const DEFAULT_MARKER: &str = "//DOC";

/// `Jan  2 15:04 2006`: the day is space padded to two columns.
const TIMESTAMP_FORMAT: &str = "%b %e %H:%M %Y";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PaginatorConfig {
    page_len: usize,
    marker: String,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            page_len: DEFAULT_PAGE_LEN,
            marker: DEFAULT_MARKER.into(),
        }
    }
}

impl PaginatorConfig {
    pub fn new(page_len: usize, marker: impl Into<String>) -> Result<Self> {
        let marker = marker.into();
        if page_len == 0 {
            return Err(err!("page length must be at least 1"));
        }
        if marker.is_empty() {
            return Err(err!("marker must not be empty"));
        }
        Ok(Self { page_len, marker })
    }
}

/// Drops `marker` and everything after it on the line.
pub fn strip_marker<'a>(line: &'a [u8], marker: &[u8]) -> &'a [u8] {
    if marker.is_empty() {
        return &line[..0];
    }
    match line.windows(marker.len()).position(|w| w == marker) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

#[derive(Debug)]
pub struct Paginator<C: Clock> {
    config: PaginatorConfig,
    clock: C,
}

impl Paginator<SystemClock> {
    pub fn with_system_clock(config: PaginatorConfig) -> Self {
        Self::new(config, SystemClock)
    }
}

impl<C: Clock> Paginator<C> {
    pub fn new(config: PaginatorConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Reads all input lines with the marker stripped from each. Lines
    /// are kept as raw bytes so they are printed exactly as read.
    pub fn read_lines<R: BufRead>(&self, r: &mut R) -> Result<Vec<Vec<u8>>> {
        let mut lines = utils::read_lines(r)?;
        for line in lines.iter_mut() {
            let kept = strip_marker(line, self.config.marker.as_bytes()).len();
            line.truncate(kept);
        }
        Ok(lines)
    }

    pub fn pages<'a>(&self, lines: &'a [Vec<u8>]) -> Vec<Page<'a>> {
        lines
            .chunks(self.config.page_len)
            .enumerate()
            .map(|(idx, chunk)| Page::new(idx + 1, chunk))
            .collect()
    }

    /// Writes every page of `lines` to `out` and returns the page count.
    pub fn render<W: Write>(&self, header: &str, lines: &[Vec<u8>], out: &mut W) -> Result<usize> {
        let now = self.clock.now().format(TIMESTAMP_FORMAT).to_string();
        let mut count = 0;

        for page in self.pages(lines) {
            write!(out, "\n\n{now}  {header}  Page {}\n\n\n", page.number())?;
            page.write_body(self.config.page_len, out)?;
            out.write_all(b"\n\n")?;
            out.write_all(&page.sheet_label())?;
            out.write_all(b"\n\n\n")?;
            count += 1;
        }

        out.flush()?;
        debug!(lines = lines.len(), pages = count, "rendered pages");
        Ok(count)
    }

    pub fn run<R: BufRead, W: Write>(&self, header: &str, input: &mut R, out: &mut W) -> Result<usize> {
        let lines = self.read_lines(input)?;
        self.render(header, &lines, out)
    }
}
