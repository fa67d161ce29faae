use std::io::Write;

use super::Result;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Page<'a> {
    number: usize,
    lines: &'a [Vec<u8>],
}

impl<'a> Page<'a> {
    pub(super) fn new(number: usize, lines: &'a [Vec<u8>]) -> Self {
        Self { number, lines }
    }

    /// 1-based page number.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn sheet_label(&self) -> Vec<u8> {
        self.lines
            .first()
            .map(|l| sheet_label(l))
            .unwrap_or_default()
    }

    /// Writes the page body followed by blank lines up to `page_len`.
    pub(super) fn write_body<W: Write>(&self, page_len: usize, out: &mut W) -> Result<()> {
        for line in self.lines {
            out.write_all(line)?;
            out.write_all(b"\n")?;
        }
        for _ in self.lines.len()..page_len {
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

/// Label printed under a page, taken from the page's first line.
///
/// A first token of exactly four bytes (e.g. `0103 ...`) yields
/// `Sheet 01`; anything else yields an empty label. Lengths are byte
/// counts and the two-byte prefix is copied as is, even when it ends in
/// the middle of a UTF-8 sequence.
pub fn sheet_label(first_line: &[u8]) -> Vec<u8> {
    if first_line.len() < 4 || !first_line.contains(&b' ') {
        return vec![];
    }

    match first_line.split(|b| *b == b' ').next() {
        Some(token) if token.len() == 4 => [b"Sheet ".as_slice(), &token[..2]].concat(),
        _ => vec![],
    }
}
