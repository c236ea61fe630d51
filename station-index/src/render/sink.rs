//! Output sink that pulls footnote markers out of rendered text.

use std::io::{self, Write};

use serde::Serialize;

use super::escape::{escape_html, escape_quotes};

/// A footnote extracted from a `{...}` marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footnote {
    /// Sequence number shown in the reference, starting at 1.
    pub number: usize,
    /// Marker text, already body-escaped.
    pub text: String,
}

impl Footnote {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// Writer for one output target.
///
/// Owns the footnote counter and the footnotes collected so far. Every
/// station written to the same target shares one continuously increasing
/// numbering; a new target starts again at 1 by creating a new writer.
#[derive(Debug)]
pub struct FootnoteWriter<W> {
    inner: W,
    next_number: usize,
    footnotes: Vec<Footnote>,
}

impl<W: Write> FootnoteWriter<W> {
    /// Wrap an output target with a fresh footnote counter.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            next_number: 1,
            footnotes: Vec::new(),
        }
    }

    /// Write markup verbatim.
    pub fn write_raw(&mut self, markup: &str) -> io::Result<()> {
        self.inner.write_all(markup.as_bytes())
    }

    /// Escape `text` and write it, replacing each `{marker}` by a numbered
    /// footnote reference.
    ///
    /// An opening brace without a closing one ends the scan; the rest of the
    /// text is written as is.
    pub fn write_escaped_with_footnotes(&mut self, text: &str) -> io::Result<()> {
        let escaped = escape_html(text);
        self.write_with_footnotes(&escaped)
    }

    /// Footnote extraction on text that is already escaped.
    pub(crate) fn write_with_footnotes(&mut self, escaped: &str) -> io::Result<()> {
        let mut rest = escaped;
        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                break;
            };
            let marker = &after[..close];
            self.write_raw(&rest[..open])?;
            let number = self.push_footnote(marker);
            write!(
                self.inner,
                r#"<span class="footnote" title="{}">{}</span>"#,
                escape_quotes(marker),
                number
            )?;
            rest = &after[close + 1..];
        }
        self.write_raw(rest)
    }

    fn push_footnote(&mut self, text: &str) -> usize {
        let number = self.next_number;
        self.next_number += 1;
        self.footnotes.push(Footnote::new(number, text));
        number
    }

    /// Footnotes collected so far, in encounter order.
    pub fn footnotes(&self) -> &[Footnote] {
        &self.footnotes
    }

    /// Flush the underlying target.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Give back the output target together with the collected footnotes.
    pub fn into_parts(self) -> (W, Vec<Footnote>) {
        (self.inner, self.footnotes)
    }
}
