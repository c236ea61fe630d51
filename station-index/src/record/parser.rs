//! Line-oriented station record parser.
//!
//! A source holds any number of records. Each record is a run of
//! `key: value` lines, where a line starting with a space or tab continues
//! the previous one, terminated by a `---` line or the end of the source.
//! Blank lines and `#` comments are ignored.

use tracing::{debug, warn};

use super::error::{ParseError, RecordError};
use super::station::{Station, link_for_key};
use crate::fields::{Field, LINK_KEY};

/// Line that ends a record.
pub const SENTINEL: &str = "---";

/// A logical line still waiting for possible continuations.
struct Pending {
    text: String,
    /// Number of the last physical line folded into `text`.
    line: usize,
}

/// Fields collected for the record being parsed.
#[derive(Default)]
struct StationBuilder {
    fields: Vec<Field>,
    link: Option<String>,
}

impl StationBuilder {
    fn push(&mut self, logical: &str) -> Result<(), ParseError> {
        let (key, value) = logical.split_once(':').unwrap_or((logical, ""));
        let key = key.trim().to_lowercase();
        let value = value.trim();

        let field = Field::parse(&key, value)?;
        if key == LINK_KEY {
            let link = link_for_key(value);
            if let Some(previous) = self.link.replace(link) {
                warn!(%previous, "cross-reference key repeated, keeping the last one");
            }
        }
        self.fields.push(field);
        Ok(())
    }

    fn build(self) -> Station {
        Station::new(self.fields, self.link)
    }
}

/// Parses consecutive stations from one source.
///
/// # Examples
///
/// ```
/// use station_index::record::StationParser;
///
/// let text = "name: Nord\n---\nname: Süd\n";
/// let mut parser = StationParser::from_text("bahnhoefe.txt", text);
///
/// let first = parser.next_station().unwrap().unwrap();
/// assert_eq!(first.name(), Some("Nord"));
/// let second = parser.next_station().unwrap().unwrap();
/// assert_eq!(second.name(), Some("Süd"));
/// assert!(parser.next_station().unwrap().is_none());
/// ```
pub struct StationParser<I> {
    source_name: String,
    lines: I,
    line: usize,
    exhausted: bool,
}

impl<'a> StationParser<std::str::Lines<'a>> {
    /// Parse stations from in-memory text.
    pub fn from_text(source_name: impl Into<String>, text: &'a str) -> Self {
        Self::new(source_name, text.lines())
    }
}

impl<I, S> StationParser<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    /// Parse stations from lines with their line endings already removed.
    pub fn new(source_name: impl Into<String>, lines: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            source_name: source_name.into(),
            lines: lines.into_iter(),
            line: 0,
            exhausted: false,
        }
    }

    /// Name of the source being parsed.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Number of lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Whether the end of the source has been reached.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Parse the next station.
    ///
    /// Returns `Ok(None)` once the source holds nothing but blank lines and
    /// comments. After an error the parser has skipped past the failed
    /// record, so calling again continues with the next one.
    pub fn next_station(&mut self) -> Result<Option<Station>, RecordError> {
        if self.exhausted {
            return Ok(None);
        }

        let mut builder = StationBuilder::default();
        let mut pending: Option<Pending> = None;
        let mut started = false;

        loop {
            let Some(raw) = self.next_line() else {
                if let Some(last) = pending.take() {
                    builder
                        .push(&last.text)
                        .map_err(|kind| self.error(last.line, kind))?;
                }
                return Ok(started.then(|| self.finish(builder)));
            };
            let line = raw.as_ref().trim_end();

            if line.is_empty() || line.trim_start().starts_with('#') {
                continue;
            }

            if line.starts_with([' ', '\t']) {
                let Some(logical) = pending.as_mut() else {
                    let err = self.error(self.line, ParseError::DanglingContinuation);
                    self.skip_record();
                    return Err(err);
                };
                logical.text.push(' ');
                logical.text.push_str(line.trim());
                logical.line = self.line;
                continue;
            }

            started = true;
            let at_sentinel = line == SENTINEL;

            if let Some(logical) = pending.take()
                && let Err(kind) = builder.push(&logical.text)
            {
                let err = self.error(logical.line, kind);
                if !at_sentinel {
                    self.skip_record();
                }
                return Err(err);
            }

            if at_sentinel {
                return Ok(Some(self.finish(builder)));
            }

            pending = Some(Pending {
                text: line.to_string(),
                line: self.line,
            });
        }
    }

    fn next_line(&mut self) -> Option<S> {
        let line = self.lines.next();
        match line {
            Some(_) => self.line += 1,
            None => self.exhausted = true,
        }
        line
    }

    /// Drop lines up to and including the next sentinel.
    fn skip_record(&mut self) {
        while let Some(raw) = self.next_line() {
            if raw.as_ref().trim_end() == SENTINEL {
                break;
            }
        }
    }

    fn finish(&self, builder: StationBuilder) -> Station {
        let station = builder.build();
        debug!(
            source = %self.source_name,
            line = self.line,
            fields = station.fields.len(),
            name = station.name().unwrap_or(""),
            "parsed station"
        );
        station
    }

    fn error(&self, line: usize, kind: ParseError) -> RecordError {
        RecordError {
            source_name: self.source_name.clone(),
            line,
            kind,
        }
    }
}

impl<I, S> Iterator for StationParser<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<Station, RecordError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_station().transpose()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn record() -> impl Strategy<Value = Vec<(&'static str, String)>> {
        proptest::collection::vec(
            (
                prop::sample::select(vec!["name", "extra", "b", "ra", "rang", "limit"]),
                "[A-Za-z][A-Za-z ]{0,12}",
            ),
            0..6,
        )
    }

    proptest! {
        /// Every record separated by sentinels comes back with its fields in order
        #[test]
        fn records_round_trip_in_order(records in proptest::collection::vec(record(), 1..5)) {
            let text: String = records
                .iter()
                .map(|lines| {
                    let body: String = lines.iter().map(|(k, v)| format!("{k}: {v}\n")).collect();
                    format!("{body}---\n")
                })
                .collect();

            let parsed: Vec<Station> = StationParser::from_text("p", &text)
                .collect::<Result<_, _>>()
                .unwrap();

            prop_assert_eq!(parsed.len(), records.len());
            for (station, lines) in parsed.iter().zip(&records) {
                prop_assert_eq!(station.fields.len(), lines.len());
                for (field, (key, value)) in station.fields.iter().zip(lines) {
                    prop_assert_eq!(field, &Field::parse(key, value.trim()).unwrap());
                }
            }
        }
    }
}
