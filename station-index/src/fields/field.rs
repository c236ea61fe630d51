//! Typed station fields.

use std::io::{self, Write};

use super::kind::{AdminCode, Emphasis, FieldKind};
use super::normalize::normalize_spaces;
use crate::record::ParseError;
use crate::render::{FootnoteWriter, escape_html};

const SEE_PHRASE: &str = "siehe";
const SEE_ALSO_PHRASE: &str = "siehe auch";

/// One typed, renderable piece of a station record.
///
/// Text payloads are stored already space-normalized (see
/// [`normalize_spaces`]); escaping happens only when rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Name(String),
    Text(String),
    AdminStatus { code: AdminCode, text: String },
    NumberPair {
        first: String,
        second: String,
        emphasis: Emphasis,
    },
    SaarNumber(String),
    Range(String),
    PostRange(String),
    ReducedService(String),
    /// Stored bracket-wrapped.
    Limit(String),
    /// Stored with its lead-in phrase.
    See(String),
    /// Stored with its lead-in phrase.
    SeeAlso(String),
    Hidden,
}

impl Field {
    /// Parse a key/value pair. The key must already be lowercased and trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use station_index::fields::{AdminCode, Field};
    ///
    /// let field = Field::parse("b", "1").unwrap();
    /// assert_eq!(field, Field::AdminStatus { code: AdminCode::B, text: "1".into() });
    /// assert!(Field::parse("zzz", "foo").is_err());
    /// ```
    pub fn parse(key: &str, value: &str) -> Result<Self, ParseError> {
        let kind = FieldKind::from_key(key).ok_or_else(|| ParseError::UnknownKey(key.to_string()))?;
        Self::from_source(kind, value)
    }

    /// Build a field of the given kind from its raw value.
    pub fn from_source(kind: FieldKind, value: &str) -> Result<Self, ParseError> {
        let field = match kind {
            FieldKind::Name => Field::Name(normalize_spaces(value)),
            FieldKind::Text => Field::Text(normalize_spaces(value)),
            FieldKind::AdminStatus(code) => Field::AdminStatus {
                code,
                text: normalize_spaces(value),
            },
            FieldKind::NumberPair(emphasis) => {
                let mut tokens = value.split_whitespace();
                match (tokens.next(), tokens.next(), tokens.next()) {
                    (Some(first), Some(second), None) => Field::NumberPair {
                        first: first.to_string(),
                        second: second.to_string(),
                        emphasis,
                    },
                    _ => return Err(ParseError::MalformedNumber(value.to_string())),
                }
            }
            FieldKind::SaarNumber => Field::SaarNumber(normalize_spaces(value)),
            FieldKind::Range => Field::Range(normalize_spaces(value)),
            FieldKind::PostRange => Field::PostRange(normalize_spaces(value)),
            FieldKind::ReducedService => Field::ReducedService(normalize_spaces(value)),
            FieldKind::Limit => {
                if value.starts_with('[') {
                    Field::Limit(normalize_spaces(value))
                } else {
                    Field::Limit(normalize_spaces(&format!("[{value}]")))
                }
            }
            FieldKind::See => Field::See(normalize_spaces(&format!("{SEE_PHRASE} {value}"))),
            FieldKind::SeeAlso => {
                Field::SeeAlso(normalize_spaces(&format!("{SEE_ALSO_PHRASE} {value}")))
            }
            FieldKind::Hidden => Field::Hidden,
        };
        Ok(field)
    }

    /// Write this field's markup.
    pub fn write_html<W: Write>(&self, out: &mut FootnoteWriter<W>) -> io::Result<()> {
        match self {
            Field::Name(text) => {
                out.write_raw(r#"<span class="name">"#)?;
                out.write_escaped_with_footnotes(text)?;
                out.write_raw("</span> ")
            }
            Field::Text(text) | Field::Limit(text) | Field::See(text) | Field::SeeAlso(text) => {
                write_item(out, text)
            }
            Field::AdminStatus { code, text } => {
                out.write_raw(&format!(r#"<span class="item">{}&nbsp;"#, code.label()))?;
                out.write_escaped_with_footnotes(text)?;
                out.write_raw("</span>")
            }
            Field::NumberPair {
                first,
                second,
                emphasis,
            } => {
                out.write_raw(r#"<span class="nr">"#)?;
                write_number(out, first, *emphasis == Emphasis::First)?;
                out.write_raw("&#8239;")?;
                write_number(out, second, *emphasis == Emphasis::Second)?;
                out.write_raw("</span>")
            }
            Field::SaarNumber(text) => {
                out.write_raw(r#"<span class="nr saar">&#8222;Saar&#8220;&#160;"#)?;
                out.write_escaped_with_footnotes(text)?;
                out.write_raw("</span>")
            }
            Field::Range(text) => {
                out.write_raw(r#"<span class="rang">"#)?;
                let daggered = escape_html(text).replace('+', "&#8224;");
                out.write_with_footnotes(&daggered)?;
                out.write_raw("</span>")
            }
            Field::PostRange(text) => {
                out.write_raw(r#"<br/><span class="item">["#)?;
                out.write_escaped_with_footnotes(text)?;
                out.write_raw("]</span>")
            }
            Field::ReducedService(text) => {
                out.write_raw(
                    r#"<span class="nr"><b>&mdash;</b></span><span class="item">/&nbsp;<b>"#,
                )?;
                out.write_escaped_with_footnotes(text)?;
                out.write_raw("</b>&nbsp;/</span>")
            }
            Field::Hidden => Ok(()),
        }
    }
}

fn write_item<W: Write>(out: &mut FootnoteWriter<W>, text: &str) -> io::Result<()> {
    out.write_raw(r#"<span class="item">"#)?;
    out.write_escaped_with_footnotes(text)?;
    out.write_raw("</span>")
}

fn write_number<W: Write>(out: &mut FootnoteWriter<W>, token: &str, bold: bool) -> io::Result<()> {
    let token = escape_html(token);
    if bold {
        out.write_raw(&format!("<b>{token}</b>"))
    } else {
        out.write_raw(&token)
    }
}
