//! Parsed station records.

use std::io::{self, Write};

use crate::fields::Field;
use crate::render::{FootnoteWriter, escape_html, escape_quotes};

/// Prefix of the cross-reference link; the key value and a slash follow.
const LINK_BASE: &str = "https://www.railwayhistory.org/key/";

/// Build the cross-reference URL for a raw key value.
///
/// ```
/// use station_index::record::link_for_key;
///
/// assert_eq!(link_for_key("abc"), "https://www.railwayhistory.org/key/abc/");
/// ```
pub fn link_for_key(value: &str) -> String {
    format!("{LINK_BASE}{value}/")
}

/// One station: its fields in source order plus an optional link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Station {
    pub fields: Vec<Field>,
    pub link: Option<String>,
}

impl Station {
    pub fn new(fields: Vec<Field>, link: Option<String>) -> Self {
        Self { fields, link }
    }

    /// The first name field, if any.
    pub fn name(&self) -> Option<&str> {
        self.fields.iter().find_map(|field| match field {
            Field::Name(name) => Some(name.as_str()),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.link.is_none()
    }

    /// Write the station as one list item.
    pub fn write_html<W: Write>(&self, out: &mut FootnoteWriter<W>) -> io::Result<()> {
        out.write_raw("<li>")?;
        if let Some(link) = &self.link {
            out.write_raw(&format!(
                r#"<a class="rwh-link" href="{}">&#8599;</a>"#,
                escape_quotes(&escape_html(link))
            ))?;
        }
        for field in &self.fields {
            field.write_html(out)?;
            out.write_raw("&#8203;")?;
        }
        out.write_raw("</li>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{AdminCode, Emphasis};

    fn html(station: &Station) -> String {
        let mut out = FootnoteWriter::new(Vec::new());
        station.write_html(&mut out).unwrap();
        String::from_utf8(out.into_parts().0).unwrap()
    }

    #[test]
    fn empty_station() {
        assert_eq!(html(&Station::default()), "<li></li>");
    }

    #[test]
    fn fields_in_order_with_separators() {
        let station = Station::new(
            vec![
                Field::Name("Musterbahnhof".into()),
                Field::AdminStatus {
                    code: AdminCode::B,
                    text: "1".into(),
                },
                Field::NumberPair {
                    first: "12".into(),
                    second: "345".into(),
                    emphasis: Emphasis::First,
                },
            ],
            None,
        );
        assert_eq!(
            html(&station),
            concat!(
                "<li>",
                r#"<span class="name">Musterbahnhof</span> &#8203;"#,
                r#"<span class="item">B&nbsp;1</span>&#8203;"#,
                r#"<span class="nr"><b>12</b>&#8239;345</span>&#8203;"#,
                "</li>"
            )
        );
    }

    #[test]
    fn link_anchor_leads() {
        let station = Station::new(
            vec![Field::Hidden, Field::Name("X".into())],
            Some(link_for_key("x1")),
        );
        assert_eq!(
            html(&station),
            concat!(
                "<li>",
                r#"<a class="rwh-link" href="https://www.railwayhistory.org/key/x1/">&#8599;</a>"#,
                "&#8203;",
                r#"<span class="name">X</span> &#8203;"#,
                "</li>"
            )
        );
    }

    #[test]
    fn name_lookup() {
        let station = Station::new(
            vec![Field::Text("t".into()), Field::Name("Nord".into())],
            None,
        );
        assert_eq!(station.name(), Some("Nord"));
        assert_eq!(Station::default().name(), None);
    }

    #[test]
    fn is_empty() {
        assert!(Station::default().is_empty());
        assert!(!Station::new(vec![Field::Hidden], None).is_empty());
        assert!(!Station::new(vec![], Some(link_for_key("a"))).is_empty());
    }
}
