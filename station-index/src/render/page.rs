//! Page shell around the station list.

use askama::Template;

use super::sink::Footnote;

/// Settings for the generated page.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Document title, escaped on output.
    pub title: String,

    /// Page heading. Written as markup, so entities are allowed.
    pub heading: String,

    /// Stylesheet href.
    pub stylesheet: String,

    /// Class of the station list.
    pub list_class: String,

    /// Append the collected footnotes below the list.
    pub footnotes: bool,
}

impl PageConfig {
    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the page heading.
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = heading.into();
        self
    }

    /// Set the stylesheet href.
    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet = href.into();
        self
    }

    /// Enable or disable the footnote list.
    pub fn with_footnotes(mut self, footnotes: bool) -> Self {
        self.footnotes = footnotes;
        self
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Bahnhofsverzeichnis".to_string(),
            heading: "Verzeichnis der Bahnh&ouml;fe".to_string(),
            stylesheet: "style.css".to_string(),
            list_class: "bfv".to_string(),
            footnotes: false,
        }
    }
}

/// The full HTML document.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    pub title: &'a str,
    pub heading: &'a str,
    pub stylesheet: &'a str,
    pub list_class: &'a str,
    /// Rendered `<li>` items.
    pub items: &'a str,
    pub show_footnotes: bool,
    pub footnotes: &'a [Footnote],
}

impl<'a> PageTemplate<'a> {
    pub fn new(config: &'a PageConfig, items: &'a str, footnotes: &'a [Footnote]) -> Self {
        Self {
            title: &config.title,
            heading: &config.heading,
            stylesheet: &config.stylesheet,
            list_class: &config.list_class,
            items,
            show_footnotes: config.footnotes,
            footnotes,
        }
    }
}
