//! HTML output.
//!
//! Stations are written through a [`FootnoteWriter`], which escapes text and
//! turns `{...}` markers into numbered footnote references. The page shell
//! around the station list is an askama template.

mod escape;
mod page;
mod sink;

pub use escape::{escape_html, escape_quotes};
pub use page::{PageConfig, PageTemplate};
pub use sink::{Footnote, FootnoteWriter};
