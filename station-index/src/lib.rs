//! Railway station directory generator.
//!
//! Turns line-oriented station records into an HTML listing: each record's
//! `key: value` lines become typed fields, which are rendered with HTML
//! escaping, kilometer-marker spacing and numbered footnotes.

pub mod directory;
pub mod fields;
pub mod record;
pub mod render;
