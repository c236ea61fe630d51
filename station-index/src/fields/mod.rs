//! Station field model.
//!
//! Every record key selects a [`FieldKind`], which decides how the raw value
//! is turned into a [`Field`] and how that field is rendered. Text values
//! are space-normalized exactly once, when the field is built.

mod field;
mod kind;
mod normalize;

pub use field::Field;
pub use kind::{AdminCode, Emphasis, FieldKind, LINK_KEY};
pub use normalize::{NARROW_NBSP, NBSP, normalize_spaces};
