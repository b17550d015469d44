//! Newick codec: parsing Newick text into a [Tree](crate::model::Tree) and
//! serializing a tree back out.
//!
//! The dialect understood here is the common one: nested parentheses with
//! comma-separated children, optional labels on leaves and internal nodes,
//! optional `:distance` per node, an optional bracketed `[bootstrap]`
//! integer after a distance, and a final `;`. Labels are arbitrary UTF-8 up
//! to the next delimiter; an absent label is `None`, never `""`.

mod cursor;
mod error;
mod parser;
mod writer;

pub use error::{FormatError, FormatErrorKind};
pub use parser::parse_newick_str;
pub use writer::to_newick;
