//! Text Clean - plain-text normalization for export fields
//!
//! Question and answer text arrives markup-bearing from the rich-text
//! editor. Before it is placed into a CSV cell, a spreadsheet cell, or a
//! document text block it is reduced to plain text: tags stripped,
//! entities decoded, whitespace collapsed. Normalization is idempotent and
//! never fails; anything unparseable passes through literally.

mod entities;
mod normalize;

pub use entities::decode_entities;
pub use normalize::{normalize, strip_tags};
