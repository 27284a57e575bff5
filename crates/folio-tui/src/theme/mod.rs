//! Light and dark colour schemes.
//!
//! - `palette`: Raw colour sets, one per [`folio_core::Theme`]
//! - `styles`: Semantic style builders over a palette

pub mod palette;
pub mod styles;

pub use palette::Palette;
