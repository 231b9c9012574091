//! Drawing cards for a reading.
//!
//! `DrawSelector` takes cards from a deck according to a `DrawPolicy` and
//! permutes them with a `ReadingRng`.

pub mod selector;

pub use selector::DrawSelector;
