//! Output formatting

pub mod terminal;
