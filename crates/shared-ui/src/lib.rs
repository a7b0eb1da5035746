//! Presentational components for the GPDI console. Each component ships its
//! own stylesheet next to its source.

pub mod components;

pub use components::*;
