//! Utility modules for the deck pipeline.

pub mod css;
pub mod inline;
pub mod minify;
