//! Selector parser: `tag.class#id` strings into [`Selector`] descriptors.

pub mod model;
pub mod parser;
pub mod tokenizer;

pub use model::{Selector, DEFAULT_TAG};
