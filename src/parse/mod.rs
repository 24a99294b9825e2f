//! Text-to-cells stages of the CSV pipeline: header extraction, cell
//! tokenizing and column type inference.

pub mod header;
pub mod inference;
pub mod tokenizer;
