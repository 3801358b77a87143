pub mod code;
pub mod coding_error;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod tree;

pub use code::CodeTable;
pub use coding_error::{CodingError, MalformedStreamReason};
pub use decoder::HuffmanDecoder;
pub use encoder::{ParallelTableEncoder, SymbolEncoder, TableEncoder, TraversalEncoder};
pub use frequency::FrequencyTable;
pub use tree::HuffmanTree;

pub type Symbol = char;

/// Digit appended to a code word when descending into the left subtree.
pub const LEFT_DIGIT: char = '0';
/// Digit appended to a code word when descending into the right subtree.
pub const RIGHT_DIGIT: char = '1';

/// Code word of the only symbol of a tree that consists of a single leaf.
pub const SINGLE_LEAF_CODE_WORD: &str = "0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymbolFrequency {
    pub symbol: Symbol,
    pub frequency: usize,
}

impl SymbolFrequency {
    pub fn new(symbol: Symbol, frequency: usize) -> Self {
        Self { symbol, frequency }
    }
}

impl From<(Symbol, usize)> for SymbolFrequency {
    fn from(value: (Symbol, usize)) -> Self {
        Self {
            symbol: value.0,
            frequency: value.1,
        }
    }
}
