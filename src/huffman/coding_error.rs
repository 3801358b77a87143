use std::fmt::Display;

use super::Symbol;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MalformedStreamReason {
    /// A character other than `'0'` or `'1'` was found in the stream.
    InvalidDigit(char),
    /// The stream ended in the middle of a code word.
    IncompleteCodeWord,
    /// A digit tried to descend below a leaf.
    DescendedPastLeaf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodingError {
    EmptyFrequencyTable,
    ZeroFrequency(Symbol),
    FrequencyOverflow(Symbol),
    DuplicateSymbol(Symbol),
    AlphabetCountMismatch { symbols: usize, counts: usize },
    UnknownSymbol { symbol: Symbol, position: usize },
    EncodingJobLost(usize),
    MalformedStream {
        position: usize,
        reason: MalformedStreamReason,
    },
}

impl Display for MalformedStreamReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDigit(digit) => write!(f, "invalid digit {:?}", digit),
            Self::IncompleteCodeWord => write!(f, "stream ends inside a code word"),
            Self::DescendedPastLeaf => write!(f, "digit descends past a leaf"),
        }
    }
}

impl Display for CodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFrequencyTable => {
                write!(f, "Frequency table does not contain any symbol")
            }
            Self::ZeroFrequency(symbol) => {
                write!(f, "Symbol {:?} has a frequency of zero", symbol)
            }
            Self::FrequencyOverflow(symbol) => {
                write!(
                    f,
                    "Adding the frequency of symbol {:?} overflows the total count",
                    symbol
                )
            }
            Self::DuplicateSymbol(symbol) => {
                write!(f, "Symbol {:?} occurs more than once in the frequency table", symbol)
            }
            Self::AlphabetCountMismatch { symbols, counts } => {
                write!(
                    f,
                    "Alphabet holds {} symbols, but {} counts were provided",
                    symbols, counts
                )
            }
            Self::UnknownSymbol { symbol, position } => {
                write!(
                    f,
                    "Symbol {:?} at position {} is not part of the code",
                    symbol, position
                )
            }
            Self::EncodingJobLost(chunk_index) => {
                write!(f, "Encoding job of chunk {} did not report a result", chunk_index)
            }
            Self::MalformedStream { position, reason } => {
                write!(
                    f,
                    "Malformed encoded stream at position {}: {}",
                    position, reason
                )
            }
        }
    }
}

impl std::error::Error for CodingError {}
