use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{builder::PossibleValue, ValueEnum};
use threadpool::ThreadPool;

use crate::huffman::{
    CodeTable, CodingError, FrequencyTable, HuffmanDecoder, HuffmanTree, ParallelTableEncoder,
    SymbolEncoder, TableEncoder, TraversalEncoder,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EncoderKind {
    Table,
    Traversal,
    Parallel,
}

impl ValueEnum for EncoderKind {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Table, Self::Traversal, Self::Parallel]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Table => Some(PossibleValue::new("Table")),
            Self::Traversal => Some(PossibleValue::new("Traversal")),
            Self::Parallel => Some(PossibleValue::new("Parallel")),
        }
    }
}

impl EncoderKind {
    pub fn description(&self) -> &'static str {
        match self {
            EncoderKind::Table => "lookup table",
            EncoderKind::Traversal => "tree traversal",
            EncoderKind::Parallel => "parallel lookup table",
        }
    }
}

pub struct Timed<T> {
    pub value: T,
    pub duration: Duration,
}

fn timed<T>(operation: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = operation();
    Timed {
        value,
        duration: start.elapsed(),
    }
}

/// Tree and code table built from one frequency table.
pub struct EncodingSession {
    frequencies: FrequencyTable,
    tree: HuffmanTree,
    code_table: Arc<CodeTable>,
}

impl EncodingSession {
    pub fn new(frequencies: FrequencyTable) -> Result<Self, CodingError> {
        let tree = HuffmanTree::new(&frequencies)?;
        let code_table = Arc::new(CodeTable::from_tree(&tree));
        Ok(Self {
            frequencies,
            tree,
            code_table,
        })
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.code_table
    }

    pub fn encode(
        &self,
        kind: EncoderKind,
        text: &str,
        threadpool: &ThreadPool,
        chunk_size: usize,
    ) -> Timed<Result<String, CodingError>> {
        match kind {
            EncoderKind::Table => {
                let encoder = TableEncoder::new(&self.code_table);
                timed(|| encoder.encode(text))
            }
            EncoderKind::Traversal => {
                let encoder = TraversalEncoder::new(&self.tree);
                timed(|| encoder.encode(text))
            }
            EncoderKind::Parallel => {
                let encoder =
                    ParallelTableEncoder::new(Arc::clone(&self.code_table), threadpool, chunk_size);
                timed(|| encoder.encode(text))
            }
        }
    }

    pub fn decode(&self, stream: &str) -> Timed<Result<String, CodingError>> {
        let decoder = HuffmanDecoder::new(&self.tree);
        timed(|| decoder.decode(stream))
    }
}

#[cfg(test)]
mod test {
    use threadpool::ThreadPool;

    use super::{EncoderKind, EncodingSession};
    use crate::huffman::{CodingError, FrequencyTable};

    #[test]
    fn test_all_encoders_produce_same_stream() {
        let text = "she sells sea shells by the sea shore";
        let session = EncodingSession::new(FrequencyTable::count_symbols(text)).unwrap();
        let threadpool = ThreadPool::new(2);
        let expected = session
            .encode(EncoderKind::Table, text, &threadpool, 5)
            .value
            .unwrap();
        for kind in [EncoderKind::Traversal, EncoderKind::Parallel] {
            let encoded = session.encode(kind, text, &threadpool, 5).value.unwrap();
            assert_eq!(encoded, expected, "{} encoder differs", kind.description());
        }
        assert_eq!(session.decode(&expected).value.unwrap(), text);
    }

    #[test]
    fn test_session_rejects_empty_table() {
        let result = EncodingSession::new(FrequencyTable::new());
        assert!(matches!(result, Err(CodingError::EmptyFrequencyTable)));
    }
}
