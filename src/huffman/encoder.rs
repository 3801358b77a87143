use std::sync::{mpsc, Arc};

use threadpool::ThreadPool;

use super::tree::NodeKind;
use super::{
    CodeTable, CodingError, HuffmanTree, Symbol, LEFT_DIGIT, RIGHT_DIGIT, SINGLE_LEAF_CODE_WORD,
};

pub trait SymbolEncoder {
    /// Concatenates the code words of all symbols of `text` in order.
    fn encode(&self, text: &str) -> Result<String, CodingError>;
}

/// Looks every symbol up in a derived [`CodeTable`].
pub struct TableEncoder<'a> {
    code_table: &'a CodeTable,
}

/// Searches the tree for every symbol again, without a lookup table.
pub struct TraversalEncoder<'a> {
    tree: &'a HuffmanTree,
}

/// Splits the text into chunks and encodes them with the lookup table on a
/// thread pool.
pub struct ParallelTableEncoder<'a> {
    code_table: Arc<CodeTable>,
    threadpool: &'a ThreadPool,
    chunk_size: usize,
}

fn encode_with_table<I>(
    code_table: &CodeTable,
    symbols: I,
    first_position: usize,
    output: &mut String,
) -> Result<(), CodingError>
where
    I: IntoIterator<Item = Symbol>,
{
    for (offset, symbol) in symbols.into_iter().enumerate() {
        let code_word = code_table
            .get(symbol)
            .ok_or(CodingError::UnknownSymbol {
                symbol,
                position: first_position + offset,
            })?;
        output.push_str(code_word);
    }
    Ok(())
}

impl<'a> TableEncoder<'a> {
    pub fn new(code_table: &'a CodeTable) -> Self {
        Self { code_table }
    }
}

impl SymbolEncoder for TableEncoder<'_> {
    fn encode(&self, text: &str) -> Result<String, CodingError> {
        let mut output = String::with_capacity(text.len());
        encode_with_table(self.code_table, text.chars(), 0, &mut output)?;
        Ok(output)
    }
}

fn find_path(tree: &HuffmanTree, index: usize, wanted: Symbol, path: &mut String) -> bool {
    match tree.node(index).kind() {
        NodeKind::Leaf { symbol } => symbol == wanted,
        NodeKind::Inner { left, right } => {
            path.push(LEFT_DIGIT);
            if find_path(tree, left, wanted, path) {
                return true;
            }
            path.pop();
            path.push(RIGHT_DIGIT);
            if find_path(tree, right, wanted, path) {
                return true;
            }
            path.pop();
            false
        }
    }
}

impl<'a> TraversalEncoder<'a> {
    pub fn new(tree: &'a HuffmanTree) -> Self {
        Self { tree }
    }

    /// Path from the root to the leaf holding `symbol`, left subtrees searched first.
    pub fn find_code_word(&self, symbol: Symbol) -> Option<String> {
        let root = self.tree.root();
        match root.kind() {
            NodeKind::Leaf { symbol: leaf_symbol } => {
                (leaf_symbol == symbol).then(|| SINGLE_LEAF_CODE_WORD.to_owned())
            }
            NodeKind::Inner { .. } => {
                let mut path = String::new();
                find_path(self.tree, root.index(), symbol, &mut path).then_some(path)
            }
        }
    }
}

impl SymbolEncoder for TraversalEncoder<'_> {
    fn encode(&self, text: &str) -> Result<String, CodingError> {
        let mut output = String::with_capacity(text.len());
        for (position, symbol) in text.chars().enumerate() {
            let code_word = self
                .find_code_word(symbol)
                .ok_or(CodingError::UnknownSymbol { symbol, position })?;
            output.push_str(&code_word);
        }
        Ok(output)
    }
}

impl<'a> ParallelTableEncoder<'a> {
    pub fn new(code_table: Arc<CodeTable>, threadpool: &'a ThreadPool, chunk_size: usize) -> Self {
        Self {
            code_table,
            threadpool,
            chunk_size: chunk_size.max(1),
        }
    }
}

impl SymbolEncoder for ParallelTableEncoder<'_> {
    fn encode(&self, text: &str) -> Result<String, CodingError> {
        let symbols: Vec<Symbol> = text.chars().collect();
        let (sender, receiver) = mpsc::channel();
        let mut number_of_chunks = 0;
        for (chunk_index, chunk) in symbols.chunks(self.chunk_size).enumerate() {
            let sender = sender.clone();
            let code_table = Arc::clone(&self.code_table);
            let chunk = chunk.to_vec();
            let first_position = chunk_index * self.chunk_size;
            self.threadpool.execute(move || {
                let mut output = String::with_capacity(chunk.len());
                let result = encode_with_table(&code_table, chunk, first_position, &mut output)
                    .map(|_| output);
                // the receiver only disappears once encode has returned
                let _ = sender.send((chunk_index, result));
            });
            number_of_chunks += 1;
        }
        drop(sender);

        let mut encoded_chunks: Vec<Option<String>> = vec![None; number_of_chunks];
        let mut first_error: Option<(usize, CodingError)> = None;
        for (chunk_index, result) in receiver.iter().take(number_of_chunks) {
            match result {
                Ok(encoded) => encoded_chunks[chunk_index] = Some(encoded),
                Err(error) => match first_error {
                    Some((first_index, _)) if first_index < chunk_index => {}
                    _ => first_error = Some((chunk_index, error)),
                },
            }
        }
        if let Some((_, error)) = first_error {
            return Err(error);
        }

        let mut output = String::with_capacity(symbols.len());
        for (chunk_index, encoded) in encoded_chunks.into_iter().enumerate() {
            // a job that panicked never reports back
            let encoded = encoded.ok_or(CodingError::EncodingJobLost(chunk_index))?;
            output.push_str(&encoded);
        }
        Ok(output)
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use threadpool::ThreadPool;

    use super::super::{CodeTable, CodingError, FrequencyTable, HuffmanTree};
    use super::{ParallelTableEncoder, SymbolEncoder, TableEncoder, TraversalEncoder};

    const SYMBOLS_AND_FREQUENCIES: &[(char, usize); 6] =
        &[('a', 5), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45)];
    const TEST_TEXT: &str = "fabcdefffedcbaf";
    const SYMBOL_POOL: &str = "etaoin shrdlucmfwypvbgkjqxz,.ETAOINSHRDLU\näöü€";

    fn create_test_tree(symbols_and_frequencies: &[(char, usize)]) -> HuffmanTree {
        let table = FrequencyTable::try_from(symbols_and_frequencies).unwrap();
        HuffmanTree::new(&table).unwrap()
    }

    #[test]
    fn test_table_encode() {
        let tree = create_test_tree(SYMBOLS_AND_FREQUENCIES);
        let code_table = CodeTable::from_tree(&tree);
        let encoded = TableEncoder::new(&code_table).encode("aabe").unwrap();
        assert_eq!(encoded, "110011001101111");
    }

    #[test]
    fn test_traversal_encode() {
        let tree = create_test_tree(SYMBOLS_AND_FREQUENCIES);
        let encoded = TraversalEncoder::new(&tree).encode("aabe").unwrap();
        assert_eq!(encoded, "110011001101111");
    }

    #[test]
    fn test_table_and_traversal_encoders_agree() {
        let texts = ["", "f", TEST_TEXT, "eeeeeeeeeeeeaaaaaaaaaaabbbbbbbbbbbbbbbbccccdf"];
        let tree = create_test_tree(SYMBOLS_AND_FREQUENCIES);
        let code_table = CodeTable::from_tree(&tree);
        let table_encoder = TableEncoder::new(&code_table);
        let traversal_encoder = TraversalEncoder::new(&tree);
        for text in texts {
            assert_eq!(
                table_encoder.encode(text).unwrap(),
                traversal_encoder.encode(text).unwrap(),
                "Encoders disagree on {:?}",
                text
            );
        }
    }

    fn create_random_frequencies(rng: &mut SmallRng) -> Vec<(char, usize)> {
        let pool: Vec<char> = SYMBOL_POOL.chars().collect();
        let alphabet_size = rng.gen_range(1..=pool.len());
        pool.choose_multiple(rng, alphabet_size)
            .map(|&symbol| (symbol, rng.gen_range(1..1000)))
            .collect()
    }

    fn create_random_text(rng: &mut SmallRng, pairs: &[(char, usize)]) -> String {
        let length = rng.gen_range(0..500);
        (0..length)
            .map(|_| pairs[rng.gen_range(0..pairs.len())].0)
            .collect()
    }

    #[test]
    fn test_encoders_agree_on_generated_texts() {
        let mut rng = SmallRng::seed_from_u64(0x5EED_CAFE);
        let threadpool = ThreadPool::new(3);
        for _ in 0..100 {
            let symbols_and_frequencies = create_random_frequencies(&mut rng);
            let tree = create_test_tree(&symbols_and_frequencies);
            let code_table = Arc::new(CodeTable::from_tree(&tree));
            let text = create_random_text(&mut rng, &symbols_and_frequencies);
            let chunk_size = rng.gen_range(1..64);

            let expected = TableEncoder::new(&code_table).encode(&text).unwrap();
            assert_eq!(
                TraversalEncoder::new(&tree).encode(&text).unwrap(),
                expected,
                "Traversal encoder disagrees on {:?} with {:?}",
                text,
                symbols_and_frequencies
            );
            let parallel_encoder = ParallelTableEncoder::new(code_table, &threadpool, chunk_size);
            assert_eq!(
                parallel_encoder.encode(&text).unwrap(),
                expected,
                "Parallel encoder with chunk size {} disagrees on {:?}",
                chunk_size,
                text
            );
        }
    }

    #[test]
    fn test_encode_empty_text() {
        let tree = create_test_tree(SYMBOLS_AND_FREQUENCIES);
        let code_table = CodeTable::from_tree(&tree);
        assert_eq!(TableEncoder::new(&code_table).encode("").unwrap(), "");
    }

    #[test]
    fn test_single_symbol_encode() {
        let tree = create_test_tree(&[('x', 7)]);
        let code_table = CodeTable::from_tree(&tree);
        assert_eq!(TableEncoder::new(&code_table).encode("xxx").unwrap(), "000");
        assert_eq!(TraversalEncoder::new(&tree).encode("xxx").unwrap(), "000");
    }

    #[test]
    fn test_unknown_symbol() {
        let tree = create_test_tree(SYMBOLS_AND_FREQUENCIES);
        let code_table = CodeTable::from_tree(&tree);
        let expected = Err(CodingError::UnknownSymbol {
            symbol: 'z',
            position: 2,
        });
        assert_eq!(TableEncoder::new(&code_table).encode("abzc"), expected);
        assert_eq!(TraversalEncoder::new(&tree).encode("abzc"), expected);
    }

    #[test]
    fn test_unknown_symbol_with_single_leaf() {
        let tree = create_test_tree(&[('x', 7)]);
        assert_eq!(
            TraversalEncoder::new(&tree).encode("xy"),
            Err(CodingError::UnknownSymbol {
                symbol: 'y',
                position: 1
            })
        );
    }

    #[test]
    fn test_parallel_encode_matches_table_encode() {
        let tree = create_test_tree(SYMBOLS_AND_FREQUENCIES);
        let code_table = Arc::new(CodeTable::from_tree(&tree));
        let text = TEST_TEXT.repeat(20);
        let expected = TableEncoder::new(&code_table).encode(&text).unwrap();
        let threadpool = ThreadPool::new(4);
        for chunk_size in [1, 7, 64, 10_000] {
            let encoder =
                ParallelTableEncoder::new(Arc::clone(&code_table), &threadpool, chunk_size);
            assert_eq!(
                encoder.encode(&text).unwrap(),
                expected,
                "Parallel encoding with chunk size {} does not match",
                chunk_size
            );
        }
    }

    #[test]
    fn test_parallel_encode_reports_first_unknown_symbol() {
        let tree = create_test_tree(SYMBOLS_AND_FREQUENCIES);
        let code_table = Arc::new(CodeTable::from_tree(&tree));
        let threadpool = ThreadPool::new(2);
        let encoder = ParallelTableEncoder::new(code_table, &threadpool, 3);
        assert_eq!(
            encoder.encode("abcdeyfffz"),
            Err(CodingError::UnknownSymbol {
                symbol: 'y',
                position: 5
            })
        );
    }

    #[test]
    fn test_parallel_encode_empty_text() {
        let tree = create_test_tree(SYMBOLS_AND_FREQUENCIES);
        let threadpool = ThreadPool::new(2);
        let code_table = Arc::new(CodeTable::from_tree(&tree));
        let encoder = ParallelTableEncoder::new(code_table, &threadpool, 3);
        assert_eq!(encoder.encode("").unwrap(), "");
    }
}
