use std::collections::HashMap;

use super::tree::NodeKind;
use super::{FrequencyTable, HuffmanTree, Symbol, LEFT_DIGIT, RIGHT_DIGIT, SINGLE_LEAF_CODE_WORD};

/// Mapping from every leaf symbol of one tree to its code word.
///
/// A table is derived from exactly one tree and returned by value, so tables
/// of different trees never share state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable {
    code_words: HashMap<Symbol, String>,
}

fn fill_table(
    code_words: &mut HashMap<Symbol, String>,
    tree: &HuffmanTree,
    index: usize,
    current_pattern: &mut String,
) {
    match tree.node(index).kind() {
        NodeKind::Leaf { symbol } => {
            code_words.insert(symbol, current_pattern.clone());
        }
        NodeKind::Inner { left, right } => {
            current_pattern.push(LEFT_DIGIT);
            fill_table(code_words, tree, left, current_pattern);
            current_pattern.pop();
            current_pattern.push(RIGHT_DIGIT);
            fill_table(code_words, tree, right, current_pattern);
            current_pattern.pop();
        }
    }
}

impl CodeTable {
    pub fn from_tree(tree: &HuffmanTree) -> CodeTable {
        let mut code_words = HashMap::with_capacity(tree.leaf_count());
        let root = tree.root();
        match root.kind() {
            NodeKind::Leaf { symbol } => {
                code_words.insert(symbol, SINGLE_LEAF_CODE_WORD.to_owned());
            }
            NodeKind::Inner { .. } => {
                let mut pattern = String::with_capacity(tree.depth());
                fill_table(&mut code_words, tree, root.index(), &mut pattern);
            }
        }
        CodeTable { code_words }
    }

    pub fn get(&self, symbol: Symbol) -> Option<&str> {
        self.code_words.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.code_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_words.is_empty()
    }

    /// Entries sorted by symbol.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        let mut entries: Vec<(Symbol, &str)> = self
            .code_words
            .iter()
            .map(|(&symbol, code_word)| (symbol, code_word.as_str()))
            .collect();
        entries.sort_by_key(|&(symbol, _)| symbol);
        entries.into_iter()
    }

    /// Number of bits a text with exactly these frequencies encodes to, or
    /// `None` if that number does not fit into a `usize`.
    /// Symbols without a code word are not counted.
    pub fn encoded_length(&self, frequencies: &FrequencyTable) -> Option<usize> {
        frequencies
            .iter()
            .filter_map(|sf| self.get(sf.symbol).map(|c| (c.len(), sf.frequency)))
            .try_fold(0usize, |length, (bits, frequency)| {
                length.checked_add(bits.checked_mul(frequency)?)
            })
    }

    pub fn is_prefix_free(&self) -> bool {
        let mut code_words: Vec<&str> = self.code_words.values().map(String::as_str).collect();
        // a prefix sorts directly in front of some word that starts with it
        code_words.sort_unstable();
        code_words
            .windows(2)
            .all(|pair| !pair[1].starts_with(pair[0]))
    }
}
