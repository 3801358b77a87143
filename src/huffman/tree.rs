use super::{CodingError, FrequencyTable, Symbol};
use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Leaf { symbol: Symbol },
    Inner { left: usize, right: usize },
}

#[derive(Clone, Copy, Debug)]
pub struct Node {
    weight: usize,
    index: usize,
    kind: NodeKind,
}

/// Huffman tree stored as an arena of nodes.
///
/// Leaves occupy the first indices in frequency table order, every merged
/// node is appended behind them. A node's index therefore doubles as the
/// sequence number that breaks ties between equal weights.
#[derive(Debug)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root_index: usize,
    leaf_count: usize,
}

impl Node {
    pub fn weight(&self) -> usize {
        self.weight
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }
}

// lighter nodes first, on equal weight the node created earlier
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.index == other.index
    }
}

impl Eq for Node {}

impl HuffmanTree {
    pub fn new(frequencies: &FrequencyTable) -> Result<HuffmanTree, CodingError> {
        if frequencies.is_empty() {
            return Err(CodingError::EmptyFrequencyTable);
        }

        let mut nodes: Vec<Node> = Vec::with_capacity(2 * frequencies.len() - 1);
        let mut heap = BinaryHeap::with_capacity(frequencies.len());
        for sf in frequencies.iter() {
            let node = Node {
                weight: sf.frequency,
                index: nodes.len(),
                kind: NodeKind::Leaf { symbol: sf.symbol },
            };
            heap.push(Reverse(node));
            nodes.push(node);
        }
        let leaf_count = nodes.len();

        // merge nodes until only the root is left, no weight exceeds the
        // total count the table has already checked
        while let (Some(Reverse(first)), Some(Reverse(second))) = (heap.pop(), heap.pop()) {
            let node = Node {
                weight: first.weight + second.weight,
                index: nodes.len(),
                kind: NodeKind::Inner {
                    left: first.index,
                    right: second.index,
                },
            };
            heap.push(Reverse(node));
            nodes.push(node);
        }

        // the loop above consumes the last node as `first` when it stops
        let root_index = nodes.len() - 1;
        Ok(HuffmanTree {
            nodes,
            root_index,
            leaf_count,
        })
    }

    pub fn root(&self) -> &Node {
        &self.nodes[self.root_index]
    }

    pub(super) fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub fn root_weight(&self) -> usize {
        self.root().weight
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Length of the longest path from the root to a leaf.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self.root_index, 0)];
        while let Some((index, depth)) = stack.pop() {
            match self.nodes[index].kind {
                NodeKind::Leaf { .. } => max_depth = max_depth.max(depth),
                NodeKind::Inner { left, right } => {
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                }
            }
        }
        max_depth
    }

    /// Leaf symbols from left to right.
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut symbols = Vec::with_capacity(self.leaf_count);
        let mut stack = vec![self.root_index];
        while let Some(index) = stack.pop() {
            match self.nodes[index].kind {
                NodeKind::Leaf { symbol } => symbols.push(symbol),
                NodeKind::Inner { left, right } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        symbols
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

// Node & Tree visualization
impl Node {
    fn get_string(&self, tree: &HuffmanTree) -> Vec<String> {
        match self.kind {
            NodeKind::Leaf { symbol } => vec![format!("({:?}:{})", symbol, self.weight)],
            NodeKind::Inner { left, right } => {
                let left_box = tree.nodes[left].get_string(tree);
                let right_box = tree.nodes[right].get_string(tree);
                let left_width = left_box[0].chars().count();
                let right_width = right_box[0].chars().count();
                let left_pos = center_of_first_line(&left_box);
                let right_pos = center_of_first_line(&right_box);

                let mut result = vec![
                    format!(
                        "{}•{}",
                        SPACE.repeat(left_width),
                        SPACE.repeat(right_width)
                    ),
                    format!(
                        "{}║{}",
                        SPACE.repeat(left_width),
                        SPACE.repeat(right_width)
                    ),
                    format!(
                        "{}╔{}╩{}╗{}",
                        SPACE.repeat(left_pos),
                        BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_pos - 1),
                        BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(right_pos),
                        SPACE.repeat(right_width - right_pos - 1)
                    ),
                ];

                for i in 0..left_box.len().max(right_box.len()) {
                    let left_str = left_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(left_width));
                    let right_str = right_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(right_width));
                    result.push(format!("{} {}", left_str, right_str));
                }
                result
            }
        }
    }
}

fn center_of_first_line(lines: &[String]) -> usize {
    let first_line = &lines[0];
    let offset = first_line.chars().position(|c| c != ' ').unwrap_or(0);
    (offset * 2 + first_line.trim().chars().count()) / 2
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strs = self.root().get_string(self);
        for s in strs.iter() {
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}
