use super::tree::NodeKind;
use super::{CodingError, HuffmanTree, MalformedStreamReason, LEFT_DIGIT, RIGHT_DIGIT};

pub struct HuffmanDecoder<'a> {
    tree: &'a HuffmanTree,
}

impl<'a> HuffmanDecoder<'a> {
    pub fn new(tree: &'a HuffmanTree) -> Self {
        Self { tree }
    }

    /// Walks the tree digit by digit and restarts at the root after each leaf.
    ///
    /// The stream has to consist of complete code words of this tree. Any
    /// other digit, a digit below a leaf, or a trailing partial code word is
    /// reported as [`CodingError::MalformedStream`].
    pub fn decode(&self, stream: &str) -> Result<String, CodingError> {
        let root = self.tree.root();
        let mut output = String::new();
        let mut current_index = root.index();
        let mut stream_length = 0;

        for (position, digit) in stream.chars().enumerate() {
            stream_length = position + 1;
            let take_right = match digit {
                LEFT_DIGIT => false,
                RIGHT_DIGIT => true,
                _ => {
                    return Err(CodingError::MalformedStream {
                        position,
                        reason: MalformedStreamReason::InvalidDigit(digit),
                    })
                }
            };

            let next_index = match self.tree.node(current_index).kind() {
                NodeKind::Inner { left, right } => {
                    if take_right {
                        right
                    } else {
                        left
                    }
                }
                // only a tree made of a single leaf gets here
                NodeKind::Leaf { symbol } => {
                    if take_right {
                        return Err(CodingError::MalformedStream {
                            position,
                            reason: MalformedStreamReason::DescendedPastLeaf,
                        });
                    }
                    output.push(symbol);
                    continue;
                }
            };

            if let NodeKind::Leaf { symbol } = self.tree.node(next_index).kind() {
                output.push(symbol);
                current_index = root.index();
            } else {
                current_index = next_index;
            }
        }

        if current_index != root.index() {
            return Err(CodingError::MalformedStream {
                position: stream_length,
                reason: MalformedStreamReason::IncompleteCodeWord,
            });
        }
        Ok(output)
    }
}
