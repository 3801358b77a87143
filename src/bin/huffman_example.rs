use huffman_text_coder::huffman::{
    CodeTable, CodingError, FrequencyTable, HuffmanDecoder, HuffmanTree, SymbolEncoder,
    TableEncoder, TraversalEncoder,
};

fn main() -> Result<(), CodingError> {
    // symbol-frequency pairs
    let syms_and_freqs: [(char, usize); 6] =
        [('a', 5), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45)];
    let frequencies = FrequencyTable::try_from(syms_and_freqs.as_slice())?;

    let tree = HuffmanTree::new(&frequencies)?;
    println!("huffman tree\n{}", tree);

    let code_table = CodeTable::from_tree(&tree);
    println!("code table");
    for (symbol, code_word) in code_table.iter() {
        println!("{:?}: {}", symbol, code_word);
    }

    let sequence_to_encode = "fadebcaf";
    let encoded = TableEncoder::new(&code_table).encode(sequence_to_encode)?;
    let encoded_slow = TraversalEncoder::new(&tree).encode(sequence_to_encode)?;
    println!("sequence to encode\n{}", sequence_to_encode);
    println!("encoded sequence\n{}", encoded);
    println!("traversal encoder agrees: {}", encoded == encoded_slow);

    let decoded = HuffmanDecoder::new(&tree).decode(&encoded)?;
    println!("decoded sequence\n{}", decoded);
    Ok(())
}
