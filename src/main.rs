use std::env::args_os;

use huffman_text_coder::{compress_message, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match compress_message(&arguments) {
        Ok(report) => println!("{}", report),
        Err(e) => eprintln!("Compression failed because of: {}", e),
    }
}
