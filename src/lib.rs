use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
use error::Error;
pub use frequency_file::{load_frequency_table, parse_frequency_json};
use huffman::FrequencyTable;
pub use report::CompressionReport;
pub use session::{EncoderKind, EncodingSession, Timed};
use threadpool::ThreadPool;

mod cli;
pub mod error;
mod frequency_file;
pub mod huffman;
mod logger;
mod report;
mod session;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    message_file: PathBuf,
    frequency_file: Option<PathBuf>,
    encoder: EncoderKind,
    number_of_threads: usize,
    chunk_size: usize,
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
    })
}

/// Reads the first line of a message file without its line terminator.
pub fn read_first_line(file_path: &Path) -> Result<String> {
    let input_file = open_input_file(file_path)?;
    let mut line = String::new();
    BufReader::new(input_file)
        .read_line(&mut line)
        .map_err(|e| Error::UnableToReadInputFile(file_path.display().to_string(), e))?;
    let terminator_length = if line.ends_with("\r\n") {
        2
    } else if line.ends_with('\n') {
        1
    } else {
        0
    };
    line.truncate(line.len() - terminator_length);
    Ok(line)
}

pub fn read_whole_message(file_path: &Path) -> Result<String> {
    let mut input_file = open_input_file(file_path)?;
    let mut message = String::new();
    input_file
        .read_to_string(&mut message)
        .map_err(|e| Error::UnableToReadInputFile(file_path.display().to_string(), e))?;
    Ok(message)
}

/// With a frequency file the message is the first line of the message file;
/// without one the whole file is the message and its own symbol counts are
/// used.
fn load_message_and_frequencies(arguments: &Arguments) -> Result<(String, FrequencyTable)> {
    match &arguments.frequency_file {
        Some(frequency_file) => {
            let frequencies = load_frequency_table(frequency_file)?;
            let message = read_first_line(&arguments.message_file)?;
            Ok((message, frequencies))
        }
        None => {
            let message = read_whole_message(&arguments.message_file)?;
            let frequencies = FrequencyTable::count_symbols(&message);
            log::info!(
                "Counted {} distinct symbols in {}",
                frequencies.len(),
                arguments.message_file.display()
            );
            Ok((message, frequencies))
        }
    }
}

pub fn compress_message(arguments: &Arguments) -> Result<CompressionReport> {
    let (message, frequencies) = load_message_and_frequencies(arguments)?;
    let session = EncodingSession::new(frequencies)?;
    log::debug!("Huffman tree\n{}", session.tree());
    logger::log_code_table(session.code_table());

    let threadpool = ThreadPool::new(arguments.number_of_threads.max(1));
    let encoding = session.encode(
        arguments.encoder,
        &message,
        &threadpool,
        arguments.chunk_size,
    );
    let encoded = encoding.value?;
    log::info!(
        "Encoded {} symbols into {} bits with the {} encoder",
        message.chars().count(),
        encoded.len(),
        arguments.encoder.description()
    );

    let decoding = session.decode(&encoded);
    let decoded = decoding.value?;
    if decoded != message {
        return Err(Error::RoundTripMismatch);
    }

    let frequencies = session.frequencies();
    Ok(CompressionReport {
        encoder: arguments.encoder,
        alphabet_size: frequencies.len(),
        frequency_total: frequencies.total_count(),
        message_length: message.chars().count(),
        encoded_bits: encoded.len(),
        most_frequent: frequencies.most_frequent(),
        encoding_duration: encoding.duration,
        decoding_duration: decoding.duration,
    })
}
