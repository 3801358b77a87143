use std::time::Duration;

use huffman_text_coder::huffman::FrequencyTable;
use huffman_text_coder::{EncoderKind, EncodingSession};
use threadpool::ThreadPool;

const TEXT_LENGTH: usize = 1_000_000;
const NUMBER_OF_ROUNDS: u32 = 10;
const CHUNK_SIZE: usize = 16_384;
const ALPHABET: &str = "etaoin shrdlucmfwypvbgkjqxz,.ETAOINSHRDLU";

// skewed but reproducible symbol distribution
fn create_test_text() -> String {
    let alphabet: Vec<char> = ALPHABET.chars().collect();
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    (0..TEXT_LENGTH)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let a = (state % alphabet.len() as u64) as usize;
            let b = ((state >> 32) % alphabet.len() as u64) as usize;
            alphabet[a.min(b)]
        })
        .collect()
}

fn calculate_std_deviation_in_micros(mean: &Duration, measurements: &[Duration]) -> u64 {
    let mean_micros = mean.as_micros() as i128;
    let sum = measurements
        .iter()
        .map(|m| m.as_micros() as i128 - mean_micros)
        .map(|v| v.pow(2).unsigned_abs())
        .sum::<u128>();
    let variance = sum / measurements.len() as u128;
    (variance as f64).sqrt().round() as u64
}

fn print_statistics(name: &str, durations: &[Duration]) {
    let Some(min_duration) = durations.iter().min() else {
        return;
    };
    let max_duration = durations.iter().max().unwrap_or(min_duration);
    let avg_duration = durations.iter().sum::<Duration>() / durations.len() as u32;
    let std_deviation = calculate_std_deviation_in_micros(&avg_duration, durations);

    println!(
        "{}: Min: {}, Max: {}, Average: {}, Std Deviation: {}",
        name,
        min_duration.as_micros(),
        max_duration.as_micros(),
        avg_duration.as_micros(),
        std_deviation,
    );
}

fn main() {
    println!("Creating test text");
    let text = create_test_text();
    let session = match EncodingSession::new(FrequencyTable::count_symbols(&text)) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Unable to build the Huffman tree: {}", e);
            return;
        }
    };
    let threadpool = ThreadPool::new(
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1),
    );

    let encoders = [
        EncoderKind::Table,
        EncoderKind::Traversal,
        EncoderKind::Parallel,
    ];
    let mut encoding_durations: Vec<Vec<Duration>> = vec![Vec::new(); encoders.len()];
    let mut decoding_durations: Vec<Duration> = Vec::new();

    for round in 1..=NUMBER_OF_ROUNDS {
        println!("Starting round {}", round);
        let mut encoded = String::new();
        for (index, &kind) in encoders.iter().enumerate() {
            let encoding = session.encode(kind, &text, &threadpool, CHUNK_SIZE);
            match encoding.value {
                Ok(stream) => encoded = stream,
                Err(e) => {
                    eprintln!("Encoding failed because of: {}", e);
                    return;
                }
            }
            encoding_durations[index].push(encoding.duration);
        }
        let decoding = session.decode(&encoded);
        if let Err(e) = decoding.value {
            eprintln!("Decoding failed because of: {}", e);
            return;
        }
        decoding_durations.push(decoding.duration);
        println!("Finished round {} with {} bits", round, encoded.len());
    }

    println!("Timing done (microseconds)");
    for (kind, durations) in encoders.iter().zip(encoding_durations.iter()) {
        print_statistics(kind.description(), durations);
    }
    print_statistics("decoding", &decoding_durations);
}
