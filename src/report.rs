use std::fmt::Display;
use std::time::Duration;

use crate::huffman::SymbolFrequency;
use crate::session::EncoderKind;

pub struct CompressionReport {
    pub encoder: EncoderKind,
    pub alphabet_size: usize,
    pub frequency_total: usize,
    pub message_length: usize,
    pub encoded_bits: usize,
    pub most_frequent: Option<SymbolFrequency>,
    pub encoding_duration: Duration,
    pub decoding_duration: Duration,
}

impl CompressionReport {
    /// Bits needed by a code where every symbol gets the same width.
    pub fn fixed_width_bits(&self) -> usize {
        fixed_code_word_width(self.alphabet_size) * self.message_length
    }
}

fn fixed_code_word_width(alphabet_size: usize) -> usize {
    match alphabet_size {
        0 | 1 => 1,
        n => (usize::BITS - (n - 1).leading_zeros()) as usize,
    }
}

impl Display for CompressionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "There are {} characters in the alphabet",
            self.alphabet_size
        )?;
        writeln!(
            f,
            "The frequencies count {} characters in total",
            self.frequency_total
        )?;
        writeln!(
            f,
            "There are {} characters in the message",
            self.message_length
        )?;
        if let Some(most_frequent) = self.most_frequent {
            writeln!(
                f,
                "The most common character is {:?}, which has {} appearances",
                most_frequent.symbol, most_frequent.frequency
            )?;
        }
        writeln!(
            f,
            "It will take {} bits to encode the message ({} bits with a fixed width code)",
            self.encoded_bits,
            self.fixed_width_bits()
        )?;
        writeln!(
            f,
            "The {} encoding took {} microseconds",
            self.encoder.description(),
            self.encoding_duration.as_micros()
        )?;
        write!(
            f,
            "The decoding took {} microseconds",
            self.decoding_duration.as_micros()
        )
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::{fixed_code_word_width, CompressionReport};
    use crate::{huffman::SymbolFrequency, session::EncoderKind};

    #[test]
    fn test_fixed_code_word_width() {
        let expected = [(1, 1), (2, 1), (3, 2), (4, 2), (5, 3), (6, 3), (8, 3), (9, 4), (256, 8)];
        for (alphabet_size, width) in expected {
            assert_eq!(
                fixed_code_word_width(alphabet_size),
                width,
                "Width for alphabet of size {} does not match",
                alphabet_size
            );
        }
    }

    #[test]
    fn test_report_lines() {
        let report = CompressionReport {
            encoder: EncoderKind::Table,
            alphabet_size: 6,
            frequency_total: 100,
            message_length: 4,
            encoded_bits: 15,
            most_frequent: Some(SymbolFrequency::new('f', 45)),
            encoding_duration: Duration::from_micros(12),
            decoding_duration: Duration::from_micros(7),
        };
        let text = report.to_string();
        assert!(text.contains("There are 6 characters in the alphabet"));
        assert!(text.contains("The most common character is 'f', which has 45 appearances"));
        assert!(text.contains("It will take 15 bits to encode the message (12 bits"));
        assert!(text.contains("The lookup table encoding took 12 microseconds"));
        assert!(text.ends_with("The decoding took 7 microseconds"));
    }
}
