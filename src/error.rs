use std::fmt::Display;

use crate::huffman::CodingError;

#[derive(Debug)]
pub enum Error {
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToReadInputFile(String, std::io::Error),
    InvalidFrequencyFile(String, serde_json::Error),
    InvalidFrequencyKey(String),
    InvalidFrequencyValue(String, String),
    Coding(CodingError),
    RoundTripMismatch,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToReadInputFile(path, error) => {
                write!(f, "Unable to read input file '{}': {}", path, error)
            }
            Self::InvalidFrequencyFile(path, error) => {
                write!(
                    f,
                    "Frequency file '{}' is not a JSON object of counts: {}",
                    path, error
                )
            }
            Self::InvalidFrequencyKey(key) => {
                write!(
                    f,
                    "Frequency key {:?} must consist of exactly one character",
                    key
                )
            }
            Self::InvalidFrequencyValue(key, value) => {
                write!(
                    f,
                    "Frequency of {:?} must be a non-negative integer, but was {}",
                    key, value
                )
            }
            Self::Coding(error) => write!(f, "{}", error),
            Self::RoundTripMismatch => {
                write!(f, "Decoded message does not match the original message")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToReadInputFile(_, error) => Some(error),
            Self::InvalidFrequencyFile(_, error) => Some(error),
            Self::Coding(error) => Some(error),
            _ => None,
        }
    }
}

impl From<CodingError> for Error {
    fn from(value: CodingError) -> Self {
        Self::Coding(value)
    }
}
