use std::{fs, path::Path};

use serde_json::{Map, Value};

use crate::{
    error::Error,
    huffman::{FrequencyTable, SymbolFrequency},
    Result,
};

/// Parses a JSON object mapping single characters to their counts.
///
/// The key order of the document becomes the insertion order of the table.
pub fn parse_frequency_json(content: &str, source: &str) -> Result<FrequencyTable> {
    let object: Map<String, Value> = serde_json::from_str(content)
        .map_err(|e| Error::InvalidFrequencyFile(source.to_owned(), e))?;
    let mut table = FrequencyTable::new();
    for (key, value) in object.iter() {
        let symbol = parse_symbol(key)?;
        let frequency = value
            .as_u64()
            .and_then(|count| usize::try_from(count).ok())
            .ok_or_else(|| Error::InvalidFrequencyValue(key.clone(), value.to_string()))?;
        table.insert(SymbolFrequency::new(symbol, frequency))?;
    }
    Ok(table)
}

fn parse_symbol(key: &str) -> Result<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Ok(symbol),
        _ => Err(Error::InvalidFrequencyKey(key.to_owned())),
    }
}

pub fn load_frequency_table(file_path: &Path) -> Result<FrequencyTable> {
    let path = file_path.display().to_string();
    let content = fs::read_to_string(file_path)
        .map_err(|e| Error::UnableToOpenInputFileForReading(path.clone(), e))?;
    let table = parse_frequency_json(&content, &path)?;
    log::info!("Loaded {} symbol frequencies from {}", table.len(), path);
    Ok(table)
}
