use std::collections::HashMap;

use super::{CodingError, Symbol, SymbolFrequency};

/// Symbols with their number of occurrences, kept in insertion order.
///
/// The order matters: the tree builder breaks ties between equally weighted
/// nodes by it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    symbol_frequencies: Vec<SymbolFrequency>,
    positions: HashMap<Symbol, usize>,
    total_count: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table from two parallel lists, `alphabet[i]` occurring
    /// `counts[i]` times.
    pub fn from_alphabet_and_counts(
        alphabet: &[Symbol],
        counts: &[usize],
    ) -> Result<Self, CodingError> {
        if alphabet.len() != counts.len() {
            return Err(CodingError::AlphabetCountMismatch {
                symbols: alphabet.len(),
                counts: counts.len(),
            });
        }
        alphabet
            .iter()
            .copied()
            .zip(counts.iter().copied())
            .map(SymbolFrequency::from)
            .try_fold(Self::new(), |mut table, symbol_frequency| {
                table.insert(symbol_frequency)?;
                Ok(table)
            })
    }

    /// Counts every symbol of `text`; symbols appear in order of their first
    /// occurrence.
    pub fn count_symbols(text: &str) -> Self {
        let mut positions: HashMap<Symbol, usize> = HashMap::new();
        let mut symbol_frequencies: Vec<SymbolFrequency> = Vec::new();
        for symbol in text.chars() {
            match positions.get(&symbol) {
                Some(&index) => symbol_frequencies[index].frequency += 1,
                None => {
                    positions.insert(symbol, symbol_frequencies.len());
                    symbol_frequencies.push(SymbolFrequency::new(symbol, 1));
                }
            }
        }
        let total_count = symbol_frequencies.iter().map(|s| s.frequency).sum();
        Self {
            symbol_frequencies,
            positions,
            total_count,
        }
    }

    pub fn insert(&mut self, symbol_frequency: SymbolFrequency) -> Result<(), CodingError> {
        if symbol_frequency.frequency == 0 {
            return Err(CodingError::ZeroFrequency(symbol_frequency.symbol));
        }
        if self.contains(symbol_frequency.symbol) {
            return Err(CodingError::DuplicateSymbol(symbol_frequency.symbol));
        }
        // every weight of the tree is bounded by this total
        self.total_count = self
            .total_count
            .checked_add(symbol_frequency.frequency)
            .ok_or(CodingError::FrequencyOverflow(symbol_frequency.symbol))?;
        self.positions
            .insert(symbol_frequency.symbol, self.symbol_frequencies.len());
        self.symbol_frequencies.push(symbol_frequency);
        Ok(())
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.positions.contains_key(&symbol)
    }

    pub fn frequency_of(&self, symbol: Symbol) -> Option<usize> {
        self.positions
            .get(&symbol)
            .map(|&index| self.symbol_frequencies[index].frequency)
    }

    pub fn len(&self) -> usize {
        self.symbol_frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbol_frequencies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolFrequency> {
        self.symbol_frequencies.iter()
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// The symbol with the highest count; the earliest inserted one wins a tie.
    pub fn most_frequent(&self) -> Option<SymbolFrequency> {
        self.symbol_frequencies
            .iter()
            .copied()
            .reduce(|best, current| {
                if current.frequency > best.frequency {
                    current
                } else {
                    best
                }
            })
    }
}

impl TryFrom<&[(Symbol, usize)]> for FrequencyTable {
    type Error = CodingError;

    fn try_from(value: &[(Symbol, usize)]) -> Result<Self, Self::Error> {
        let mut table = Self::new();
        for &pair in value {
            table.insert(SymbolFrequency::from(pair))?;
        }
        Ok(table)
    }
}
