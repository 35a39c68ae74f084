//! Digit <-> character mapping.

use rustc_hash::FxHashMap;

use crate::coder::Coder;
use crate::error::{Error, Result};

/// Bidirectional mapping between digits `0..len` and characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    lookup: FxHashMap<char, u32>,
}

impl Alphabet {
    /// Builds an alphabet from its symbols, in digit order.
    ///
    /// Fails if the alphabet is empty or a character appears twice.
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(Error::EmptyAlphabet);
        }

        let mut lookup = FxHashMap::with_capacity_and_hasher(symbols.len(), Default::default());
        for (index, &symbol) in symbols.iter().enumerate() {
            if let Some(first) = lookup.insert(symbol, index as u32) {
                return Err(Error::DuplicateSymbol {
                    symbol,
                    first: first as usize,
                    second: index,
                });
            }
        }

        Ok(Self { symbols, lookup })
    }

    /// Number of symbols (the base this alphabet can render).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; empty alphabets are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbol for `digit`, if in range.
    #[inline]
    pub fn symbol(&self, digit: u32) -> Option<char> {
        self.symbols.get(digit as usize).copied()
    }

    /// Returns the digit for `symbol`, if present.
    #[inline]
    pub fn digit(&self, symbol: char) -> Option<u32> {
        self.lookup.get(&symbol).copied()
    }
}

impl Coder for Alphabet {
    type Decoded = Vec<u32>;
    type Encoded = Vec<char>;

    fn encode(&self, digits: Vec<u32>) -> Result<Vec<char>> {
        digits
            .into_iter()
            .map(|digit| {
                self.symbol(digit).ok_or(Error::DigitOutOfRange {
                    digit,
                    base: self.symbols.len() as u64,
                })
            })
            .collect()
    }

    fn decode(&self, symbols: Vec<char>) -> Result<Vec<u32>> {
        symbols
            .into_iter()
            .enumerate()
            .map(|(position, symbol)| {
                self.digit(symbol)
                    .ok_or(Error::InvalidSymbol { symbol, position })
            })
            .collect()
    }
}
