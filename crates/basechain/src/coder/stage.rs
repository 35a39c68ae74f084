//! Type-erased stage used as a chain element.

use crate::coder::{
    Alphabet, Chain, Checksum, Coder, Data, DataKind, Join, Normalize, Padding, Radix, Radix2,
};
use crate::error::Result;

/// One element of a [`Chain`].
#[derive(Debug, Clone)]
pub enum Stage {
    Alphabet(Alphabet),
    Radix(Radix),
    Radix2(Radix2),
    Checksum(Checksum),
    Padding(Padding),
    Join(Join),
    Normalize(Normalize),
    Chain(Box<Chain>),
}

impl Stage {
    /// Short name used in trace output.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Alphabet(_) => "alphabet",
            Stage::Radix(_) => "radix",
            Stage::Radix2(_) => "radix2",
            Stage::Checksum(_) => "checksum",
            Stage::Padding(_) => "padding",
            Stage::Join(_) => "join",
            Stage::Normalize(_) => "normalize",
            Stage::Chain(_) => "chain",
        }
    }

    /// Kind of value `encode` accepts.
    pub fn input_kind(&self) -> DataKind {
        match self {
            Stage::Radix(_) | Stage::Radix2(_) | Stage::Checksum(_) => DataKind::Bytes,
            Stage::Alphabet(_) => DataKind::Digits,
            Stage::Padding(_) | Stage::Join(_) => DataKind::Symbols,
            Stage::Normalize(_) => DataKind::Text,
            Stage::Chain(chain) => chain.input_kind(),
        }
    }

    /// Kind of value `encode` produces.
    pub fn output_kind(&self) -> DataKind {
        match self {
            Stage::Checksum(_) => DataKind::Bytes,
            Stage::Radix(_) | Stage::Radix2(_) => DataKind::Digits,
            Stage::Alphabet(_) | Stage::Padding(_) => DataKind::Symbols,
            Stage::Join(_) | Stage::Normalize(_) => DataKind::Text,
            Stage::Chain(chain) => chain.output_kind(),
        }
    }
}

impl Coder for Stage {
    type Decoded = Data;
    type Encoded = Data;

    fn encode(&self, data: Data) -> Result<Data> {
        Ok(match self {
            Stage::Alphabet(s) => Data::Symbols(s.encode(data.into_digits()?)?),
            Stage::Radix(s) => Data::Digits(s.encode(data.into_bytes()?)?),
            Stage::Radix2(s) => Data::Digits(s.encode(data.into_bytes()?)?),
            Stage::Checksum(s) => Data::Bytes(s.encode(data.into_bytes()?)?),
            Stage::Padding(s) => Data::Symbols(s.encode(data.into_symbols()?)?),
            Stage::Join(s) => Data::Text(s.encode(data.into_symbols()?)?),
            Stage::Normalize(s) => Data::Text(s.encode(data.into_text()?)?),
            Stage::Chain(s) => s.encode(data)?,
        })
    }

    fn decode(&self, data: Data) -> Result<Data> {
        Ok(match self {
            Stage::Alphabet(s) => Data::Digits(s.decode(data.into_symbols()?)?),
            Stage::Radix(s) => Data::Bytes(s.decode(data.into_digits()?)?),
            Stage::Radix2(s) => Data::Bytes(s.decode(data.into_digits()?)?),
            Stage::Checksum(s) => Data::Bytes(s.decode(data.into_bytes()?)?),
            Stage::Padding(s) => Data::Symbols(s.decode(data.into_symbols()?)?),
            Stage::Join(s) => Data::Symbols(s.decode(data.into_text()?)?),
            Stage::Normalize(s) => Data::Text(s.decode(data.into_text()?)?),
            Stage::Chain(s) => s.decode(data)?,
        })
    }
}

impl From<Alphabet> for Stage {
    fn from(stage: Alphabet) -> Self {
        Stage::Alphabet(stage)
    }
}

impl From<Radix> for Stage {
    fn from(stage: Radix) -> Self {
        Stage::Radix(stage)
    }
}

impl From<Radix2> for Stage {
    fn from(stage: Radix2) -> Self {
        Stage::Radix2(stage)
    }
}

impl From<Checksum> for Stage {
    fn from(stage: Checksum) -> Self {
        Stage::Checksum(stage)
    }
}

impl From<Padding> for Stage {
    fn from(stage: Padding) -> Self {
        Stage::Padding(stage)
    }
}

impl From<Join> for Stage {
    fn from(stage: Join) -> Self {
        Stage::Join(stage)
    }
}

impl From<Normalize> for Stage {
    fn from(stage: Normalize) -> Self {
        Stage::Normalize(stage)
    }
}

impl From<Chain> for Stage {
    fn from(chain: Chain) -> Self {
        Stage::Chain(Box::new(chain))
    }
}
