//! Ordered composition of stages into one coder.

use crate::coder::{Coder, Data, DataKind, Stage};
use crate::error::{Error, Result};

/// A sequence of stages run left-to-right on encode and right-to-left on decode.
///
/// Construction checks that each stage's output kind is the next stage's
/// input kind, so a built chain never hands a stage the wrong shape of data.
/// A chain is itself a [`Stage`] and can be nested.
#[derive(Debug, Clone)]
pub struct Chain {
    stages: Vec<Stage>,
}

impl Chain {
    /// Builds a chain from stages in encode order.
    pub fn new<I>(stages: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Stage>,
    {
        let stages: Vec<Stage> = stages.into_iter().map(Into::into).collect();
        if stages.is_empty() {
            return Err(Error::EmptyChain);
        }
        for (index, pair) in stages.windows(2).enumerate() {
            let produced = pair[0].output_kind();
            let accepted = pair[1].input_kind();
            if produced != accepted {
                return Err(Error::StageMismatch {
                    index: index + 1,
                    expected: produced,
                    found: accepted,
                });
            }
        }
        Ok(Self { stages })
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn input_kind(&self) -> DataKind {
        // Non-empty by construction.
        self.stages[0].input_kind()
    }

    pub fn output_kind(&self) -> DataKind {
        self.stages[self.stages.len() - 1].output_kind()
    }
}

impl Coder for Chain {
    type Decoded = Data;
    type Encoded = Data;

    fn encode(&self, mut data: Data) -> Result<Data> {
        for (index, stage) in self.stages.iter().enumerate() {
            tracing::trace!(index, stage = stage.name(), "encode stage");
            data = stage.encode(data)?;
        }
        Ok(data)
    }

    fn decode(&self, mut data: Data) -> Result<Data> {
        for (index, stage) in self.stages.iter().enumerate().rev() {
            tracing::trace!(index, stage = stage.name(), "decode stage");
            data = stage.decode(data)?;
        }
        Ok(data)
    }
}
