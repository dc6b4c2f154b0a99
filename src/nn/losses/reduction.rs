// src/nn/losses/reduction.rs
// Reduction modes: how a loss kernel aggregates per-element losses.
// Two closed sets exist. Every loss accepts none/mean/sum, and only the
// KL divergence additionally accepts batchmean.

use crate::error::{OptionsError, Result};
use std::fmt;
use std::str::FromStr;

/// Loss reduction strategies shared by every loss except the KL divergence.
///
/// The kernel owns the numeric policy:
/// - `None`: no aggregation, emit per-element losses
/// - `Mean`: sum of the output divided by the number of output elements
/// - `Sum`: the output is summed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Reduction {
    /// Return individual losses without reduction
    None,
    /// Average loss across all output elements
    #[default]
    Mean,
    /// Sum all losses
    Sum,
}

/// Reduction strategies accepted by the KL divergence loss.
///
/// `BatchMean` divides the summed loss by the batch size rather than by the
/// number of elements, which is what matches the mathematical definition of
/// KL divergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KLDivReduction {
    None,
    BatchMean,
    Sum,
    #[default]
    Mean,
}

impl Reduction {
    /// Every declared variant, in declaration order.
    pub const fn variants() -> &'static [Reduction] {
        &[Reduction::None, Reduction::Mean, Reduction::Sum]
    }

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Reduction::None => "none",
            Reduction::Mean => "mean",
            Reduction::Sum => "sum",
        }
    }
}

impl KLDivReduction {
    pub const fn variants() -> &'static [KLDivReduction] {
        &[
            KLDivReduction::None,
            KLDivReduction::BatchMean,
            KLDivReduction::Sum,
            KLDivReduction::Mean,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            KLDivReduction::None => "none",
            KLDivReduction::BatchMean => "batchmean",
            KLDivReduction::Sum => "sum",
            KLDivReduction::Mean => "mean",
        }
    }
}

/// Reduction types usable as the `reduction` field of a loss option record.
///
/// Lets the keyword-argument surface parse and print either variant set
/// without knowing which one a record uses.
pub trait ReductionMode: Copy + Default + fmt::Display + FromStr<Err = OptionsError> {
    /// Names of the declared variants, used in error messages.
    fn accepted_names() -> Vec<&'static str>;
}

impl ReductionMode for Reduction {
    fn accepted_names() -> Vec<&'static str> {
        Reduction::variants().iter().map(|r| r.name()).collect()
    }
}

impl ReductionMode for KLDivReduction {
    fn accepted_names() -> Vec<&'static str> {
        KLDivReduction::variants().iter().map(|r| r.name()).collect()
    }
}

fn unknown_reduction(value: &str, accepted: &[&str]) -> OptionsError {
    OptionsError::invalid_argument(
        "reduction",
        format!("{value:?}"),
        format!("expected one of {}", accepted.join(", ")),
    )
}

impl FromStr for Reduction {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self> {
        Reduction::variants()
            .iter()
            .copied()
            .find(|r| r.name() == s)
            .ok_or_else(|| unknown_reduction(s, &Reduction::accepted_names()))
    }
}

impl FromStr for KLDivReduction {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self> {
        KLDivReduction::variants()
            .iter()
            .copied()
            .find(|r| r.name() == s)
            .ok_or_else(|| unknown_reduction(s, &KLDivReduction::accepted_names()))
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for KLDivReduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Reduction> for KLDivReduction {
    fn from(reduction: Reduction) -> Self {
        match reduction {
            Reduction::None => KLDivReduction::None,
            Reduction::Mean => KLDivReduction::Mean,
            Reduction::Sum => KLDivReduction::Sum,
        }
    }
}

impl TryFrom<KLDivReduction> for Reduction {
    type Error = OptionsError;

    /// `BatchMean` has no counterpart outside the KL divergence.
    fn try_from(reduction: KLDivReduction) -> Result<Self> {
        match reduction {
            KLDivReduction::None => Ok(Reduction::None),
            KLDivReduction::Mean => Ok(Reduction::Mean),
            KLDivReduction::Sum => Ok(Reduction::Sum),
            KLDivReduction::BatchMean => Err(unknown_reduction(
                reduction.name(),
                &Reduction::accepted_names(),
            )),
        }
    }
}
