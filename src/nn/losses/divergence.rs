// src/nn/losses/divergence.rs
// Options for divergence losses between distributions. KL divergence is the
// only loss whose reduction set includes batchmean.

use crate::nn::losses::reduction::{KLDivReduction, Reduction};

loss_options! {
    /// Options for the Kullback-Leibler divergence loss.
    ///
    /// The only loss whose reduction may be `batchmean`.
    pub struct KLDivLossOptions as "KLDivLoss" {
        /// Specifies the reduction to apply to the output.
        /// `none` | `batchmean` | `sum` | `mean`. Default: `mean`
        ///
        /// `mean` divides by the number of output elements, `batchmean` by
        /// the batch size.
        reduction: KLDivReduction = KLDivReduction::Mean => with_reduction;
    }
}

impl From<KLDivReduction> for KLDivLossOptions {
    fn from(reduction: KLDivReduction) -> Self {
        Self::new().with_reduction(reduction)
    }
}

impl From<Reduction> for KLDivLossOptions {
    fn from(reduction: Reduction) -> Self {
        Self::new().with_reduction(reduction)
    }
}
