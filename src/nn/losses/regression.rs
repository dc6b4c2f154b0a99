// src/nn/losses/regression.rs
// Options for regression losses: element-wise distances between predictions
// and continuous targets. Both only carry a reduction.

use crate::nn::losses::reduction::Reduction;

loss_options! {
    /// Options for the L1 loss: `|predictions - targets|`.
    pub struct L1LossOptions as "L1Loss" {
        /// Specifies the reduction to apply to the output.
        /// `none` | `mean` | `sum`. Default: `mean`
        reduction: Reduction = Reduction::Mean => with_reduction;
    }
}

loss_options! {
    /// Options for the mean squared error loss: `(predictions - targets)²`.
    pub struct MSELossOptions as "MSELoss" {
        /// Specifies the reduction to apply to the output.
        /// `none` | `mean` | `sum`. Default: `mean`
        reduction: Reduction = Reduction::Mean => with_reduction;
    }
}

impl From<Reduction> for L1LossOptions {
    fn from(reduction: Reduction) -> Self {
        Self::new().with_reduction(reduction)
    }
}

impl From<Reduction> for MSELossOptions {
    fn from(reduction: Reduction) -> Self {
        Self::new().with_reduction(reduction)
    }
}
