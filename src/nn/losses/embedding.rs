// src/nn/losses/embedding.rs
// Options for losses over embedding distances and similarities.

use crate::nn::losses::reduction::Reduction;

loss_options! {
    /// Options for the hinge embedding loss.
    pub struct HingeEmbeddingLossOptions as "HingeEmbeddingLoss" {
        /// Threshold the distance of a negative sample must reach in order to
        /// incur zero loss. Default: `1.0`
        margin: f64 = 1.0 => with_margin;
        /// `none` | `mean` | `sum`. Default: `mean`
        reduction: Reduction = Reduction::Mean => with_reduction;
    }
}

loss_options! {
    /// Options for the cosine embedding loss.
    pub struct CosineEmbeddingLossOptions as "CosineEmbeddingLoss" {
        /// Threshold the cosine similarity of a negative pair must fall under
        /// in order to incur zero loss. Should lie in `[-1, 1]`; `0` to `0.5`
        /// is suggested. Default: `0.0`
        margin: f64 = 0.0 => with_margin;
        /// `none` | `mean` | `sum`. Default: `mean`
        reduction: Reduction = Reduction::Mean => with_reduction;
    }
}

loss_options! {
    /// Options for the triplet margin loss over (anchor, positive, negative).
    pub struct TripletMarginLossOptions as "TripletMarginLoss" {
        /// Threshold the distance of a negative sample must reach in order to
        /// incur zero loss. Default: `1.0`
        margin: f64 = 1.0 => with_margin;
        /// Norm degree for the pairwise distance. Default: `2.0`
        p: f64 = 2.0 => with_p;
        /// Small constant added to the pairwise distance. Default: `1e-6`
        eps: f64 = 1e-6 => with_eps;
        /// Enables the distance swap described in "Learning shallow
        /// convolutional feature descriptors with triplet losses" by
        /// V. Balntas, E. Riba et al.: the kernel uses the smaller of the
        /// anchor-negative and positive-negative distances. Default: `false`
        swap: bool = false => with_swap;
        /// `none` | `mean` | `sum`. Default: `mean`
        reduction: Reduction = Reduction::Mean => with_reduction;
    }
}
