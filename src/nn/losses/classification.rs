// src/nn/losses/classification.rs
// Options for classification losses: binary cross entropy and the
// margin / soft-margin family over class scores.

use crate::nn::losses::reduction::Reduction;
use crate::tensor::Tensor;

loss_options! {
    /// Options for the binary cross entropy loss.
    pub struct BCELossOptions as "BCELoss" {
        /// A manual rescaling weight given to the loss of each batch element.
        /// Unset means no rescaling.
        weight: Option<Tensor> = None => with_weight;
        /// Specifies the reduction to apply to the output.
        /// `none` | `mean` | `sum`. Default: `mean`
        reduction: Reduction = Reduction::Mean => with_reduction;
    }
}

loss_options! {
    /// Options for the multi-class margin (hinge) loss.
    pub struct MultiMarginLossOptions as "MultiMarginLoss" {
        /// Exponent of the hinge term. `1` and `2` are the only values the
        /// kernel supports; the record does not enforce it
        /// (see [`checks::multi_margin_p`](crate::nn::losses::checks::multi_margin_p)).
        /// Default: `1`
        p: i64 = 1 => with_p;
        /// Default: `1.0`
        margin: f64 = 1.0 => with_margin;
        /// A manual rescaling weight given to each class. If given, it has to
        /// be a tensor of size `C`. Otherwise, it is treated as all ones.
        weight: Option<Tensor> = None => with_weight;
        /// Specifies the reduction to apply to the output.
        /// `none` | `mean` | `sum`. Default: `mean`
        reduction: Reduction = Reduction::Mean => with_reduction;
    }
}

loss_options! {
    /// Options for the multi-label margin loss.
    pub struct MultiLabelMarginLossOptions as "MultiLabelMarginLoss" {
        /// `none`: no reduction, `mean`: the sum of the output divided by the
        /// number of output elements, `sum`: the output is summed.
        /// Default: `mean`
        reduction: Reduction = Reduction::Mean => with_reduction;
    }
}

loss_options! {
    /// Options for the two-class soft margin (logistic) loss.
    pub struct SoftMarginLossOptions as "SoftMarginLoss" {
        /// `none` | `mean` | `sum`. Default: `mean`
        reduction: Reduction = Reduction::Mean => with_reduction;
    }
}

loss_options! {
    /// Options for the multi-label one-versus-all soft margin loss.
    pub struct MultiLabelSoftMarginLossOptions as "MultiLabelSoftMarginLoss" {
        /// A manual rescaling weight given to each class. If given, it has to
        /// be a tensor of size `C`. Otherwise, it is treated as all ones.
        weight: Option<Tensor> = None => with_weight;
        /// `none` | `mean` | `sum`. Default: `mean`
        reduction: Reduction = Reduction::Mean => with_reduction;
    }
}

impl From<Reduction> for MultiLabelMarginLossOptions {
    fn from(reduction: Reduction) -> Self {
        Self::new().with_reduction(reduction)
    }
}

impl From<Reduction> for SoftMarginLossOptions {
    fn from(reduction: Reduction) -> Self {
        Self::new().with_reduction(reduction)
    }
}
