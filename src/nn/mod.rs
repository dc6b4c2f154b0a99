// Neural Network Module
// Option records for the loss functions of the neural network library.
// The loss kernels themselves live with the tensor engine; this module only
// declares what each kernel is configured with.

pub mod losses;

// Re-export the main types and traits for convenience
pub use losses::{
    ArgValue, BCELossOptions, CosineEmbeddingLossOptions, HingeEmbeddingLossOptions,
    KLDivLossOptions, KLDivReduction, L1LossOptions, LossOptions, MSELossOptions,
    MultiLabelMarginLossOptions, MultiLabelSoftMarginLossOptions, MultiMarginLossOptions,
    Reduction, SoftMarginLossOptions, TripletMarginLossOptions,
};
