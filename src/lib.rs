//! # Loss options
//!
//! Configuration records for the loss functions of a neural network library,
//! mirroring PyTorch's `torch.nn` loss constructors.
//!
//! Each record bundles the named, defaulted parameters a loss kernel needs
//! (reduction mode, margin, per-class weight) and nothing else: no tensor
//! math, no autodiff. Records are plain values built from defaults and
//! configured with fluent `with_*` setters.
//!
//! ```
//! use loss_options::nn::{Reduction, TripletMarginLossOptions};
//!
//! let options = TripletMarginLossOptions::new()
//!     .with_margin(0.5)
//!     .with_swap(true)
//!     .with_reduction(Reduction::Sum);
//!
//! assert_eq!(options.margin(), 0.5);
//! assert_eq!(options.p(), 2.0);
//! assert!(options.swap());
//! assert_eq!(options.reduction(), Reduction::Sum);
//! ```
//!
//! ## Features
//!
//! - One record per loss, every field defaulted
//! - Closed reduction enums: `batchmean` only exists for the KL divergence
//! - By-name configuration through [`nn::LossOptions`] for bindings that
//!   forward keyword arguments
//! - Kernel-side precondition checks in [`nn::losses::checks`]
//! - Written 100% in safe Rust
//!
pub mod error;
pub mod nn;
pub mod tensor;

// Re-export commonly used types for convenience
pub use error::{OptionsError, Result};
pub use tensor::Tensor;
