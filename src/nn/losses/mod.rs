#[macro_use]
mod macros;

pub mod args;
pub mod checks;
pub mod classification;
pub mod divergence;
pub mod embedding;
pub mod reduction;
pub mod regression;


use crate::error::{OptionsError, Result};
pub use args::ArgValue;
pub use classification::{
    BCELossOptions, MultiLabelMarginLossOptions, MultiLabelSoftMarginLossOptions,
    MultiMarginLossOptions, SoftMarginLossOptions,
};
pub use divergence::KLDivLossOptions;
pub use embedding::{
    CosineEmbeddingLossOptions, HingeEmbeddingLossOptions, TripletMarginLossOptions,
};
pub use reduction::{KLDivReduction, Reduction, ReductionMode};
pub use regression::{L1LossOptions, MSELossOptions};

/// Base trait for all loss option records.
///
/// Every record is a plain value: defaults on construction, fluent `with_*`
/// setters, and read-only accessors for the kernel. This trait adds the
/// by-name surface used by bindings that forward keyword arguments, e.g.
/// `TripletMarginLoss(margin=0.5, swap=True)`.
pub trait LossOptions: Default + Clone + std::fmt::Debug {
    /// Name of the loss these options configure.
    const NAME: &'static str;

    /// Field names, in declaration order.
    fn argument_names() -> &'static [&'static str];

    /// Reads a field by name.
    fn get(&self, name: &str) -> Result<ArgValue>;

    /// Assigns a single field by name.
    ///
    /// Unknown names, mistyped values and reduction names outside the
    /// record's variant set fail with `InvalidArgument`; the record is left
    /// unchanged in that case.
    fn set(&mut self, name: &str, value: ArgValue) -> Result<()>;

    /// Every field with its current value, in declaration order.
    fn arguments(&self) -> Vec<(&'static str, ArgValue)> {
        Self::argument_names()
            .iter()
            .filter_map(|&name| self.get(name).ok().map(|value| (name, value)))
            .collect()
    }

    /// Builds a record from defaults plus keyword arguments.
    ///
    /// The first rejected pair aborts construction; no partially configured
    /// record is returned.
    fn from_kwargs<I, K, V>(kwargs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<ArgValue>,
    {
        let mut options = Self::default();
        for (name, value) in kwargs {
            options.set(name.as_ref(), value.into())?;
        }
        Ok(options)
    }
}

pub(crate) fn unknown_argument<O: LossOptions>(
    name: &str,
    value: Option<&ArgValue>,
) -> OptionsError {
    let shown = value.map_or_else(|| "<missing>".to_string(), |v| v.to_string());
    OptionsError::invalid_argument(
        name,
        shown,
        format!(
            "{} has no such argument, expected one of {}",
            O::NAME,
            O::argument_names().join(", ")
        ),
    )
}
