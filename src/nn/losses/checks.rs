// src/nn/losses/checks.rs
// Precondition checks a loss kernel runs on the options it receives.
// The records accept any primitive value; valid ranges are loss-specific
// numeric policy, so the kernel calls these before computing and surfaces
// an InvalidArgument naming the offending field.

use crate::error::{OptionsError, Result};
use crate::tensor::Tensor;

/// Multi-margin exponent: only `1` and `2` are supported.
pub fn multi_margin_p(p: i64) -> Result<i64> {
    match p {
        1 | 2 => Ok(p),
        _ => Err(OptionsError::invalid_argument(
            "p",
            p,
            "only p == 1 and p == 2 supported",
        )),
    }
}

/// Per-class rescaling weight: when set, a 1-D tensor with one entry per
/// class. Unset weights are treated as all ones and always pass.
pub fn class_weight(weight: Option<&Tensor>, classes: usize) -> Result<()> {
    let Some(weight) = weight else {
        return Ok(());
    };

    if weight.ndim() != 1 || weight.len() != classes {
        return Err(OptionsError::invalid_argument(
            "weight",
            weight,
            format!(
                "expected a 1-D tensor of size {classes}, got shape {:?}",
                weight.shape()
            ),
        ));
    }
    Ok(())
}

/// Triplet margin norm degree: finite and strictly positive.
pub fn triplet_norm_degree(p: f64) -> Result<f64> {
    if p.is_finite() && p > 0.0 {
        Ok(p)
    } else {
        Err(OptionsError::invalid_argument(
            "p",
            p,
            "norm degree must be a positive finite number",
        ))
    }
}

/// Triplet margin distance stabilizer: finite and non-negative.
pub fn triplet_eps(eps: f64) -> Result<f64> {
    if eps.is_finite() && eps >= 0.0 {
        Ok(eps)
    } else {
        Err(OptionsError::invalid_argument(
            "eps",
            eps,
            "eps must be a non-negative finite number",
        ))
    }
}
